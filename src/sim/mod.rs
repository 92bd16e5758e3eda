//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per display frame, fixed timestep
//! - Seeded RNG only
//! - Stable pipe order (insertion order, left to right)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{bird_ceiling_contact, bird_floor_collision, bird_pipe_collision};
pub use state::{Bird, GameEvent, GamePhase, GameState, Pipe, RngState};
pub use tick::{TickInput, tick};
