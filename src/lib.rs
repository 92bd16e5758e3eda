//! Gapwing - a gravity-and-gaps arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `render`: Backend-agnostic scene construction
//! - `tuning`: Data-driven game balance

pub mod render;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions in pixels
    pub const WORLD_WIDTH: f32 = 480.0;
    pub const WORLD_HEIGHT: f32 = 640.0;
    /// Height of the ground strip at the bottom of the playfield
    pub const GROUND_HEIGHT: f32 = 20.0;
    /// Y coordinate of the floor line (top of the ground strip)
    pub const FLOOR_Y: f32 = WORLD_HEIGHT - GROUND_HEIGHT;

    /// Downward acceleration added to the bird every frame
    pub const GRAVITY: f32 = 0.5;
    /// Velocity a flap overwrites onto the bird (negative = upward)
    pub const FLAP_IMPULSE: f32 = -8.0;

    /// Bird defaults - horizontal position is fixed for the whole session
    pub const BIRD_X: f32 = 50.0;
    pub const BIRD_RADIUS: f32 = 15.0;

    /// Pipe geometry and motion
    pub const PIPE_WIDTH: f32 = 60.0;
    pub const PIPE_GAP: f32 = 150.0;
    pub const PIPE_SPEED: f32 = 3.0;
    /// Frames between pipe spawns
    pub const PIPE_SPAWN_CADENCE: u64 = 100;
    /// Minimum solid pipe segment above the gap; the same margin is kept
    /// below so the gap always fits in the visible vertical extent
    pub const PIPE_MARGIN: f32 = 50.0;
}

/// Vertical center of the playfield, where a fresh bird starts
#[inline]
pub fn world_center_y() -> f32 {
    consts::WORLD_HEIGHT / 2.0
}
