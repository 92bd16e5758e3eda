//! Per-frame simulation step
//!
//! Core game loop that advances the session deterministically. Exactly one
//! call per display frame; the external scheduler stops calling once the
//! phase leaves `Running`.

use super::collision::{bird_ceiling_contact, bird_floor_collision, bird_pipe_collision};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::FLOOR_Y;

/// Input latched for a single frame (deterministic)
///
/// Multiple flap events between frames collapse into one; since a flap
/// overwrites velocity rather than accumulating, last-call-wins holds.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Flap impulse (key/click/tap)
    pub flap: bool,
}

/// Advance the game state by one frame
///
/// Flap handling runs first regardless of phase:
/// - `NotStarted`: begins a fresh session AND applies the impulse in the
///   same call, so the first integration step sees the flap velocity.
/// - `Running`: overwrites the bird's velocity with the flap impulse.
/// - `Ended`: ignored.
///
/// The frame step itself only runs while `Running`; calling on an ended
/// session leaves the state untouched.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.flap {
        match state.phase {
            GamePhase::NotStarted => {
                state.start();
                state.bird.flap(state.tuning.flap_impulse);
                events.push(GameEvent::SessionStarted);
            }
            GamePhase::Running => state.bird.flap(state.tuning.flap_impulse),
            GamePhase::Ended => {}
        }
    }

    if state.phase != GamePhase::Running {
        return events;
    }

    state.bird.integrate(state.tuning.gravity);

    // Ceiling is a clamp, not a terminal condition: pin to the boundary,
    // zero the velocity, keep playing.
    if bird_ceiling_contact(&state.bird) {
        state.bird.pos.y = state.bird.radius;
        state.bird.vel = 0.0;
    }

    if state.frame % state.tuning.pipe_spawn_cadence == 0 {
        state.spawn_pipe();
    }

    // Floor check is independent of pipes; a grounded bird dies even on
    // an empty playfield.
    let mut collided = bird_floor_collision(&state.bird, FLOOR_Y);

    if !collided {
        let leading_edge = state.bird.leading_edge();
        let pipe_width = state.tuning.pipe_width;
        for pipe in state.pipes.iter_mut() {
            pipe.x -= state.tuning.pipe_speed;

            if bird_pipe_collision(&state.bird, pipe, pipe_width) {
                // Short-circuit: remaining pipes stay where this frame
                // left them.
                collided = true;
                break;
            }

            // Score exactly once, when the trailing edge clears the
            // bird's leading edge.
            if !pipe.passed && pipe.right_edge(pipe_width) < leading_edge {
                pipe.passed = true;
                state.score += 1;
                events.push(GameEvent::PipeScored { score: state.score });
            }
        }
    }

    if collided {
        state.phase = GamePhase::Ended;
        log::info!("session ended at frame {} with score {}", state.frame, state.score);
        events.push(GameEvent::SessionEnded { score: state.score });
        return events;
    }

    // Evict pipes fully off-screen to the left, order preserved
    let pipe_width = state.tuning.pipe_width;
    state.pipes.retain(|p| p.right_edge(pipe_width) >= 0.0);

    state.frame += 1;
    events
}
