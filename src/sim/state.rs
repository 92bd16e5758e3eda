//! Game state and core simulation types
//!
//! All state that must be persisted for snapshots/determinism lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;
use crate::world_center_y;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen; the first flap begins the session
    NotStarted,
    /// Active gameplay
    Running,
    /// Session over, waiting for restart
    Ended,
}

/// The player-controlled bird
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Position; `pos.x` never changes during a session
    pub pos: Vec2,
    /// Vertical velocity (positive = downward, screen coordinates)
    pub vel: f32,
    pub radius: f32,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(BIRD_X, world_center_y()),
            vel: 0.0,
            radius: BIRD_RADIUS,
        }
    }

    /// Semi-implicit Euler step: gravity first, then position
    pub fn integrate(&mut self, gravity: f32) {
        self.vel += gravity;
        self.pos.y += self.vel;
    }

    /// Overwrite (not add to) the vertical velocity with the flap impulse
    pub fn flap(&mut self, impulse: f32) {
        self.vel = impulse;
    }

    /// Top edge of the bird
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    /// Bottom edge of the bird
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    /// Leading (left) edge; pipes score once their trailing edge passes it
    #[inline]
    pub fn leading_edge(&self) -> f32 {
        self.pos.x - self.radius
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// A pipe pair: solid above `top_height`, solid below `bottom_y`,
/// with the gap in between
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge; decreases every frame
    pub x: f32,
    /// Where the top segment ends (gap start)
    pub top_height: f32,
    /// Where the bottom segment starts (`top_height + gap`)
    pub bottom_y: f32,
    /// Set once the pipe has been scored
    pub passed: bool,
}

impl Pipe {
    pub fn new(x: f32, top_height: f32, gap: f32) -> Self {
        Self {
            x,
            top_height,
            bottom_y: top_height + gap,
            passed: false,
        }
    }

    /// Trailing (right) edge
    #[inline]
    pub fn right_edge(&self, width: f32) -> f32 {
        self.x + width
    }
}

/// RNG state wrapper for serialization
///
/// Each draw reseeds a fresh `Pcg32` from the seed and a draw counter,
/// so a serialized state replays the same pipe sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub draws: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, draws: 0 }
    }

    /// RNG for the next draw; advances the draw counter
    pub fn next_rng(&mut self) -> Pcg32 {
        let stream = self.draws.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        self.draws += 1;
        Pcg32::seed_from_u64(self.seed.wrapping_add(stream))
    }
}

/// Observable session events, consumed by the runner/notifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh session began (first flap or restart)
    SessionStarted,
    /// A pipe was cleared; carries the running total
    PipeScored { score: u32 },
    /// Terminal collision; carries the final score
    SessionEnded { score: u32 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// Current phase
    pub phase: GamePhase,
    /// Pipes cleared this session
    pub score: u32,
    /// Frames advanced this session
    pub frame: u64,
    /// The player bird
    pub bird: Bird,
    /// Active pipes, insertion order (leftmost first)
    pub pipes: Vec<Pipe>,
    /// Balance parameters for this run
    pub tuning: Tuning,
}

impl GameState {
    /// Create a new state on the start screen with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new state with the given tuning. Values that cannot drive
    /// a session (see [`Tuning::is_valid`]) are replaced with defaults, so
    /// `tick` and `spawn_pipe` only ever see runnable parameters.
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let tuning = if tuning.is_valid() {
            tuning
        } else {
            log::warn!("tuning values out of range, using defaults");
            Tuning::default()
        };
        Self {
            seed,
            rng_state: RngState::new(seed),
            phase: GamePhase::NotStarted,
            score: 0,
            frame: 0,
            bird: Bird::new(),
            pipes: Vec::new(),
            tuning,
        }
    }

    /// Reset to a fresh running session: new bird at center, no pipes,
    /// counters zeroed. The RNG draw counter carries over so consecutive
    /// sessions see different pipe sequences.
    pub fn start(&mut self) {
        self.bird = Bird::new();
        self.pipes.clear();
        self.score = 0;
        self.frame = 0;
        self.phase = GamePhase::Running;
    }

    /// Append a pipe at the right edge with a randomized gap offset
    ///
    /// The gap's top is drawn so that at least `pipe_margin` of solid pipe
    /// remains above it and below the gap.
    pub fn spawn_pipe(&mut self) {
        let max_top = WORLD_HEIGHT - self.tuning.pipe_gap - self.tuning.pipe_margin;
        let mut rng = self.rng_state.next_rng();
        let top_height = rng.random_range(self.tuning.pipe_margin..max_top);
        self.pipes
            .push(Pipe::new(WORLD_WIDTH, top_height, self.tuning.pipe_gap));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_not_started() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.score, 0);
        assert!(state.pipes.is_empty());
        assert_eq!(state.bird.pos, Vec2::new(BIRD_X, WORLD_HEIGHT / 2.0));
        assert_eq!(state.bird.vel, 0.0);
    }

    #[test]
    fn start_resets_session_but_keeps_rng_progress() {
        let mut state = GameState::new(7);
        state.start();
        state.spawn_pipe();
        state.score = 3;
        state.frame = 250;
        state.bird.pos.y = 100.0;

        let draws_before = state.rng_state.draws;
        state.start();

        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.frame, 0);
        assert!(state.pipes.is_empty());
        assert_eq!(state.bird, Bird::new());
        assert_eq!(state.rng_state.draws, draws_before);
    }

    #[test]
    fn spawn_pipe_respects_gap_margins() {
        let mut state = GameState::new(42);
        state.start();
        for _ in 0..200 {
            state.spawn_pipe();
        }
        for pipe in &state.pipes {
            assert!(pipe.top_height >= PIPE_MARGIN);
            assert!(pipe.bottom_y <= WORLD_HEIGHT - PIPE_MARGIN);
            assert_eq!(pipe.bottom_y, pipe.top_height + PIPE_GAP);
            assert_eq!(pipe.x, WORLD_WIDTH);
            assert!(!pipe.passed);
        }
    }

    #[test]
    fn same_seed_spawns_same_pipes() {
        let mut a = GameState::new(99);
        let mut b = GameState::new(99);
        a.start();
        b.start();
        for _ in 0..10 {
            a.spawn_pipe();
            b.spawn_pipe();
        }
        assert_eq!(a.pipes, b.pipes);

        let mut c = GameState::new(100);
        c.start();
        c.spawn_pipe();
        assert_ne!(a.pipes[0].top_height, c.pipes[0].top_height);
    }

    #[test]
    fn with_tuning_replaces_unrunnable_values_with_defaults() {
        use crate::sim::{TickInput, tick};

        // Zero cadence would divide by zero in the tick's frame modulus.
        let mut zero_cadence = Tuning::default();
        zero_cadence.pipe_spawn_cadence = 0;
        let mut state = GameState::with_tuning(1, zero_cadence);
        assert_eq!(state.tuning, Tuning::default());
        state.start();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.frame, 1);

        // Negative speed would keep pipes drifting right forever.
        let mut backward = Tuning::default();
        backward.pipe_speed = -PIPE_SPEED;
        let state = GameState::with_tuning(2, backward);
        assert_eq!(state.tuning.pipe_speed, PIPE_SPEED);

        // An oversized gap would leave `spawn_pipe` an empty range.
        let mut oversized = Tuning::default();
        oversized.pipe_gap = WORLD_HEIGHT;
        let mut state = GameState::with_tuning(3, oversized);
        state.start();
        state.spawn_pipe();
        assert!(state.pipes[0].top_height >= PIPE_MARGIN);
    }

    #[test]
    fn bird_integrate_applies_gravity_then_position() {
        let mut bird = Bird::new();
        bird.flap(FLAP_IMPULSE);
        let y0 = bird.pos.y;
        bird.integrate(GRAVITY);
        assert_eq!(bird.vel, -7.5);
        assert_eq!(bird.pos.y, y0 - 7.5);
    }
}
