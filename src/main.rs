//! Gapwing entry point (headless runner)
//!
//! Drives the simulation one tick per notional display frame with a small
//! autopilot supplying flap input, and logs session events. A browser or
//! windowed frontend would replace the loop body with its own frame
//! scheduler, input source, and a rasterizer for `render::build_scene`.

use std::env;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use gapwing::consts::*;
use gapwing::render::build_scene;
use gapwing::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use gapwing::tuning::Tuning;

/// Safety valve for the autopilot (ten minutes at 60 fps)
const MAX_FRAMES: u64 = 60 * 60 * 10;

fn main() {
    env_logger::init();

    let seed = env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(wall_clock_seed);
    let tuning = load_tuning();

    log::info!("Gapwing starting (seed {seed})");
    let mut state = GameState::with_tuning(seed, tuning);

    // The first flap both starts the session and lifts the bird.
    let mut input = TickInput { flap: true };

    while state.phase != GamePhase::Ended && state.frame < MAX_FRAMES {
        for event in tick(&mut state, &input) {
            match event {
                GameEvent::SessionStarted => log::info!("session started"),
                GameEvent::PipeScored { score } => log::debug!("pipe cleared, score {score}"),
                GameEvent::SessionEnded { score } => log::info!("game over, final score {score}"),
            }
        }
        input.flap = autopilot_flap(&state);
    }

    let scene = build_scene(&state);
    println!(
        "seed {seed}: score {} after {} frames ({} shapes in final scene)",
        state.score,
        state.frame,
        scene.shapes.len()
    );
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Tuning comes from `GAPWING_TUNING` if set; bad files fall back to
/// defaults rather than aborting.
fn load_tuning() -> Tuning {
    let Ok(path) = env::var("GAPWING_TUNING") else {
        return Tuning::default();
    };
    match Tuning::load(Path::new(&path)) {
        Ok(tuning) => {
            log::info!("loaded tuning from {path}");
            tuning
        }
        Err(e) => {
            log::warn!("ignoring tuning file {path}: {e}");
            Tuning::default()
        }
    }
}

/// Flap when the next integration step would put the bird below the
/// center of the nearest upcoming gap (or below mid-screen if no pipe
/// is ahead).
fn autopilot_flap(state: &GameState) -> bool {
    if state.phase != GamePhase::Running {
        return false;
    }
    let bird = &state.bird;
    let target = state
        .pipes
        .iter()
        .find(|p| p.right_edge(state.tuning.pipe_width) >= bird.leading_edge())
        .map(|p| (p.top_height + p.bottom_y) / 2.0)
        .unwrap_or(WORLD_HEIGHT / 2.0);
    bird.pos.y + bird.vel + state.tuning.gravity > target
}
