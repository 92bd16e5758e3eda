//! Data-driven game balance
//!
//! Defaults mirror `consts`; a JSON tuning file can override individual
//! parameters for playtesting without a recompile. Loaded values are
//! sanity-checked before use.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance parameters carried inside the game state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration per frame
    pub gravity: f32,
    /// Velocity overwritten onto the bird by a flap (negative = upward)
    pub flap_impulse: f32,
    pub pipe_width: f32,
    pub pipe_gap: f32,
    pub pipe_speed: f32,
    /// Frames between pipe spawns
    pub pipe_spawn_cadence: u64,
    /// Minimum solid segment kept above and below the gap
    pub pipe_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_speed: PIPE_SPEED,
            pipe_spawn_cadence: PIPE_SPAWN_CADENCE,
            pipe_margin: PIPE_MARGIN,
        }
    }
}

/// Failure loading a tuning file
#[derive(Debug)]
pub enum TuningError {
    Io(io::Error),
    Parse(serde_json::Error),
    /// Parsed fine, but the values cannot drive a session
    Invalid,
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Io(e) => write!(f, "failed to read tuning file: {e}"),
            TuningError::Parse(e) => write!(f, "failed to parse tuning file: {e}"),
            TuningError::Invalid => {
                write!(
                    f,
                    "tuning values out of range: the gap plus margins must fit \
                     the playfield, and pipe speed, width, and spawn cadence \
                     must be positive"
                )
            }
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Io(e) => Some(e),
            TuningError::Parse(e) => Some(e),
            TuningError::Invalid => None,
        }
    }
}

impl Tuning {
    /// Load and validate a tuning file
    pub fn load(path: &Path) -> Result<Self, TuningError> {
        let json = fs::read_to_string(path).map_err(TuningError::Io)?;
        let tuning: Tuning = serde_json::from_str(&json).map_err(TuningError::Parse)?;
        if !tuning.is_valid() {
            return Err(TuningError::Invalid);
        }
        Ok(tuning)
    }

    /// Values the simulation can actually run on:
    /// - the gap plus both margins must leave room inside the playfield,
    ///   otherwise `spawn_pipe` has an empty range to draw from;
    /// - spawn cadence of zero would divide by zero in the frame modulus;
    /// - non-positive speed or width means pipes never score or evict.
    pub fn is_valid(&self) -> bool {
        self.pipe_gap > 0.0
            && self.pipe_margin > 0.0
            && self.pipe_gap + 2.0 * self.pipe_margin < WORLD_HEIGHT
            && self.pipe_spawn_cadence >= 1
            && self.pipe_speed > 0.0
            && self.pipe_width > 0.0
    }
}
