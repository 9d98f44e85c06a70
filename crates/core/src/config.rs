//! Runtime configuration, read from the environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::types::{DEFAULT_FALL_SPEED, FRAME_MS};

/// Default location of the shape data, relative to the working directory.
pub const DEFAULT_SHAPES_PATH: &str = "resources/shapes.txt";

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Shape data file.
    pub shapes_path: PathBuf,
    /// Fraction of the update interval between automatic falls.
    pub fall_speed: f32,
    /// Frame cap for the clock.
    pub frame: Duration,
    /// Shape picker seed; entropy when unset.
    pub seed: Option<u64>,
    /// JSON-lines event log; disabled when unset.
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            shapes_path: PathBuf::from(DEFAULT_SHAPES_PATH),
            fall_speed: DEFAULT_FALL_SPEED,
            frame: Duration::from_millis(FRAME_MS as u64),
            seed: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// - `SUPA_TETRIS_SHAPES`: shape data path
    /// - `SUPA_TETRIS_FALL_SPEED`: positive fall threshold fraction
    /// - `SUPA_TETRIS_FRAME_MS`: frame cap in milliseconds
    /// - `SUPA_TETRIS_SEED`: shape picker seed
    /// - `SUPA_TETRIS_LOG_PATH`: event log path
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let shapes_path = non_empty("SUPA_TETRIS_SHAPES")
            .map(PathBuf::from)
            .unwrap_or(defaults.shapes_path);

        let fall_speed = non_empty("SUPA_TETRIS_FALL_SPEED")
            .and_then(|s| s.parse::<f32>().ok())
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(defaults.fall_speed);

        let frame = non_empty("SUPA_TETRIS_FRAME_MS")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.frame);

        let seed = non_empty("SUPA_TETRIS_SEED").and_then(|s| s.parse().ok());
        let log_path = non_empty("SUPA_TETRIS_LOG_PATH").map(PathBuf::from);

        Self {
            shapes_path,
            fall_speed,
            frame,
            seed,
            log_path,
        }
    }
}
