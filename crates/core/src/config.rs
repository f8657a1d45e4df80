//! Runtime configuration read from `BRICK_GAME_*` environment variables.

use std::env;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::{DEFAULT_FRAME_MS, SNAKE_HIGH_SCORE_FILE, TETRIS_HIGH_SCORE_FILE};

pub const SEED_VAR: &str = "BRICK_GAME_SEED";
pub const DATA_DIR_VAR: &str = "BRICK_GAME_DATA_DIR";
pub const TETRIS_FRAME_VAR: &str = "BRICK_GAME_TETRIS_FRAME_MS";
pub const SNAKE_FRAME_VAR: &str = "BRICK_GAME_SNAKE_FRAME_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    /// Directory holding the high-score files
    pub data_dir: PathBuf,
    /// Tick delay of the falling-block engine at speed 1
    pub tetris_frame: Duration,
    /// Tick delay of the snake engine at speed 1, boost off
    pub snake_frame: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            data_dir: PathBuf::from("."),
            tetris_frame: Duration::from_millis(DEFAULT_FRAME_MS),
            snake_frame: Duration::from_millis(DEFAULT_FRAME_MS),
        }
    }
}

impl GameConfig {
    /// Create from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an injectable variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup(SEED_VAR)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let data_dir = lookup(DATA_DIR_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let frame = |key: &str, fallback: Duration| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|&ms| ms > 0)
                .map(Duration::from_millis)
                .unwrap_or(fallback)
        };

        Self {
            seed,
            data_dir,
            tetris_frame: frame(TETRIS_FRAME_VAR, defaults.tetris_frame),
            snake_frame: frame(SNAKE_FRAME_VAR, defaults.snake_frame),
        }
    }

    pub fn tetris_high_score_path(&self) -> PathBuf {
        self.data_dir.join(TETRIS_HIGH_SCORE_FILE)
    }

    pub fn snake_high_score_path(&self) -> PathBuf {
        self.data_dir.join(SNAKE_HIGH_SCORE_FILE)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}
