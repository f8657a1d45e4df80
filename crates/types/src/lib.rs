//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by both engines and by the
//! front-end collaborators. All types are plain data with no I/O, usable from
//! core logic, terminal rendering and tests alike.
//!
//! # Grid Dimensions
//!
//! Both engines play on the same field:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Figure bitmask**: 5x5, spawned with its origin at (3, 0)
//!
//! # Progression
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TETRIS_POINTS_PER_LEVEL` | 600 | Falling-block points per level |
//! | `SNAKE_POINTS_PER_LEVEL` | 5 | Apples eaten per level |
//! | `MAX_LEVEL` | 10 | Level (and speed) cap for both engines |
//! | `SNAKE_WIN_LENGTH` | 200 | Body length that wins the snake game |
//!
//! # Line Clear Scores
//!
//! | Rows | Points |
//! |------|--------|
//! | 1 | 100 |
//! | 2 | 300 |
//! | 3 | 700 |
//! | 4 | 1500 |
//!
//! # Examples
//!
//! ```
//! use brick_game_types::{Action, Direction, GameStatus, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! let action = Action::from_str("primary").unwrap();
//! assert_eq!(action, Action::Primary);
//!
//! assert!(Direction::Up.is_opposite(Direction::Down));
//! assert_eq!(Direction::Right.delta(), (1, 0));
//!
//! assert_eq!(GameStatus::Playing.as_str(), "playing");
//! assert_eq!(FIELD_WIDTH, 10);
//! assert_eq!(FIELD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Field width in cells (10 columns)
pub const FIELD_WIDTH: usize = 10;

/// Field height in cells (20 rows)
pub const FIELD_HEIGHT: usize = 20;

/// Side length of the square figure bitmask
pub const FIGURE_SIZE: usize = 5;

/// Number of figure templates
pub const FIGURE_COUNT: usize = 7;

/// Level and speed never exceed this value.
pub const MAX_LEVEL: u32 = 10;

/// Falling-block score needed per level step.
pub const TETRIS_POINTS_PER_LEVEL: u32 = 600;

/// Snake score (apples) needed per level step.
pub const SNAKE_POINTS_PER_LEVEL: u32 = 5;

/// Points by number of rows cleared at once, index = row count.
pub const LINE_CLEAR_SCORES: [u32; 5] = [0, 100, 300, 700, 1500];

/// Snake body length at construction.
pub const SNAKE_INITIAL_LENGTH: usize = 4;

/// Snake body length that ends the game as a win.
pub const SNAKE_WIN_LENGTH: usize = 200;

/// Tick-rate multiplier while snake boost is active.
pub const SNAKE_BOOST_FACTOR: f64 = 1.5;

/// Default base frame budget (delay between ticks at speed 1), in milliseconds.
pub const DEFAULT_FRAME_MS: u64 = 1000;

/// High-score file of the falling-block engine.
pub const TETRIS_HIGH_SCORE_FILE: &str = "tetris_high_score.bin";

/// High-score file of the snake engine.
pub const SNAKE_HIGH_SCORE_FILE: &str = "snake_high_score.bin";

/// Cell value on the grid (0 = empty, positive = occupant / color id)
pub type Cell = u8;

/// Empty grid cell.
pub const EMPTY_CELL: Cell = 0;

/// Snake body segment (every segment except the head).
pub const SNAKE_BODY_CELL: Cell = 1;

/// Snake head.
pub const SNAKE_HEAD_CELL: Cell = 2;

/// The apple.
pub const APPLE_CELL: Cell = 3;


/// Abstract user action handed to an engine by a front end
///
/// Front ends map their own input events (keys, buttons) to these values:
/// - **Left / Right / Up / Down**: movement (snake direction, or piece moves)
/// - **Primary**: rotate the piece (falling-block) or toggle boost (snake)
/// - **Pause**: pause, or resume when already paused
/// - **Terminate**: end the round immediately; accepted even while paused
/// - **None**: no input this evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    Left,
    Right,
    Up,
    Down,
    Primary,
    Pause,
    Terminate,
    None,
}

impl Action {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use brick_game_types::Action;
    ///
    /// assert_eq!(Action::from_str("LEFT"), Some(Action::Left));
    /// assert_eq!(Action::from_str("terminate"), Some(Action::Terminate));
    /// assert_eq!(Action::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Action::Left),
            "right" => Some(Action::Right),
            "up" => Some(Action::Up),
            "down" => Some(Action::Down),
            "primary" => Some(Action::Primary),
            "pause" => Some(Action::Pause),
            "terminate" => Some(Action::Terminate),
            "none" => Some(Action::None),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Left => "left",
            Action::Right => "right",
            Action::Up => "up",
            Action::Down => "down",
            Action::Primary => "primary",
            Action::Pause => "pause",
            Action::Terminate => "terminate",
            Action::None => "none",
        }
    }
}

/// Snake movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Returns true if turning from `self` to `other` would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Grid delta `(dx, dy)` for one step; y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// Direction requested by a movement action, if any.
    pub fn from_action(action: Action) -> Option<Self> {
        match action {
            Action::Left => Some(Direction::Left),
            Action::Right => Some(Direction::Right),
            Action::Up => Some(Direction::Up),
            Action::Down => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Lifecycle state of a round
///
/// `Win` is only reachable by the snake engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    Playing,
    GameOver,
    Win,
}

impl GameStatus {
    pub fn is_playing(&self) -> bool {
        matches!(self, GameStatus::Playing)
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::GameOver => "gameOver",
            GameStatus::Win => "win",
        }
    }
}
