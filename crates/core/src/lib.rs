//! Core game logic - two deterministic, tick-driven grid simulations
//!
//! This crate contains the rules, state management and pacing for both games.
//! It has no dependency on terminal, input or rendering code, making it:
//!
//! - **Deterministic**: the same seed replays the same figures and apples
//! - **Testable**: every rule is reachable from unit tests without a clock
//! - **Portable**: any front end drives it through the [`Engine`] trait
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 bounds-checked cell buffer shared by both engines
//! - [`figure`]: the seven 5x5 figure templates and their rotation
//! - [`tetris`]: falling-block engine (moves, rotation, locking, line clears)
//! - [`snake`]: snake engine (direction guard, growth, apples, win)
//! - [`scheduler`]: frame-delay budget from speed and boost
//! - [`high_score`]: single persisted record per engine
//! - [`scoring`]: line-clear points and level progression
//! - [`snapshot`]: immutable render snapshot handed to front ends
//! - [`config`]: environment-driven runtime configuration
//!
//! # Example
//!
//! ```
//! use brick_game_core::{Engine, TetrisEngine};
//! use brick_game_core::types::{Action, GameStatus};
//!
//! let mut game = TetrisEngine::with_seed(12345);
//!
//! game.apply_action(Action::Right);
//! game.apply_action(Action::Primary);
//! game.apply_action(Action::Down); // hard drop locks the figure
//!
//! let snap = game.snapshot();
//! assert_eq!(snap.status, GameStatus::Playing);
//! assert!(snap.occupied_count() >= 4);
//! ```
//!
//! # Timing
//!
//! Engines never sleep. A front end calls
//! [`Engine::advance_if_due`] on every loop iteration; the scheduler fires a tick
//! once `base_frame / (speed * boost)` of unpaused wall-clock time has passed.

pub mod config;
pub mod engine;
pub mod error;
pub mod figure;
pub mod grid;
pub mod high_score;
pub mod rng;
pub mod scheduler;
pub mod scoring;
pub mod snake;
pub mod snapshot;
pub mod tetris;

pub use brick_game_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use engine::Engine;
pub use error::{GridError, HighScoreError};
pub use figure::{Figure, ShapeKind};
pub use grid::Grid;
pub use high_score::HighScoreStore;
pub use rng::SimpleRng;
pub use scheduler::{FrameScheduler, PacingStrategy};
pub use scoring::{line_clear_points, snake_level, tetris_level};
pub use snake::{Snake, SnakeEngine};
pub use snapshot::RenderSnapshot;
pub use tetris::TetrisEngine;
