//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Action`], one mapping per
//! game. Engines only ever see the abstract actions.

pub mod map;

pub use brick_game_types as types;

pub use map::{should_quit, snake_action, tetris_action};
