//! Brick game (workspace facade crate).
//!
//! Re-exports the workspace crates under one path: `brick_game::{core,input,term,types}`.
//! The implementation lives in dedicated crates under `crates/`.

pub use brick_game_core as core;
pub use brick_game_input as input;
pub use brick_game_term as term;
pub use brick_game_types as types;
