//! Scoring module - line-clear points and level progression
//!
//! Both engines derive level from score the same way, with different step sizes:
//! `level = min(MAX_LEVEL, score / points_per_level + 1)`. Speed always equals level.

use crate::types::{LINE_CLEAR_SCORES, MAX_LEVEL, SNAKE_POINTS_PER_LEVEL, TETRIS_POINTS_PER_LEVEL};

/// Points for clearing `lines` rows at once (1-4). Anything else scores 0.
pub fn line_clear_points(lines: usize) -> u32 {
    LINE_CLEAR_SCORES.get(lines).copied().unwrap_or(0)
}

fn level_for(score: u32, points_per_level: u32) -> u32 {
    (score / points_per_level + 1).min(MAX_LEVEL)
}

/// Falling-block level for a score
pub fn tetris_level(score: u32) -> u32 {
    level_for(score, TETRIS_POINTS_PER_LEVEL)
}

/// Snake level for a score (apples eaten)
pub fn snake_level(score: u32) -> u32 {
    level_for(score, SNAKE_POINTS_PER_LEVEL)
}
