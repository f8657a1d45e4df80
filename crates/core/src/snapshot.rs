use serde::Serialize;

use crate::figure::Bitmask;
use crate::types::{Cell, GameStatus, EMPTY_CELL, FIELD_HEIGHT, FIELD_WIDTH};

/// Row-major copy of the field, `[y][x]`
pub type GridMatrix = [[Cell; FIELD_WIDTH]; FIELD_HEIGHT];

/// Everything a front end needs to draw one frame.
///
/// Produced by value on every query; it never aliases engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSnapshot {
    pub grid: GridMatrix,
    /// Next-figure preview (falling-block engine only)
    pub next: Option<Bitmask>,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub speed: u32,
    pub paused: bool,
    /// Snake boost toggle; always false for the falling-block engine
    pub boosted: bool,
    pub status: GameStatus,
}

impl RenderSnapshot {
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.grid.get(y).and_then(|row| row.get(x)).copied()
    }

    pub fn occupied_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|&&cell| cell != EMPTY_CELL)
            .count()
    }

    pub fn playable(&self) -> bool {
        self.status.is_playing() && !self.paused
    }
}
