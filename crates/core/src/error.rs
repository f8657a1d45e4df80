//! Error types for the core crate.

use std::io;

use thiserror::Error;

/// Grid access outside `[0, width) x [0, height)`.
///
/// Engines never produce this during normal play; it signals a logic defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the grid")]
    OutOfBounds { x: i32, y: i32 },
}

/// High-score persistence failure.
///
/// The store never hands these to its callers; they are logged and replaced by defaults.
#[derive(Debug, Error)]
pub enum HighScoreError {
    #[error("high-score file i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("high-score record is {len} bytes, expected {expected}")]
    Truncated { len: usize, expected: usize },
}
