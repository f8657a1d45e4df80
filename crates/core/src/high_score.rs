//! High-score store - a single persisted integer per engine
//!
//! The record is a native-endian `i32` in a fixed-name binary file. A missing or
//! unreadable file reads as 0 and is (re)created with that value. Every
//! comparison re-reads the file, so a higher record left by another run is
//! adopted instead of overwritten. Write failures are logged and swallowed.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::HighScoreError;

const RECORD_LEN: usize = std::mem::size_of::<i32>();

#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: Option<PathBuf>,
    best: u32,
    persisted: u32,
}

impl HighScoreStore {
    /// Load the record at `path`, creating it with 0 when absent or unreadable
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = match read_record(&path) {
            Ok(value) => value,
            Err(err) => {
                match &err {
                    HighScoreError::Io(io) if io.kind() == ErrorKind::NotFound => {
                        debug!(path = %path.display(), "no high score file, starting at 0");
                    }
                    _ => warn!(path = %path.display(), error = %err, "unreadable high score file, starting at 0"),
                }
                if let Err(err) = write_record(&path, 0) {
                    warn!(path = %path.display(), error = %err, "failed to create high score file");
                }
                0
            }
        };

        Self {
            path: Some(path),
            best,
            persisted: best,
        }
    }

    /// In-memory store with no backing file
    pub fn detached() -> Self {
        Self {
            path: None,
            best: 0,
            persisted: 0,
        }
    }

    pub fn high_score(&self) -> u32 {
        self.best
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Compare `score` against the record, persisting it when it is a new best.
    ///
    /// Returns true when the high score increased.
    pub fn record(&mut self, score: u32) -> bool {
        let on_disk = self.path.as_deref().and_then(|path| read_record(path).ok());
        if let Some(stored) = on_disk {
            self.best = self.best.max(stored);
        }

        let improved = score > self.best;
        if improved {
            self.best = score;
        }

        let stored = on_disk.unwrap_or(self.persisted);
        if self.best > stored && self.best > self.persisted {
            if let Some(path) = &self.path {
                if let Err(err) = write_record(path, self.best) {
                    warn!(path = %path.display(), error = %err, "failed to persist high score");
                }
            }
            // A failed write is not retried.
            self.persisted = self.best;
        }

        improved
    }
}

fn read_record(path: &Path) -> Result<u32, HighScoreError> {
    let bytes = fs::read(path)?;
    let record: [u8; RECORD_LEN] = bytes
        .get(..RECORD_LEN)
        .and_then(|head| head.try_into().ok())
        .ok_or(HighScoreError::Truncated {
            len: bytes.len(),
            expected: RECORD_LEN,
        })?;
    Ok(i32::from_ne_bytes(record).max(0) as u32)
}

fn write_record(path: &Path, value: u32) -> Result<(), HighScoreError> {
    let value = i32::try_from(value).unwrap_or(i32::MAX);
    fs::write(path, value.to_ne_bytes())?;
    Ok(())
}
