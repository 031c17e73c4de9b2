//! High score persistence
//!
//! The score is stored as a bare integer in a text file. A missing or
//! unreadable file counts as a high score of 0, and a failed save is logged
//! and otherwise ignored; neither ever interrupts a game.

use std::fs;
use std::io;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read high score from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("high score file {} does not hold a score", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseIntError,
    },
    #[error("failed to write high score to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where the high score lives between runs
pub trait HighScoreStore {
    /// Stored high score, 0 when nothing usable is stored
    fn load(&self) -> u32;

    fn save(&mut self, score: u32) -> Result<(), StoreError>;
}

/// Save `score`, logging instead of failing. Returns whether it was written.
pub fn save_or_warn(store: &mut dyn HighScoreStore, score: u32) -> bool {
    match store.save(score) {
        Ok(()) => {
            debug!(score, "saved high score");
            true
        }
        Err(err) => {
            warn!(error = %err, score, "could not save high score");
            false
        }
    }
}

/// Plain text file holding one integer
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Strict read: `Ok(None)` when the file does not exist
    pub fn read(&self) -> Result<Option<u32>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        text.trim()
            .parse()
            .map(Some)
            .map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> u32 {
        match self.read() {
            Ok(score) => score.unwrap_or(0),
            Err(err) => {
                warn!(error = %err, "ignoring stored high score");
                0
            }
        }
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(&self.path, score.to_string()).map_err(write_err)
    }
}

/// In-memory store for tests and for running without a data directory
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    score: u32,
    saves: u32,
}

impl MemoryHighScoreStore {
    pub fn new(score: u32) -> Self {
        Self { score, saves: 0 }
    }

    /// Number of successful saves
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> u32 {
        self.score
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        self.score = score;
        self.saves += 1;
        Ok(())
    }
}
