//! High score persistence
//!
//! The engine only sees the `ScoreStore` trait. Stores swallow their own
//! failures: a bad load reads as 0, a bad save is logged and dropped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where the engine reads and writes the best combined score
pub trait ScoreStore {
    /// Stored high score, 0 if there is none or it cannot be read
    fn load_high_score(&self) -> u32;

    /// Persist a new high score (best effort)
    fn save_high_score(&mut self, score: u32);
}

/// On-disk shape of the score file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreRecord {
    #[serde(default)]
    pub high_score: u32,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    /// True when the file simply does not exist yet
    pub fn is_missing(&self) -> bool {
        matches!(self, StoreError::Io(e) if e.kind() == io::ErrorKind::NotFound)
    }
}

/// JSON file holding a single `high_score` field
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    /// Default file name, relative to the working directory
    pub const DEFAULT_FILE: &'static str = "snake_scores.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn try_load(&self) -> Result<ScoreRecord, StoreError> {
        let json = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn try_save(&self, record: &ScoreRecord) -> Result<(), StoreError> {
        let json = serde_json::to_string(record)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl Default for JsonScoreStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FILE)
    }
}

impl ScoreStore for JsonScoreStore {
    fn load_high_score(&self) -> u32 {
        match self.try_load() {
            Ok(record) => {
                log::info!(
                    "Loaded high score {} from {}",
                    record.high_score,
                    self.path.display()
                );
                record.high_score
            }
            Err(e) if e.is_missing() => {
                log::info!("No high score file, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("Ignoring unreadable {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn save_high_score(&mut self, score: u32) {
        match self.try_save(&ScoreRecord { high_score: score }) {
            Ok(()) => log::info!("High score {} saved", score),
            Err(e) => log::warn!("Failed to save high score to {}: {}", self.path.display(), e),
        }
    }
}

/// In-memory store that remembers every save, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    high_score: u32,
    saves: Vec<u32>,
}

impl MemoryScoreStore {
    pub fn with_high_score(high_score: u32) -> Self {
        Self {
            high_score,
            saves: Vec::new(),
        }
    }

    /// Every score passed to `save_high_score`, oldest first
    pub fn saves(&self) -> &[u32] {
        &self.saves
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load_high_score(&self) -> u32 {
        self.high_score
    }

    fn save_high_score(&mut self, score: u32) {
        self.high_score = score;
        self.saves.push(score);
    }
}
