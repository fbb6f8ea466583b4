//! Game settings
//!
//! Read from a JSON file next to the score file. Missing fields fall back to
//! their defaults, a missing or unreadable file falls back entirely.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{BOARD_SIZE, FOOD_SCORE, TICK_INTERVAL_MS};
use crate::highscores::{JsonScoreStore, StoreError};
use crate::sim::GameMode;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Edge length of the square board, in cells
    pub board_size: i32,
    /// Period between ticks
    pub tick_interval_ms: u64,
    /// Points per food eaten
    pub food_score: u32,
    /// Food RNG seed; random per session when absent
    pub seed: Option<u64>,
    /// Mode of the first round
    pub mode: GameMode,
    /// High score file
    pub score_file: PathBuf,

    // === Headless demo ===
    /// Rounds played by the binary before exiting
    pub demo_rounds: u32,
    /// Ticks after which a demo round is cut short
    pub demo_max_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            tick_interval_ms: TICK_INTERVAL_MS,
            food_score: FOOD_SCORE,
            seed: None,
            mode: GameMode::SinglePlayer,
            score_file: PathBuf::from(JsonScoreStore::DEFAULT_FILE),

            demo_rounds: 3,
            demo_max_ticks: 2_000,
        }
    }
}

impl Settings {
    /// Default file name, relative to the working directory
    pub const DEFAULT_FILE: &'static str = "snake_settings.json";

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn try_load(path: &Path) -> Result<Self, StoreError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Load settings, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) if e.is_missing() => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring unreadable {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
