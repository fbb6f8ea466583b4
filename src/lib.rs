//! Grid Snake - two-player wrap-around Snake
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, food, round state)
//! - `highscores`: High score persistence behind the `ScoreStore` seam
//! - `settings`: Data-driven game configuration
//! - `input`: Key bindings routed to engine commands
//! - `scheduler`: Fixed-interval tick driver
//! - `autopilot`: Demo controller used by the headless binary
//! - `render`: Plain-text board rendering

pub mod autopilot;
pub mod highscores;
pub mod input;
pub mod render;
pub mod scheduler;
pub mod settings;
pub mod sim;

pub use highscores::{JsonScoreStore, MemoryScoreStore, ScoreStore, StoreError};
pub use settings::Settings;
pub use sim::{
    CrashCause, Direction, GameMode, GameOver, Position, SimulationEngine, SnakeId, TickResult,
};

/// Game configuration constants
pub mod consts {
    /// Default board edge length in cells (the board is square)
    pub const BOARD_SIZE: i32 = 20;
    /// Default tick period in milliseconds
    pub const TICK_INTERVAL_MS: u64 = 100;
    /// Maximum ticks run by a single scheduler update
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Points awarded per food eaten
    pub const FOOD_SCORE: u32 = 10;

    /// Player 1 spawn cell
    pub const P1_START: (i32, i32) = (3, 5);
    /// Player 2 spawn cell, measured back from the far corner
    pub const P2_START_FROM_END: (i32, i32) = (4, 6);
}
