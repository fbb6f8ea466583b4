//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Discrete ticks only, driven from outside
//! - Seeded RNG only
//! - Snake one is always processed first, but never gains an ordering advantage
//! - No rendering or platform dependencies

pub mod collision;
pub mod engine;
pub mod food;
pub mod state;
pub mod tick;

pub use collision::{crashes, next_head, wrap, wrapped_distance};
pub use engine::SimulationEngine;
pub use food::place_food;
pub use state::{Direction, GameMode, Position, RoundState, Snake, SnakeId, Snapshot};
pub use tick::{CrashCause, GameOver, TickResult};
