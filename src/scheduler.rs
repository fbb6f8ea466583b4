//! Fixed-interval tick driver
//!
//! Feeds wall-clock time into an accumulator and runs whole ticks out of it.
//! Pending time is dropped whenever the round is not running, so a stopped
//! or finished round never receives a stale tick.

use std::time::Duration;

use crate::consts::MAX_SUBSTEPS;
use crate::highscores::ScoreStore;
use crate::settings::Settings;
use crate::sim::{GameOver, SimulationEngine, TickResult};

#[derive(Debug, Clone)]
pub struct Scheduler {
    interval: Duration,
    accumulator: Duration,
}

impl Scheduler {
    /// Panics on a zero interval.
    pub fn new(interval: Duration) -> Self {
        assert!(!interval.is_zero(), "tick interval must be non-zero");
        Self {
            interval,
            accumulator: Duration::ZERO,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.tick_interval())
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time banked toward the next tick
    pub fn pending(&self) -> Duration {
        self.accumulator
    }

    /// Drop any banked time
    pub fn cancel(&mut self) {
        self.accumulator = Duration::ZERO;
    }

    /// Run every tick that `elapsed` has paid for, up to `MAX_SUBSTEPS`.
    ///
    /// Returns the game over if the round ended during this update.
    pub fn update<S: ScoreStore>(
        &mut self,
        engine: &mut SimulationEngine<S>,
        elapsed: Duration,
    ) -> Option<GameOver> {
        self.update_with(engine, elapsed, |_| {})
    }

    /// Like `update`, but calls `before_tick` ahead of every tick so a
    /// controller can steer between substeps.
    pub fn update_with<S: ScoreStore>(
        &mut self,
        engine: &mut SimulationEngine<S>,
        elapsed: Duration,
        mut before_tick: impl FnMut(&mut SimulationEngine<S>),
    ) -> Option<GameOver> {
        if !engine.is_running() {
            self.cancel();
            return None;
        }

        // Clamp long stalls so we never owe more than one update's worth
        self.accumulator += elapsed.min(self.interval * MAX_SUBSTEPS);

        let mut substeps = 0;
        while self.accumulator >= self.interval && substeps < MAX_SUBSTEPS {
            self.accumulator -= self.interval;
            substeps += 1;

            before_tick(engine);
            match engine.advance_tick() {
                TickResult::Continuing => {}
                TickResult::GameOver(over) => {
                    self.cancel();
                    return Some(over);
                }
                TickResult::Idle => {
                    self.cancel();
                    break;
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::MemoryScoreStore;
    use crate::sim::{Direction, Position, RoundState, Snake, SnakeId};

    fn engine() -> SimulationEngine<MemoryScoreStore> {
        let settings = Settings {
            seed: Some(8),
            ..Settings::default()
        };
        let mut engine = SimulationEngine::new(&settings, MemoryScoreStore::default());
        engine.restore(RoundState {
            snake1: Snake::new(Position::new(3, 5)),
            food: Position::new(0, 0),
            ..RoundState::default()
        });
        engine
    }

    #[test]
    fn test_no_ticks_while_stopped() {
        let mut engine = engine();
        let mut scheduler = Scheduler::new(Duration::from_millis(100));

        assert_eq!(scheduler.update(&mut engine, Duration::from_millis(250)), None);
        assert_eq!(scheduler.pending(), Duration::ZERO);
        assert_eq!(engine.round().ticks, 0);
    }

    #[test]
    fn test_ticks_per_interval() {
        let mut engine = engine();
        engine.start();
        let mut scheduler = Scheduler::new(Duration::from_millis(100));

        scheduler.update(&mut engine, Duration::from_millis(50));
        assert_eq!(engine.round().ticks, 0);

        scheduler.update(&mut engine, Duration::from_millis(60));
        assert_eq!(engine.round().ticks, 1);
        assert_eq!(scheduler.pending(), Duration::from_millis(10));

        scheduler.update(&mut engine, Duration::from_millis(200));
        assert_eq!(engine.round().ticks, 3);
        assert_eq!(engine.round().snake1.head(), Position::new(6, 5));
    }

    #[test]
    fn test_long_stall_is_clamped() {
        let mut engine = engine();
        engine.start();
        let mut scheduler = Scheduler::new(Duration::from_millis(100));

        scheduler.update(&mut engine, Duration::from_secs(10));
        assert_eq!(engine.round().ticks, u64::from(MAX_SUBSTEPS));
        assert_eq!(scheduler.pending(), Duration::ZERO);
    }

    #[test]
    fn test_hook_runs_before_every_substep() {
        let mut engine = engine();
        engine.start();
        let mut scheduler = Scheduler::new(Duration::from_millis(100));

        let mut calls = 0;
        scheduler.update_with(&mut engine, Duration::from_millis(350), |engine| {
            calls += 1;
            let turn = if calls % 2 == 1 {
                Direction::South
            } else {
                Direction::East
            };
            engine.set_direction(SnakeId::One, turn);
        });

        // South, East, South from (3,5)
        assert_eq!(calls, 3);
        assert_eq!(engine.round().ticks, 3);
        assert_eq!(engine.round().snake1.head(), Position::new(4, 7));
    }

    #[test]
    fn test_game_over_cancels_pending() {
        let mut engine = engine();
        engine.restore(RoundState {
            snake1: Snake::from_cells([
                Position::new(2, 1),
                Position::new(1, 1),
                Position::new(1, 0),
                Position::new(2, 0),
            ]),
            direction1: Direction::North,
            food: Position::new(9, 9),
            ..RoundState::default()
        });
        engine.start();
        let mut scheduler = Scheduler::new(Duration::from_millis(100));

        let over = scheduler.update(&mut engine, Duration::from_millis(350));
        assert!(over.is_some());
        assert!(!engine.is_running());
        assert_eq!(scheduler.pending(), Duration::ZERO);
    }
}
