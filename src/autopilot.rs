//! Demo controller
//!
//! Plays in place of a human for the headless binary: greedy toward the food,
//! refusing any move that would crash on the next tick.

use crate::highscores::ScoreStore;
use crate::sim::{Direction, SimulationEngine, SnakeId, Snapshot, crashes, next_head, wrapped_distance};

#[derive(Debug, Default)]
pub struct Autopilot;

impl Autopilot {
    pub fn new() -> Self {
        Self
    }

    /// Pick a heading for one snake.
    ///
    /// Among the non-reversing headings that survive the next tick, the one
    /// closest to the food wins; ties go to the first in `Direction::ALL`.
    /// Keeps the current heading when every move crashes.
    pub fn choose(&self, snapshot: &Snapshot<'_>, id: SnakeId) -> Direction {
        let round = snapshot.round;
        let own = round.snake(id);
        let current = round.direction(id);
        let opponent = snapshot
            .mode
            .is_two_player()
            .then(|| round.snake(id.other()));

        Direction::ALL
            .into_iter()
            .filter(|dir| !current.is_opposite(*dir))
            .filter_map(|dir| {
                let head = next_head(own.head(), dir, snapshot.board_size);
                (!crashes(head, own, opponent))
                    .then(|| (wrapped_distance(head, round.food, snapshot.board_size), dir))
            })
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, dir)| dir)
            .unwrap_or(current)
    }

    /// Steer every active snake for the coming tick
    pub fn steer<S: ScoreStore>(&self, engine: &mut SimulationEngine<S>) {
        for &id in engine.mode().active_snakes() {
            let dir = self.choose(&engine.snapshot(), id);
            engine.set_direction(id, dir);
        }
    }
}
