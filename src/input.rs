//! Keyboard routing
//!
//! Maps platform-neutral keys to engine commands. Arrow keys drive player 1,
//! WASD drives player 2 (two player mode only), space starts the round.

use crate::highscores::ScoreStore;
use crate::sim::{Direction, GameMode, SimulationEngine, SnakeId};

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Space,
}

/// What a key press asks the engine to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(SnakeId, Direction),
    Start,
}

#[derive(Debug, Default)]
pub struct InputRouter;

impl InputRouter {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a key under the current mode's bindings
    pub fn route(&self, key: Key, mode: GameMode) -> Option<Command> {
        let steer_two = |dir| mode.is_two_player().then_some(Command::Steer(SnakeId::Two, dir));

        match key {
            Key::Up => Some(Command::Steer(SnakeId::One, Direction::North)),
            Key::Down => Some(Command::Steer(SnakeId::One, Direction::South)),
            Key::Left => Some(Command::Steer(SnakeId::One, Direction::West)),
            Key::Right => Some(Command::Steer(SnakeId::One, Direction::East)),

            Key::W => steer_two(Direction::North),
            Key::S => steer_two(Direction::South),
            Key::A => steer_two(Direction::West),
            Key::D => steer_two(Direction::East),

            Key::Space => Some(Command::Start),
        }
    }

    /// Route a key and hand the command to the engine
    pub fn apply<S: ScoreStore>(&self, key: Key, engine: &mut SimulationEngine<S>) {
        match self.route(key, engine.mode()) {
            Some(Command::Steer(id, dir)) => engine.set_direction(id, dir),
            Some(Command::Start) => engine.start(),
            None => {}
        }
    }
}
