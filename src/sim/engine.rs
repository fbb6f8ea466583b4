//! Simulation engine: owns one session's round, mode and scores
//!
//! There is no timer in here. A scheduler calls `advance_tick` (see `tick.rs`)
//! at a fixed period and input handlers call `set_direction` between ticks.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::wrap;
use super::food::place_food;
use super::state::{Direction, GameMode, Position, RoundState, Snake, SnakeId, Snapshot};
use crate::consts::{P1_START, P2_START_FROM_END};
use crate::highscores::ScoreStore;
use crate::settings::Settings;

/// The game for one session
pub struct SimulationEngine<S: ScoreStore> {
    pub(super) round: RoundState,
    pub(super) mode: GameMode,
    pub(super) board_size: i32,
    pub(super) food_score: u32,
    pub(super) rng: Pcg32,
    seed: u64,
    high_score: u32,
    last_score: u32,
    store: S,
}

impl<S: ScoreStore> SimulationEngine<S> {
    /// Create an engine and lay out the first round.
    ///
    /// Panics if `settings.board_size` is below 2: a one-cell board has no
    /// room for food beside snake one.
    pub fn new(settings: &Settings, store: S) -> Self {
        assert!(
            settings.board_size >= 2,
            "board size must be at least 2, got {}",
            settings.board_size
        );

        let seed = settings.seed.unwrap_or_else(rand::random);
        let high_score = store.load_high_score();
        log::info!(
            "Engine created: board={}x{}, seed={}, high score={}",
            settings.board_size,
            settings.board_size,
            seed,
            high_score
        );

        let mut engine = Self {
            round: RoundState::default(),
            mode: settings.mode,
            board_size: settings.board_size,
            food_score: settings.food_score,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            high_score,
            last_score: 0,
            store,
        };
        engine.reset(settings.mode);
        engine
    }

    /// Steer a snake. Takes effect on the next tick.
    ///
    /// Ignored while stopped, for snake two outside two player mode, and for
    /// a direct reversal of the stored heading.
    pub fn set_direction(&mut self, id: SnakeId, direction: Direction) {
        if !self.round.running {
            return;
        }
        if id == SnakeId::Two && !self.mode.is_two_player() {
            return;
        }
        if self.round.direction(id).is_opposite(direction) {
            return;
        }
        self.round.set_direction(id, direction);
    }

    /// Close the current round's scoring and lay out a fresh stopped round.
    pub fn reset(&mut self, mode: GameMode) {
        let combined = self.round.combined_score();
        self.last_score = combined;

        if combined > self.high_score {
            self.high_score = combined;
            log::info!("New high score: {}", combined);
            self.store.save_high_score(combined);
        }

        self.mode = mode;
        let mut round = RoundState {
            snake1: Snake::new(self.start_cell(SnakeId::One)),
            ..RoundState::default()
        };
        if mode.is_two_player() {
            round.snake2 = Snake::new(self.start_cell(SnakeId::Two));
        } else {
            round.snake2.clear();
        }
        self.round = round;
        self.round.food = self.place_food();
    }

    /// Begin ticking the current round (no-op if already running)
    pub fn start(&mut self) {
        if !self.round.running {
            self.round.running = true;
            log::info!("Round started ({})", self.mode.as_str());
        }
    }

    pub fn stop(&mut self) {
        if self.round.running {
            self.round.running = false;
            log::info!("Round stopped after {} ticks", self.round.ticks);
        }
    }

    /// Switch mode. Stops and resets the round when the mode changes.
    pub fn set_mode(&mut self, mode: GameMode) {
        if self.mode != mode {
            self.stop();
            self.reset(mode);
        }
    }

    /// Replace the round wholesale, e.g. to resume a saved round.
    ///
    /// Panics if any cell lies off the board or a required snake is empty.
    pub fn restore(&mut self, round: RoundState) {
        let on_board = |p: Position| wrap(p, self.board_size) == p;
        assert!(!round.snake1.is_empty(), "snake one must have a body");
        assert!(
            !self.mode.is_two_player() || !round.snake2.is_empty(),
            "snake two must have a body in two player mode"
        );
        assert!(
            round
                .snake1
                .cells()
                .chain(round.snake2.cells())
                .chain([round.food])
                .all(on_board),
            "round has cells off the board"
        );
        self.round = round;
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            round: &self.round,
            mode: self.mode,
            board_size: self.board_size,
            high_score: self.high_score,
            last_score: self.last_score,
        }
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.round.running
    }

    pub fn board_size(&self) -> i32 {
        self.board_size
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Combined score of the round most recently reset
    pub fn last_score(&self) -> u32 {
        self.last_score
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Spawn cell for a snake, wrapped onto the board
    fn start_cell(&self, id: SnakeId) -> Position {
        let cell = match id {
            SnakeId::One => Position::new(P1_START.0, P1_START.1),
            SnakeId::Two => Position::new(
                self.board_size - P2_START_FROM_END.0,
                self.board_size - P2_START_FROM_END.1,
            ),
        };
        wrap(cell, self.board_size)
    }

    /// New food cell avoiding every active snake
    pub(super) fn place_food(&mut self) -> Position {
        let occupied: Vec<&Snake> = self
            .mode
            .active_snakes()
            .iter()
            .map(|&id| self.round.snake(id))
            .collect();
        place_food(&mut self.rng, self.board_size, &occupied)
    }
}
