//! Fixed timestep simulation tick
//!
//! Core game step: move every active snake one cell, resolve crashes, feed.

use super::collision::{crashes, next_head};
use super::engine::SimulationEngine;
use super::state::{GameMode, SnakeId};
use crate::highscores::ScoreStore;

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    P1Crashed,
    P2Crashed,
    /// Both candidate heads crashed on the same tick (draw)
    BothCrashed,
}

impl CrashCause {
    fn from_flags(p1_crashed: bool, p2_crashed: bool) -> Option<Self> {
        match (p1_crashed, p2_crashed) {
            (true, true) => Some(CrashCause::BothCrashed),
            (true, false) => Some(CrashCause::P1Crashed),
            (false, true) => Some(CrashCause::P2Crashed),
            (false, false) => None,
        }
    }

    /// Surviving player, if exactly one crashed
    pub fn winner(&self) -> Option<SnakeId> {
        match self {
            CrashCause::P1Crashed => Some(SnakeId::Two),
            CrashCause::P2Crashed => Some(SnakeId::One),
            CrashCause::BothCrashed => None,
        }
    }
}

/// End-of-round report with the scores as they stood at the crash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    pub cause: CrashCause,
    pub score1: u32,
    pub score2: u32,
}

impl GameOver {
    /// Player-facing end-of-round text
    pub fn message(&self, mode: GameMode) -> String {
        if !mode.is_two_player() {
            return format!("Game Over! Your score: {}", self.score1);
        }
        let headline = match self.cause {
            CrashCause::BothCrashed => "It's a Draw! Both players crashed at the same time.",
            CrashCause::P1Crashed => "Player 1 crashed! Player 2 Wins!",
            CrashCause::P2Crashed => "Player 2 crashed! Player 1 Wins!",
        };
        format!(
            "{}\nP1 Score: {}, P2 Score: {}",
            headline, self.score1, self.score2
        )
    }
}

/// Outcome of one `advance_tick` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// Round not running; nothing moved
    Idle,
    Continuing,
    GameOver(GameOver),
}

impl<S: ScoreStore> SimulationEngine<S> {
    /// Advance the round by one step.
    ///
    /// Both candidate heads are tested against the bodies as they were before
    /// the tick, so processing order never decides a crash.
    pub fn advance_tick(&mut self) -> TickResult {
        if !self.round.running {
            return TickResult::Idle;
        }

        let two_player = self.mode.is_two_player();
        let round = &self.round;

        let head1 = next_head(round.snake1.head(), round.direction1, self.board_size);
        let p1_crashed = crashes(head1, &round.snake1, two_player.then_some(&round.snake2));

        let head2 = two_player
            .then(|| next_head(round.snake2.head(), round.direction2, self.board_size));
        let p2_crashed = head2.is_some_and(|head| crashes(head, &round.snake2, Some(&round.snake1)));

        if let Some(cause) = CrashCause::from_flags(p1_crashed, p2_crashed) {
            self.round.running = false;
            let over = GameOver {
                cause,
                score1: self.round.score1,
                score2: self.round.score2,
            };
            log::info!(
                "Round over after {} ticks: {:?} (P1 {}, P2 {})",
                self.round.ticks,
                cause,
                over.score1,
                over.score2
            );
            return TickResult::GameOver(over);
        }

        let food = self.round.food;
        let ate1 = head1 == food;
        self.round.snake1.advance(head1, ate1);
        if ate1 {
            self.round.score1 += self.food_score;
        }

        let mut ate2 = false;
        if let Some(head2) = head2 {
            ate2 = head2 == food;
            self.round.snake2.advance(head2, ate2);
            if ate2 {
                self.round.score2 += self.food_score;
            }
        }

        if ate1 || ate2 {
            self.round.food = self.place_food();
            log::debug!(
                "Food eaten at ({}, {}), respawned at ({}, {})",
                food.x,
                food.y,
                self.round.food.x,
                self.round.food.y
            );
        }

        self.round.ticks += 1;
        TickResult::Continuing
    }
}
