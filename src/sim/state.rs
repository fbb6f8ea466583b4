//! Round state and core simulation types
//!
//! Everything a renderer needs to draw a round lives here.

use std::collections::VecDeque;

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A grid cell. Always kept in `[0, board_size)` on both axes.
pub type Position = IVec2;

/// Heading of a snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All headings, in tie-break order
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Unit step in screen coordinates (y grows downward)
    pub fn offset(self) -> IVec2 {
        match self {
            Direction::North => IVec2::NEG_Y,
            Direction::East => IVec2::X,
            Direction::South => IVec2::Y,
            Direction::West => IVec2::NEG_X,
        }
    }
}

/// Which player's snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SnakeId {
    One,
    Two,
}

impl SnakeId {
    pub fn other(self) -> Self {
        match self {
            SnakeId::One => SnakeId::Two,
            SnakeId::Two => SnakeId::One,
        }
    }
}

/// Single player drives snake one only; two player adds snake two
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameMode {
    #[default]
    SinglePlayer,
    TwoPlayer,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::SinglePlayer => "Single Player",
            GameMode::TwoPlayer => "Two Player",
        }
    }

    pub fn is_two_player(&self) -> bool {
        *self == GameMode::TwoPlayer
    }

    /// Snakes that take part in a round, snake one first
    pub fn active_snakes(&self) -> &'static [SnakeId] {
        match self {
            GameMode::SinglePlayer => &[SnakeId::One],
            GameMode::TwoPlayer => &[SnakeId::One, SnakeId::Two],
        }
    }
}

/// A snake body, head first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// A one-cell snake
    pub fn new(head: Position) -> Self {
        Self::from_cells([head])
    }

    /// Build a snake from cells listed head first
    pub fn from_cells(cells: impl IntoIterator<Item = Position>) -> Self {
        Self {
            body: cells.into_iter().collect(),
        }
    }

    /// Head cell.
    ///
    /// Panics if the snake is empty (snake two outside two player mode).
    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Cells from head to tail
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Whether `pos` is on the body behind the head
    pub fn trailing_contains(&self, pos: Position) -> bool {
        self.body.iter().skip(1).any(|&cell| cell == pos)
    }

    /// Move the head to `head`; the tail stays put when growing
    pub(crate) fn advance(&mut self, head: Position, grow: bool) {
        self.body.push_front(head);
        if !grow {
            self.body.pop_back();
        }
    }

    pub(crate) fn clear(&mut self) {
        self.body.clear();
    }
}

/// Per-round state: bodies, headings, scores and food
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub snake1: Snake,
    pub direction1: Direction,
    pub score1: u32,
    pub snake2: Snake,
    pub direction2: Direction,
    pub score2: u32,
    pub food: Position,
    pub running: bool,
    /// Ticks advanced since the last reset
    #[serde(default)]
    pub ticks: u64,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            snake1: Snake::default(),
            direction1: Direction::East,
            score1: 0,
            snake2: Snake::default(),
            direction2: Direction::West,
            score2: 0,
            food: Position::ZERO,
            running: false,
            ticks: 0,
        }
    }
}

impl RoundState {
    pub fn snake(&self, id: SnakeId) -> &Snake {
        match id {
            SnakeId::One => &self.snake1,
            SnakeId::Two => &self.snake2,
        }
    }

    pub fn direction(&self, id: SnakeId) -> Direction {
        match id {
            SnakeId::One => self.direction1,
            SnakeId::Two => self.direction2,
        }
    }

    pub fn score(&self, id: SnakeId) -> u32 {
        match id {
            SnakeId::One => self.score1,
            SnakeId::Two => self.score2,
        }
    }

    /// Sum of both players' scores, regardless of mode
    pub fn combined_score(&self) -> u32 {
        self.score1 + self.score2
    }

    pub(crate) fn set_direction(&mut self, id: SnakeId, direction: Direction) {
        match id {
            SnakeId::One => self.direction1 = direction,
            SnakeId::Two => self.direction2 = direction,
        }
    }
}

/// Read-only view handed to renderers after each tick or reset
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub round: &'a RoundState,
    pub mode: GameMode,
    pub board_size: i32,
    pub high_score: u32,
    pub last_score: u32,
}

impl Snapshot<'_> {
    /// Bodies of the snakes taking part in the round, snake one first
    pub fn active_snakes(&self) -> impl Iterator<Item = (SnakeId, &Snake)> + '_ {
        self.mode
            .active_snakes()
            .iter()
            .map(|&id| (id, self.round.snake(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::North.is_opposite(Direction::South));
        assert!(Direction::South.is_opposite(Direction::North));
        assert!(Direction::East.is_opposite(Direction::West));
        assert!(Direction::West.is_opposite(Direction::East));

        assert!(!Direction::North.is_opposite(Direction::East));
        assert!(!Direction::North.is_opposite(Direction::North));
    }

    #[test]
    fn test_direction_offsets() {
        assert_eq!(Direction::North.offset(), IVec2::new(0, -1));
        assert_eq!(Direction::South.offset(), IVec2::new(0, 1));
        assert_eq!(Direction::West.offset(), IVec2::new(-1, 0));
        assert_eq!(Direction::East.offset(), IVec2::new(1, 0));
    }

    #[test]
    fn test_snake_advance_and_grow() {
        let mut snake = Snake::new(IVec2::new(3, 5));
        snake.advance(IVec2::new(4, 5), false);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), IVec2::new(4, 5));

        snake.advance(IVec2::new(5, 5), true);
        assert_eq!(snake.len(), 2);
        assert_eq!(
            snake.cells().collect::<Vec<_>>(),
            vec![IVec2::new(5, 5), IVec2::new(4, 5)]
        );
    }

    #[test]
    fn test_trailing_contains_skips_head() {
        let snake = Snake::from_cells([IVec2::new(2, 2), IVec2::new(1, 2), IVec2::new(0, 2)]);
        assert!(!snake.trailing_contains(IVec2::new(2, 2)));
        assert!(snake.trailing_contains(IVec2::new(1, 2)));
        assert!(snake.trailing_contains(IVec2::new(0, 2)));
        assert!(snake.contains(IVec2::new(2, 2)));
    }

    #[test]
    fn test_active_snakes_by_mode() {
        assert_eq!(GameMode::SinglePlayer.active_snakes(), &[SnakeId::One]);
        assert_eq!(
            GameMode::TwoPlayer.active_snakes(),
            &[SnakeId::One, SnakeId::Two]
        );
    }
}
