//! Food placement

use rand::Rng;

use super::state::{Position, Snake};

/// Pick a uniformly random cell not covered by any of `occupied`.
///
/// Rejection sampling; does not terminate on a completely full board.
pub fn place_food<R: Rng>(rng: &mut R, board_size: i32, occupied: &[&Snake]) -> Position {
    loop {
        let x = rng.random_range(0..board_size);
        let y = rng.random_range(0..board_size);
        let pos = Position::new(x, y);

        if !occupied.iter().any(|snake| snake.contains(pos)) {
            return pos;
        }
    }
}
