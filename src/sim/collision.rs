//! Movement and crash detection on the wrap-around grid
//!
//! Board edges connect to the opposite edge, so walls never kill a snake;
//! only bodies do.

use glam::IVec2;

use super::state::{Direction, Position, Snake};

/// Reduce a cell onto the board, wrapping both axes
#[inline]
pub fn wrap(pos: IVec2, board_size: i32) -> Position {
    pos.rem_euclid(IVec2::splat(board_size))
}

/// Cell a head moves to after one step in `direction`
#[inline]
pub fn next_head(head: Position, direction: Direction, board_size: i32) -> Position {
    wrap(head + direction.offset(), board_size)
}

/// Check a candidate head against the pre-tick bodies.
///
/// The own-body test skips the current head but keeps the tail, even when the
/// tail is about to be vacated. The opponent's whole body counts.
pub fn crashes(candidate: Position, own: &Snake, opponent: Option<&Snake>) -> bool {
    own.trailing_contains(candidate) || opponent.is_some_and(|other| other.contains(candidate))
}

/// Shortest distance between two cells on the torus, in steps
pub fn wrapped_distance(a: Position, b: Position, board_size: i32) -> i32 {
    let delta = wrap(a - b, board_size);
    delta.x.min(board_size - delta.x) + delta.y.min(board_size - delta.y)
}
