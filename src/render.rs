//! Plain-text board rendering for logs and the headless binary

use crate::sim::{Position, SnakeId, Snapshot};

/// Draw the board followed by a score line.
///
/// `.` empty, `*` food, `1`/`2` heads, `o`/`x` bodies of snake one/two.
pub fn board(snapshot: &Snapshot<'_>) -> String {
    let size = snapshot.board_size;
    let mut out = String::with_capacity(((size + 1) * size) as usize + 64);

    for y in 0..size {
        for x in 0..size {
            out.push(cell_glyph(snapshot, Position::new(x, y)));
        }
        out.push('\n');
    }

    out.push_str(&score_line(snapshot));
    out
}

/// `P1: a  P2: b  High: h  Last: l`, P2 only in two player mode
pub fn score_line(snapshot: &Snapshot<'_>) -> String {
    let round = snapshot.round;
    let mut line = format!("P1: {}", round.score1);
    if snapshot.mode.is_two_player() {
        line.push_str(&format!("  P2: {}", round.score2));
    }
    line.push_str(&format!(
        "  High: {}  Last: {}",
        snapshot.high_score, snapshot.last_score
    ));
    line
}

fn cell_glyph(snapshot: &Snapshot<'_>, pos: Position) -> char {
    for (id, snake) in snapshot.active_snakes() {
        if snake.is_empty() {
            continue;
        }
        if snake.head() == pos {
            return match id {
                SnakeId::One => '1',
                SnakeId::Two => '2',
            };
        }
        if snake.trailing_contains(pos) {
            return match id {
                SnakeId::One => 'o',
                SnakeId::Two => 'x',
            };
        }
    }
    if snapshot.round.food == pos { '*' } else { '.' }
}
