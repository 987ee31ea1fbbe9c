//! Precomputed scan lines: every row, column and diagonal of the board.

use once_cell::sync::Lazy;

use super::{Position, COLS, ROWS};

/// Row/column steps for the four line orientations:
/// horizontal, vertical, diagonal `/` and diagonal `\`.
const DELTAS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

fn on_board(r: isize, c: isize) -> bool {
    r >= 0 && r < ROWS as isize && c >= 0 && c < COLS as isize
}

/// Every maximal line of at least two cells, walked in its step direction.
pub(crate) static LINES: Lazy<Vec<Vec<Position>>> = Lazy::new(|| {
    let mut lines = Vec::new();
    for (dr, dc) in DELTAS {
        for row in 0..ROWS {
            for column in 0..COLS {
                let (r, c) = (row as isize, column as isize);
                // Only start where the line cannot extend backwards
                if on_board(r - dr, c - dc) {
                    continue;
                }
                let mut line = Vec::new();
                let (mut nr, mut nc) = (r, c);
                while on_board(nr, nc) {
                    line.push(Position(nr as usize, nc as usize));
                    nr += dr;
                    nc += dc;
                }
                if line.len() >= 2 {
                    lines.push(line);
                }
            }
        }
    }
    lines
});
