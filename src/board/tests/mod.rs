//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `state.rs` - Placement, gravity, win and draw detection
//! - `notation.rs` - Text notation parsing and printing
//! - `eval.rs` - Heuristic evaluation
//! - `search.rs` - Move selection scenarios
//! - `proptest.rs` - Property-based tests

mod proptest;
mod state;

use super::{Board, Piece};

/// Every cell filled and nobody connected
pub(crate) const DRAWN_GRID: &str = "xxoxxoo/ooxooxx/xxoxxoo/ooxooxx/xxoxxoo/ooxooxx";

pub(crate) fn grid(notation: &str) -> Board {
    Board::try_from_notation(notation).expect("valid notation")
}

/// Play the columns in order, alternating sides starting with A.
pub(crate) fn play(columns: &[usize]) -> Board {
    let mut board = Board::new();
    let mut piece = Piece::A;
    for &column in columns {
        board.drop_piece(column, piece).expect("column has room");
        piece = piece.opponent();
    }
    board
}

/// Reflect a board across its central column.
pub(crate) fn mirrored(board: &Board) -> Board {
    let notation: Vec<String> = board
        .to_notation()
        .split('/')
        .map(|row| row.chars().rev().collect())
        .collect();
    grid(&notation.join("/"))
}
