//! Core board types.
//!
//! - `Piece` - the two sides
//! - `Position` - a (row, column) cell
//! - `Bitboard` - column-major cell set
//! - `MoveList` - ordered legal drop targets

mod bitboard;
mod moves;
mod piece;
mod position;

pub use bitboard::Bitboard;
pub use moves::{MoveList, MoveListIntoIter};
pub use piece::Piece;
pub use position::Position;

pub(crate) use position::{column_from_char, column_to_char};

/// Number of rows on the board
pub const ROWS: usize = 6;

/// Number of columns on the board
pub const COLS: usize = 7;

/// Total number of cells
pub const CELLS: usize = ROWS * COLS;

/// Pieces in a line needed to win
pub const CONNECT: usize = 4;

/// Bits per column in the bitboard layout (one spare bit on top)
pub(crate) const COL_STRIDE: usize = ROWS + 1;
