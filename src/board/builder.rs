//! Fluent builder for constructing positions.
//!
//! Allows creating positions drop by drop rather than parsing notation.
//!
//! # Example
//! ```
//! use connect_four_engine::board::{BoardBuilder, Piece, Position};
//!
//! let board = BoardBuilder::new()
//!     .drop(3, Piece::A)
//!     .drop(3, Piece::B)
//!     .cell(Position(0, 4), Piece::A)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.piece_at(Position(1, 3)), Some(Piece::B));
//! ```

use super::error::BoardError;
use super::{Board, Piece, Position};

#[derive(Clone, Debug)]
enum Placement {
    Drop(usize, Piece),
    Cell(Position, Piece),
}

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    placements: Vec<Placement>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop a piece into a column.
    #[must_use]
    pub fn drop(mut self, column: usize, piece: Piece) -> Self {
        self.placements.push(Placement::Drop(column, piece));
        self
    }

    /// Drop pieces into the given columns, alternating sides starting with
    /// `first`.
    #[must_use]
    pub fn drops(mut self, columns: &[usize], first: Piece) -> Self {
        let mut piece = first;
        for &column in columns {
            self.placements.push(Placement::Drop(column, piece));
            piece = piece.opponent();
        }
        self
    }

    /// Put a piece on an explicit cell.
    ///
    /// Cells are placed bottom row first at build time, so they may be
    /// listed in any order as long as every column ends up without gaps.
    #[must_use]
    pub fn cell(mut self, pos: Position, piece: Piece) -> Self {
        self.placements.push(Placement::Cell(pos, piece));
        self
    }

    /// Build the board.
    ///
    /// Drops are applied first, in the order given, then explicit cells from
    /// the bottom row up.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut board = Board::new();
        let mut cells = Vec::new();

        for placement in self.placements {
            match placement {
                Placement::Drop(column, piece) => {
                    board.drop_piece(column, piece)?;
                }
                Placement::Cell(pos, piece) => cells.push((pos, piece)),
            }
        }

        cells.sort_by_key(|(pos, _)| (pos.row(), pos.column()));
        for (pos, piece) in cells {
            board.place(pos, piece)?;
        }

        Ok(board)
    }
}
