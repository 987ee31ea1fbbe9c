//! Text notation for boards.
//!
//! Six rows separated by `/`, top row first. Each row holds seven cells:
//! `.` for empty, `x` for piece A, `o` for piece B.
//!
//! ```
//! use connect_four_engine::board::{Board, Piece, Position};
//!
//! let board: Board = "......./......./......./......./......./...xo..".parse().unwrap();
//! assert_eq!(board.piece_at(Position(0, 3)), Some(Piece::A));
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::NotationError;
use super::{Board, Piece, Position, COLS, ROWS};

const EMPTY_CELL: char = '.';

impl Board {
    /// Parse a board from notation.
    ///
    /// Rejects pieces with an empty cell below them, and piece counts no
    /// game with A moving first can produce.
    pub fn try_from_notation(notation: &str) -> Result<Self, NotationError> {
        let rows: Vec<&str> = notation.trim().split('/').collect();
        if rows.len() != ROWS {
            return Err(NotationError::WrongRowCount { found: rows.len() });
        }

        let mut grid = [[None; COLS]; ROWS];
        for (text_row, row_str) in rows.iter().enumerate() {
            let row = ROWS - 1 - text_row;
            let found = row_str.chars().count();
            if found != COLS {
                return Err(NotationError::WrongRowLength { row, found });
            }
            for (column, c) in row_str.chars().enumerate() {
                grid[row][column] = match c {
                    EMPTY_CELL => None,
                    _ => Some(Piece::from_char(c).ok_or(NotationError::InvalidCell { char: c })?),
                };
            }
        }

        let mut board = Board::new();
        for column in 0..COLS {
            let mut gap = false;
            for (row, cells) in grid.iter().enumerate() {
                match cells[column] {
                    None => gap = true,
                    Some(_) if gap => {
                        return Err(NotationError::FloatingPiece {
                            position: Position(row, column),
                        })
                    }
                    Some(piece) => board.make_move(Position(row, column), piece),
                }
            }
        }

        let a = board.count(Piece::A);
        let b = board.count(Piece::B);
        if a != b && a != b + 1 {
            return Err(NotationError::BadPieceCounts { a, b });
        }

        debug_assert_eq!(board.hash(), board.calculate_hash());
        Ok(board)
    }

    #[must_use]
    pub fn to_notation(&self) -> String {
        let rows: Vec<String> = (0..ROWS)
            .rev()
            .map(|row| {
                (0..COLS)
                    .map(|column| {
                        self.piece_at(Position(row, column))
                            .map_or(EMPTY_CELL, Piece::to_char)
                    })
                    .collect()
            })
            .collect();
        rows.join("/")
    }
}

impl FromStr for Board {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_notation(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_notation())
    }
}
