//! Cell coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PositionError;

use super::{COLS, COL_STRIDE, ROWS};

pub(crate) fn column_from_char(c: char) -> Option<usize> {
    let c = c.to_ascii_lowercase();
    if c.is_ascii_lowercase() {
        let column = c as usize - 'a' as usize;
        (column < COLS).then_some(column)
    } else {
        None
    }
}

pub(crate) fn column_to_char(column: usize) -> char {
    (column as u8 + b'a') as char
}

/// A cell on the board, represented as (row, column).
///
/// Row 0 is the bottom row, column 0 the leftmost column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position(pub usize, pub usize); // (row, column)

impl Position {
    /// Create a new position with bounds checking
    #[must_use]
    pub fn new(row: usize, column: usize) -> Option<Self> {
        if row < ROWS && column < COLS {
            Some(Position(row, column))
        } else {
            None
        }
    }

    /// Get the row (0 = bottom)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    /// Get the column (0 = leftmost)
    #[inline]
    #[must_use]
    pub const fn column(self) -> usize {
        self.1
    }

    /// Mirror the position across the central column
    #[inline]
    #[must_use]
    pub const fn mirror(self) -> Self {
        Position(self.0, COLS - 1 - self.1)
    }

    /// Row-major index (0..CELLS), bottom-left first
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * COLS + self.1
    }

    /// Bit index in the column-major bitboard layout
    #[inline]
    #[must_use]
    pub(crate) const fn bit_index(self) -> usize {
        self.1 * COL_STRIDE + self.0
    }

    /// Distance of the column from the central column
    #[inline]
    #[must_use]
    pub const fn center_distance(self) -> usize {
        self.1.abs_diff(COLS / 2)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_to_char(self.1), self.0 + 1)
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PositionError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let column = chars.next().and_then(column_from_char).ok_or_else(invalid)?;
        let row: usize = chars.as_str().parse().map_err(|_| invalid())?;
        if row == 0 {
            return Err(invalid());
        }
        Position::new(row - 1, column).ok_or_else(invalid)
    }
}
