//! Bitboard type and operations.
//!
//! Cells are stored column-major with one spare bit on top of every column:
//! bit `column * COL_STRIDE + row`. The spare row is never set, which keeps
//! shifted lines from wrapping from one column into the next.

use super::position::Position;
use super::{COLS, COL_STRIDE, ROWS};

/// Shift amounts for the four line directions:
/// vertical, horizontal, diagonal `\` and diagonal `/`.
const DIRECTIONS: [usize; 4] = [1, COL_STRIDE, COL_STRIDE - 1, COL_STRIDE + 1];

const fn bottom_row() -> u64 {
    let mut bits = 0u64;
    let mut column = 0;
    while column < COLS {
        bits |= 1 << (column * COL_STRIDE);
        column += 1;
    }
    bits
}

/// A bitboard over the playable cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    /// One bit per column on row 0
    pub const BOTTOM_ROW: Bitboard = Bitboard(bottom_row());

    /// Every playable cell
    pub const FULL: Bitboard = Bitboard(bottom_row() * ((1 << ROWS) - 1));

    /// Create a bitboard with a single cell set
    #[inline]
    #[must_use]
    pub const fn from_position(pos: Position) -> Self {
        Bitboard(1 << pos.bit_index())
    }

    /// All cells of one column
    #[inline]
    #[must_use]
    pub const fn column_mask(column: usize) -> Self {
        Bitboard(((1 << ROWS) - 1) << (column * COL_STRIDE))
    }

    /// Returns true if the bitboard is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits
    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given cell is set
    #[inline]
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        (self.0 & (1 << pos.bit_index())) != 0
    }

    /// Returns a copy with the given cell set
    #[inline]
    #[must_use]
    pub const fn with(self, pos: Position) -> Self {
        Bitboard(self.0 | (1 << pos.bit_index()))
    }

    /// Bitwise OR
    #[inline]
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Bitboard(self.0 | other.0)
    }

    /// Bitwise AND
    #[inline]
    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        Bitboard(self.0 & other.0)
    }

    /// Returns true if `length` set cells line up in any direction
    #[must_use]
    pub fn has_line(self, length: usize) -> bool {
        if length == 0 {
            return true;
        }
        DIRECTIONS.iter().any(|&shift| {
            let mut m = self.0;
            for i in 1..length {
                m &= self.0 >> (i * shift);
            }
            m != 0
        })
    }
}
