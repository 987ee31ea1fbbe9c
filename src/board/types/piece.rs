//! Piece types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two sides of the game. `A` always moves first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    A,
    B,
}

impl Piece {
    /// Both pieces in index order (A=0, B=1)
    pub const BOTH: [Piece; 2] = [Piece::A, Piece::B];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Piece::A => 0,
            Piece::B => 1,
        }
    }

    /// Returns the other side
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Piece {
        match self {
            Piece::A => Piece::B,
            Piece::B => Piece::A,
        }
    }

    /// Notation character: `x` for A, `o` for B
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::A => 'x',
            Piece::B => 'o',
        }
    }

    /// Parse a piece from its notation character (case-insensitive)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'x' => Some(Piece::A),
            'o' => Some(Piece::B),
            _ => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
