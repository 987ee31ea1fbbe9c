//! Zobrist hashing for board positions.
//!
//! Provides incrementally-updatable 64-bit keys. The key depends only on
//! which piece sits on which cell, so boards with identical contents hash
//! identically whatever move order produced them.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Piece, Position, CELLS};

pub(crate) struct ZobristKeys {
    // cell_keys[piece][row * COLS + column]
    pub(crate) cell_keys: [[u64; CELLS]; 2],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64);
        let mut cell_keys = [[0; CELLS]; 2];

        for piece in &mut cell_keys {
            for key in piece.iter_mut() {
                *key = rng.gen();
            }
        }

        ZobristKeys { cell_keys }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

#[inline]
pub(crate) fn cell_key(piece: Piece, pos: Position) -> u64 {
    ZOBRIST.cell_keys[piece.index()][pos.as_index()]
}
