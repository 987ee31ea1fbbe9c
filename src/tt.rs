//! Transposition cache for horizon evaluations.
//!
//! Maps exact board contents to the heuristic score computed for them.
//! Boards are keyed by value, so a position reached through different move
//! orders shares one entry. Only leaf evaluations are stored; bounded
//! interior scores never enter the cache.
//!
//! The board's `Hash` impl feeds its Zobrist key, which is already well
//! mixed, so the map uses a pass-through hasher instead of SipHash.

use std::collections::HashMap;
use std::hash::{BuildHasherDefault, Hasher};

use crate::board::{Board, Piece};

/// Hasher that forwards a single `u64` unchanged.
#[derive(Default)]
pub struct ZobristHasher(u64);

impl Hasher for ZobristHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = self.0.rotate_left(8) ^ u64::from(b);
        }
    }

    fn write_u64(&mut self, n: u64) {
        self.0 ^= n;
    }
}

type BuildZobristHasher = BuildHasherDefault<ZobristHasher>;

/// Cache of leaf scores, valid for one evaluating piece.
#[derive(Debug, Default)]
pub struct TranspositionCache {
    entries: HashMap<Board, i32, BuildZobristHasher>,
    perspective: Option<Piece>,
}

impl TranspositionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Score stored for exactly this board, if any
    #[inline]
    #[must_use]
    pub fn probe(&self, board: &Board) -> Option<i32> {
        self.entries.get(board).copied()
    }

    /// Store a leaf score. An existing entry for the same board is replaced.
    pub fn store(&mut self, board: Board, score: i32) {
        self.entries.insert(board, score);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The piece the stored scores were computed for
    #[must_use]
    pub fn perspective(&self) -> Option<Piece> {
        self.perspective
    }

    /// Bind the cache to the piece being evaluated for.
    ///
    /// Scores are one-sided, so switching pieces drops every entry.
    /// Returns true if the cache was cleared.
    pub fn set_perspective(&mut self, piece: Piece) -> bool {
        let cleared = self.perspective.is_some_and(|p| p != piece) && !self.entries.is_empty();
        if self.perspective != Some(piece) {
            self.entries.clear();
            self.perspective = Some(piece);
        }
        cleared
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.perspective = None;
    }
}
