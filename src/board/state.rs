use std::hash::{Hash, Hasher};

use crate::zobrist::cell_key;

use super::error::BoardError;
use super::{Bitboard, MoveList, Piece, Position, COLS, CONNECT, ROWS};

/// A vertical-drop board.
///
/// Equality covers the cell contents only; the column heights and the
/// Zobrist key are derived from them.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) pieces: [Bitboard; 2],
    pub(crate) heights: [u8; COLS],
    pub(crate) hash: u64, // Zobrist key
}

impl Board {
    /// Create an empty board
    #[must_use]
    pub fn new() -> Self {
        Board {
            pieces: [Bitboard::EMPTY; 2],
            heights: [0; COLS],
            hash: 0,
        }
    }

    /// Piece on a cell, if any
    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        Piece::BOTH
            .into_iter()
            .find(|piece| self.pieces[piece.index()].contains(pos))
    }

    /// Cells held by one piece
    #[inline]
    #[must_use]
    pub fn pieces(&self, piece: Piece) -> Bitboard {
        self.pieces[piece.index()]
    }

    /// All occupied cells
    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.pieces[0].or(self.pieces[1])
    }

    /// Number of pieces in a column
    #[inline]
    #[must_use]
    pub fn height(&self, column: usize) -> usize {
        self.heights[column] as usize
    }

    #[inline]
    #[must_use]
    pub fn is_column_full(&self, column: usize) -> bool {
        column >= COLS || self.height(column) >= ROWS
    }

    /// The cell a piece dropped into `column` would land on
    #[must_use]
    pub fn landing(&self, column: usize) -> Option<Position> {
        if self.is_column_full(column) {
            None
        } else {
            Some(Position(self.height(column), column))
        }
    }

    /// Legal drop targets, one per non-full column, left to right
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for column in 0..COLS {
            if let Some(pos) = self.landing(column) {
                moves.push(pos);
            }
        }
        moves
    }

    /// Returns true if `pos` is the lowest empty cell of its column
    #[must_use]
    pub fn is_playable(&self, pos: Position) -> bool {
        self.landing(pos.column()) == Some(pos)
    }

    /// Place a piece on a cell, enforcing gravity.
    pub fn place(&mut self, pos: Position, piece: Piece) -> Result<(), BoardError> {
        if pos.row() >= ROWS || pos.column() >= COLS {
            return Err(BoardError::CellOutOfRange {
                row: pos.row(),
                column: pos.column(),
            });
        }
        if self.piece_at(pos).is_some() {
            return Err(BoardError::CellOccupied { position: pos });
        }
        if !self.is_playable(pos) {
            return Err(BoardError::NotPlayable { position: pos });
        }
        self.make_move(pos, piece);
        Ok(())
    }

    /// Drop a piece into a column, returning the cell it landed on.
    pub fn drop_piece(&mut self, column: usize, piece: Piece) -> Result<Position, BoardError> {
        if column >= COLS {
            return Err(BoardError::ColumnOutOfRange { column });
        }
        let pos = self
            .landing(column)
            .ok_or(BoardError::ColumnFull { column })?;
        self.make_move(pos, piece);
        Ok(pos)
    }

    /// Place a piece on a cell already known to be playable.
    #[inline]
    pub(crate) fn make_move(&mut self, pos: Position, piece: Piece) {
        debug_assert!(self.is_playable(pos), "{pos} is not playable");
        let idx = piece.index();
        self.pieces[idx] = self.pieces[idx].with(pos);
        self.heights[pos.column()] += 1;
        self.hash ^= cell_key(piece, pos);
    }

    /// Returns true if `piece` has four in a line anywhere
    #[inline]
    #[must_use]
    pub fn has_won(&self, piece: Piece) -> bool {
        self.pieces[piece.index()].has_line(CONNECT)
    }

    #[must_use]
    pub fn winner(&self) -> Option<Piece> {
        Piece::BOTH.into_iter().find(|&piece| self.has_won(piece))
    }

    /// Returns true if every cell is occupied
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&h| h as usize >= ROWS)
    }

    /// Full board with no winner
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.is_full() || self.winner().is_some()
    }

    /// Number of pieces of one side on the board
    #[inline]
    #[must_use]
    pub fn count(&self, piece: Piece) -> u32 {
        self.pieces[piece.index()].popcount()
    }

    /// Side to move, inferred from piece counts (A moves first)
    #[must_use]
    pub fn side_to_move(&self) -> Piece {
        if self.count(Piece::A) > self.count(Piece::B) {
            Piece::B
        } else {
            Piece::A
        }
    }

    /// Zobrist key of the current contents
    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Recompute the Zobrist key from scratch
    pub(crate) fn calculate_hash(&self) -> u64 {
        let mut hash = 0;
        for row in 0..ROWS {
            for column in 0..COLS {
                let pos = Position(row, column);
                if let Some(piece) = self.piece_at(pos) {
                    hash ^= cell_key(piece, pos);
                }
            }
        }
        hash
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.pieces == other.pieces
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}
