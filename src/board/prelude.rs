//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use connect_four_engine::board::prelude::*;
//!
//! let mut searcher = Searcher::new(SearchParams::with_max_ply(2)).unwrap();
//! assert!(searcher.choose_move(&Board::new(), Piece::A).is_ok());
//! ```

pub use super::{
    choose_move, Board, BoardBuilder, BoardError, NotationError, Piece, Position, SearchError,
    SearchParams, Searcher,
};
