//! Vertical-drop board representation and the move-choosing search.
//!
//! Uses column-major bitboards for win detection and an incrementally
//! maintained Zobrist key for transposition lookups.
//!
//! # Example
//! ```
//! use connect_four_engine::board::{choose_move, Board, Piece, Position};
//!
//! let board = Board::new();
//! let mv = choose_move(&board, Piece::A, 3).unwrap();
//! assert_eq!(mv.row(), 0);
//! ```

mod builder;
mod error;
mod eval;
mod lines;
mod notation;
pub mod prelude;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BoardError, NotationError, ParamsError, PositionError, SearchError};
pub use eval::EvalWeights;
pub use state::Board;
pub use types::{Bitboard, MoveList, MoveListIntoIter, Piece, Position, CELLS, COLS, CONNECT, ROWS};

// Public API - search functions and configuration
pub use search::{
    choose_move, format_score, is_decisive, loss_in, plies_to_result, search_with_params, win_in,
    LogLogger, SearchInfo, SearchLogger, SearchParams, SearchResult, SearchStats, Searcher,
    DEFAULT_MAX_PLY, MAX_SEARCH_PLY, SCORE_INFINITY, WIN_SCORE, WIN_THRESHOLD,
};

pub(crate) use types::{column_from_char, column_to_char};
