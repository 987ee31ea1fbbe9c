pub mod board;
pub mod protocol;
pub mod tt;
mod zobrist;

pub use board::{choose_move, Board, Piece, Position, SearchError, Searcher};
pub use tt::TranspositionCache;
