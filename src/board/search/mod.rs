//! Move selection by bounded minimax with alpha-beta pruning.
//!
//! Features:
//! - Fixed horizon search, every legal drop explored in column order
//! - Ply-discounted win/loss scores so quicker wins rank higher
//! - Leaf evaluations memoized by exact board contents
//! - Optional cache persistence between decisions

mod alphabeta;
mod constants;
mod log;
mod params;

use std::time::Instant;

use crate::tt::TranspositionCache;

use super::error::{ParamsError, SearchError};
use super::{Board, Piece, Position};

pub use constants::{
    is_decisive, loss_in, plies_to_result, win_in, DEFAULT_MAX_PLY, MAX_SEARCH_PLY,
    SCORE_INFINITY, WIN_SCORE, WIN_THRESHOLD,
};
pub use log::{format_score, LogLogger, SearchInfo, SearchLogger};
pub use params::SearchParams;

use alphabeta::AlphaBetaContext;

/// Counters collected during one decision
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root included
    pub nodes: u64,
    /// Heuristic evaluations actually computed
    pub leaf_evals: u64,
    /// Horizon nodes answered from the cache
    pub cache_hits: u64,
    /// Sibling enumerations abandoned because `beta <= alpha`
    pub cutoffs: u64,
}

/// Outcome of a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The cell to play
    pub best_move: Position,
    /// Backed-up root score, from the engine's point of view
    pub score: i32,
    pub stats: SearchStats,
}

/// Owns the search configuration and the transposition cache.
///
/// By default the cache only lives for one decision. With
/// `persistent_cache` it is kept until the evaluating piece changes or
/// [`Searcher::new_game`] is called.
pub struct Searcher {
    params: SearchParams,
    cache: TranspositionCache,
    logger: Option<Box<dyn SearchLogger>>,
}

impl Default for Searcher {
    fn default() -> Self {
        Searcher {
            params: SearchParams::default(),
            cache: TranspositionCache::new(),
            logger: None,
        }
    }
}

impl Searcher {
    /// Create a searcher after validating `params`.
    pub fn new(params: SearchParams) -> Result<Self, SearchError> {
        params.validate()?;
        Ok(Searcher {
            params,
            cache: TranspositionCache::new(),
            logger: None,
        })
    }

    /// Report every completed decision to `logger`.
    #[must_use]
    pub fn with_logger(mut self, logger: Box<dyn SearchLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn set_max_ply(&mut self, max_ply: u32) -> Result<(), SearchError> {
        let mut params = self.params.clone();
        params.max_ply = max_ply;
        params.validate()?;
        self.params = params;
        Ok(())
    }

    pub fn set_persistent_cache(&mut self, persistent: bool) {
        self.params.persistent_cache = persistent;
        if !persistent {
            self.cache.clear();
        }
    }

    /// Forget everything learned in the previous game.
    pub fn new_game(&mut self) {
        self.cache.clear();
    }

    #[must_use]
    pub fn cache(&self) -> &TranspositionCache {
        &self.cache
    }

    /// Choose a move for `piece` at the configured horizon.
    pub fn search(&mut self, board: &Board, piece: Piece) -> Result<SearchResult, SearchError> {
        self.search_with_ply(board, piece, self.params.max_ply)
    }

    /// Choose a move for `piece`, searching `max_ply` plies deep.
    pub fn search_with_ply(
        &mut self,
        board: &Board,
        piece: Piece,
        max_ply: u32,
    ) -> Result<SearchResult, SearchError> {
        if max_ply == 0 {
            return Err(ParamsError::ZeroPly.into());
        }
        if board.is_full() {
            return Err(SearchError::NoLegalMoves);
        }

        if self.params.persistent_cache {
            if self.cache.set_perspective(piece) {
                ::log::debug!("cache cleared: evaluating for {piece} now");
            }
        } else {
            self.cache.clear();
            self.cache.set_perspective(piece);
        }

        let start = Instant::now();
        let mut ctx = AlphaBetaContext::new(piece, max_ply, &self.params.weights, &mut self.cache);
        let score = ctx.search_root(board);
        let stats = ctx.stats;
        let best_move = ctx.root_move.ok_or(SearchError::NoLegalMoves)?;

        ::log::debug!(
            "{piece} to move, ply {max_ply}: {best_move} ({}), {} nodes, {} cache hits, {} cutoffs",
            format_score(score),
            stats.nodes,
            stats.cache_hits,
            stats.cutoffs
        );

        let result = SearchResult {
            best_move,
            score,
            stats,
        };
        if let Some(logger) = &self.logger {
            let elapsed = start.elapsed().as_millis();
            logger.info(&SearchInfo::new(max_ply, &result, self.cache.len(), elapsed));
        }

        Ok(result)
    }

    /// Cell to play for `piece` at the configured horizon
    pub fn choose_move(&mut self, board: &Board, piece: Piece) -> Result<Position, SearchError> {
        self.search(board, piece).map(|result| result.best_move)
    }
}

/// Choose a move for `piece` with default weights and a fresh cache.
///
/// # Errors
///
/// `SearchError::NoLegalMoves` on a full board, `SearchError::InvalidParams`
/// if `max_ply` is zero.
pub fn choose_move(board: &Board, piece: Piece, max_ply: u32) -> Result<Position, SearchError> {
    let mut searcher = Searcher::new(SearchParams::with_max_ply(max_ply))?;
    searcher.choose_move(board, piece)
}

/// One-shot search with explicit parameters.
pub fn search_with_params(
    board: &Board,
    piece: Piece,
    params: SearchParams,
) -> Result<SearchResult, SearchError> {
    Searcher::new(params)?.search(board, piece)
}
