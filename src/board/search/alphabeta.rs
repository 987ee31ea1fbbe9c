//! Fixed-horizon minimax with alpha-beta pruning.
//!
//! The engine's piece is the maximizing side. Every child node receives its
//! own copy of the board, so nothing has to be undone after a recursive call
//! and pruned branches cannot leak placements into their siblings.
//!
//! Leaf evaluations are memoized by exact board contents. Interior values
//! may be alpha/beta bounds and are never cached.

use crate::board::{Board, EvalWeights, Piece, Position};
use crate::tt::TranspositionCache;

use super::constants::{loss_in, win_in, SCORE_INFINITY};
use super::SearchStats;

/// State for one top-level decision
pub(crate) struct AlphaBetaContext<'a> {
    /// The piece a move is being chosen for (maximizing side)
    pub engine_piece: Piece,
    pub max_ply: u32,
    pub weights: &'a EvalWeights,
    pub cache: &'a mut TranspositionCache,
    pub stats: SearchStats,
    /// Tentative choice at the root
    pub root_move: Option<Position>,
}

impl<'a> AlphaBetaContext<'a> {
    pub(crate) fn new(
        engine_piece: Piece,
        max_ply: u32,
        weights: &'a EvalWeights,
        cache: &'a mut TranspositionCache,
    ) -> Self {
        AlphaBetaContext {
            engine_piece,
            max_ply,
            weights,
            cache,
            stats: SearchStats::default(),
            root_move: None,
        }
    }

    /// Search from the root and return its backed-up score.
    pub(crate) fn search_root(&mut self, board: &Board) -> i32 {
        self.search(board, 0, -SCORE_INFINITY, SCORE_INFINITY, self.engine_piece)
    }

    /// Score a node reached after the opponent of `piece` moved.
    ///
    /// Terminal checks run before the horizon check, so a win or draw is
    /// reported exactly whatever ply budget remains.
    fn terminal_score(&self, board: &Board, ply: u32, piece: Piece) -> Option<i32> {
        let last_mover = piece.opponent();
        if board.has_won(last_mover) {
            return Some(if last_mover == self.engine_piece {
                win_in(ply)
            } else {
                loss_in(ply)
            });
        }
        if board.is_full() {
            return Some(0);
        }
        None
    }

    /// Leaf score at the horizon, served from the cache when possible.
    fn horizon_score(&mut self, board: &Board) -> i32 {
        if let Some(score) = self.cache.probe(board) {
            self.stats.cache_hits += 1;
            return score;
        }
        let score = board.evaluate(self.engine_piece, self.weights);
        self.stats.leaf_evals += 1;
        self.cache.store(board.clone(), score);
        score
    }

    pub(crate) fn search(
        &mut self,
        board: &Board,
        ply: u32,
        mut alpha: i32,
        mut beta: i32,
        piece: Piece,
    ) -> i32 {
        self.stats.nodes += 1;

        // The root is always expanded so that a move gets chosen
        if ply > 0 {
            if let Some(score) = self.terminal_score(board, ply, piece) {
                return score;
            }
            if ply >= self.max_ply {
                return self.horizon_score(board);
            }
        }

        let moves = board.legal_moves();
        if ply == 0 {
            self.root_move = moves.first();
        }

        let maximizing = piece == self.engine_piece;
        let mut best = if maximizing {
            -SCORE_INFINITY
        } else {
            SCORE_INFINITY
        };

        for mv in moves {
            let mut child = board.clone();
            child.make_move(mv, piece);

            let score = self.search(&child, ply + 1, alpha, beta, piece.opponent());

            if maximizing {
                if ply == 0 {
                    log::trace!("root move {mv} scored {score}");
                    if score > best {
                        self.root_move = Some(mv);
                    }
                }
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}
