use std::fmt;

use super::constants::plies_to_result;
use super::SearchResult;

/// Summary of one completed decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInfo {
    pub ply: u32,
    pub score: String,
    pub nodes: u64,
    pub leaf_evals: u64,
    pub cache_hits: u64,
    pub cutoffs: u64,
    pub cache_entries: usize,
    pub time_ms: u128,
    pub best_move: String,
}

/// Render a score as `win N`, `loss N` or `eval N`.
#[must_use]
pub fn format_score(score: i32) -> String {
    match plies_to_result(score) {
        Some(plies) if score > 0 => format!("win {plies}"),
        Some(plies) => format!("loss {plies}"),
        None => format!("eval {score}"),
    }
}

impl SearchInfo {
    #[must_use]
    pub fn new(ply: u32, result: &SearchResult, cache_entries: usize, time_ms: u128) -> Self {
        SearchInfo {
            ply,
            score: format_score(result.score),
            nodes: result.stats.nodes,
            leaf_evals: result.stats.leaf_evals,
            cache_hits: result.stats.cache_hits,
            cutoffs: result.stats.cutoffs,
            cache_entries,
            time_ms,
            best_move: result.best_move.to_string(),
        }
    }
}

/// Protocol `info` line
impl fmt::Display for SearchInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "info ply {} score {} nodes {} leaves {} cachehits {} cutoffs {} cache {} time {} move {}",
            self.ply,
            self.score,
            self.nodes,
            self.leaf_evals,
            self.cache_hits,
            self.cutoffs,
            self.cache_entries,
            self.time_ms,
            self.best_move
        )
    }
}

pub trait SearchLogger {
    fn info(&self, info: &SearchInfo);
}

/// Forwards search summaries to the `log` facade.
pub struct LogLogger;

impl SearchLogger for LogLogger {
    fn info(&self, info: &SearchInfo) {
        log::info!(
            "searched ply {}: {} -> {} ({} nodes, {} leaves, {} cache hits, {} cutoffs, {} ms)",
            info.ply,
            info.best_move,
            info.score,
            info.nodes,
            info.leaf_evals,
            info.cache_hits,
            info.cutoffs,
            info.time_ms
        );
    }
}
