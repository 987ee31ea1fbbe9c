//! Search score constants.

use crate::board::CELLS;

/// Score of a win detected at the root; a win found `p` plies deep scores
/// `WIN_SCORE - p`, so faster wins rank higher.
pub const WIN_SCORE: i32 = 1_000_000;

/// Bound used for the root window and the initial running best value.
/// Strictly beyond every attainable score.
pub const SCORE_INFINITY: i32 = WIN_SCORE + 1;

/// No search line can be longer than the number of cells
pub const MAX_SEARCH_PLY: i32 = CELLS as i32;

/// Scores with absolute value >= this are decided games
pub const WIN_THRESHOLD: i32 = WIN_SCORE - MAX_SEARCH_PLY;

/// Default horizon
pub const DEFAULT_MAX_PLY: u32 = 7;

/// Score of a win for the engine detected `ply` plies below the root
#[inline]
#[must_use]
pub const fn win_in(ply: u32) -> i32 {
    WIN_SCORE - ply as i32
}

/// Score of a loss for the engine detected `ply` plies below the root
#[inline]
#[must_use]
pub const fn loss_in(ply: u32) -> i32 {
    -win_in(ply)
}

/// Returns true for sentinel win/loss scores
#[inline]
#[must_use]
pub const fn is_decisive(score: i32) -> bool {
    score >= WIN_THRESHOLD || score <= -WIN_THRESHOLD
}

/// Plies until the decided result, if the score is decisive
#[must_use]
pub const fn plies_to_result(score: i32) -> Option<u32> {
    if is_decisive(score) {
        Some((WIN_SCORE - score.abs()) as u32)
    } else {
        None
    }
}
