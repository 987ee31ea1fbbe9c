//! Static evaluation for horizon nodes.
//!
//! The score is computed for one piece only: run bonuses over every scan
//! line plus a centre-weighted count of the piece's cells per column.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::ParamsError;
use super::lines::LINES;
use super::search::WIN_THRESHOLD;
use super::{Board, Piece, COLS, ROWS};

/// Tunable evaluation weights.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvalWeights {
    /// Bonus per maximal run of exactly two
    pub two: i32,
    /// Bonus per maximal run of exactly three
    pub three: i32,
    /// Bonus per maximal run of exactly four
    pub four: i32,
    /// Per-cell weight of each column
    pub columns: [i32; COLS],
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            two: 1,
            three: 2,
            four: 4,
            columns: [0, 1, 2, 3, 2, 1, 0],
        }
    }
}

impl EvalWeights {
    /// Bonus for a maximal run of `len` cells
    #[inline]
    #[must_use]
    pub fn run_weight(&self, len: usize) -> i32 {
        match len {
            2 => self.two,
            3 => self.three,
            4 => self.four,
            _ => 0,
        }
    }

    /// Largest absolute score the heuristic can produce with these weights.
    #[must_use]
    pub fn score_bound(&self) -> i64 {
        let run_max = [self.two, self.three, self.four]
            .iter()
            .map(|w| i64::from(w.unsigned_abs()))
            .max()
            .unwrap_or(0);
        // Runs of two or more need a separator, so a line of n cells holds
        // at most (n + 1) / 3 of them.
        let runs: i64 = LINES.iter().map(|l| ((l.len() + 1) / 3) as i64).sum();
        let column_sum: i64 = self
            .columns
            .iter()
            .map(|w| i64::from(w.unsigned_abs()))
            .sum();
        runs * run_max + ROWS as i64 * column_sum
    }

    /// Check monotonic run weights and a symmetric, centre-peaked column profile.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(self.two < self.three && self.three < self.four) {
            return Err(ParamsError::RunWeightsNotIncreasing {
                two: self.two,
                three: self.three,
                four: self.four,
            });
        }
        for column in 0..COLS {
            if self.columns[column] != self.columns[COLS - 1 - column] {
                return Err(ParamsError::ColumnWeightsNotSymmetric { column });
            }
        }
        // Walking outwards from the centre the weight must never rise
        for column in 1..=COLS / 2 {
            if self.columns[column - 1] > self.columns[column] {
                return Err(ParamsError::ColumnWeightsNotCentred { column: column - 1 });
            }
        }
        let bound = self.score_bound();
        if bound >= i64::from(WIN_THRESHOLD) {
            return Err(ParamsError::WeightsTooLarge { bound });
        }
        Ok(())
    }
}

impl Board {
    /// Heuristic score of the board from `piece`'s point of view.
    #[must_use]
    pub fn evaluate(&self, piece: Piece, weights: &EvalWeights) -> i32 {
        self.run_bonus(piece, weights) + self.positional_score(piece, weights)
    }

    /// Sum of run weights over every maximal run on every scan line.
    pub(crate) fn run_bonus(&self, piece: Piece, weights: &EvalWeights) -> i32 {
        let own = self.pieces(piece);
        let mut score = 0;
        for line in LINES.iter() {
            let mut run = 0;
            for &pos in line {
                if own.contains(pos) {
                    run += 1;
                } else {
                    score += weights.run_weight(run);
                    run = 0;
                }
            }
            score += weights.run_weight(run);
        }
        score
    }

    /// Column-weighted count of `piece`'s cells.
    pub(crate) fn positional_score(&self, piece: Piece, weights: &EvalWeights) -> i32 {
        let own = self.pieces(piece);
        (0..COLS)
            .map(|column| {
                let count = own.and(super::Bitboard::column_mask(column)).popcount() as i32;
                count * weights.columns[column]
            })
            .sum()
    }
}
