#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::constants::DEFAULT_MAX_PLY;
use crate::board::error::ParamsError;
use crate::board::EvalWeights;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchParams {
    /// Horizon in plies
    pub max_ply: u32,
    pub weights: EvalWeights,
    /// Keep cached leaf scores between decisions
    pub persistent_cache: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            max_ply: DEFAULT_MAX_PLY,
            weights: EvalWeights::default(),
            persistent_cache: false,
        }
    }
}

impl SearchParams {
    #[must_use]
    pub fn with_max_ply(max_ply: u32) -> Self {
        SearchParams {
            max_ply,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.max_ply == 0 {
            return Err(ParamsError::ZeroPly);
        }
        self.weights.validate()
    }
}
