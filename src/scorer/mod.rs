pub mod engine;
pub mod types;

pub use self::types::ScoreDetails;
use crate::config::ScoringWeights;
use crate::error::{HeatsortError, HsResult};
use crate::heatmap::{Permutation, Row};

/// Turns an arrangement into a single objective, higher is better.
///
/// Each row is compared with the following `window - 1` rows; the pair at
/// distance `d` contributes `decay^(d-1)` times its disagreement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scorer {
    pub window: usize,
    pub decay: f64,
    pub diag_reward: f64,
}

impl Scorer {
    pub fn new(weights: &ScoringWeights, window: usize) -> HsResult<Self> {
        weights.validate()?;
        if window < 2 {
            return Err(HeatsortError::Config(format!(
                "Neighbor window must be at least 2 (got {})",
                window
            )));
        }
        Ok(Self {
            window,
            decay: weights.decay,
            diag_reward: weights.diag_reward,
        })
    }

    /// Same scorer with a different neighbor window.
    pub fn with_window(&self, window: usize) -> HsResult<Self> {
        let weights = ScoringWeights {
            decay: self.decay,
            diag_reward: self.diag_reward,
        };
        Self::new(&weights, window)
    }

    /// Objective for the search loop.
    #[inline(always)]
    pub fn score(&self, rows: &Permutation<Row>) -> f64 {
        engine::score_full(self, rows)
    }

    /// Objective plus the adjacency breakdown used by reports.
    pub fn score_details(&self, rows: &Permutation<Row>) -> ScoreDetails {
        engine::score_details(self, rows)
    }
}
