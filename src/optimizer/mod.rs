pub mod anneal;
pub mod runner;

pub use self::anneal::Step;
pub use self::runner::{Arrangement, OptimizationOptions, Orchestrator, TrialOutcome};

use crate::error::{HeatsortError, HsResult};
use crate::heatmap::{Permutation, Row};
use crate::scorer::Scorer;

/// Hyperparameters of a single trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialParams {
    /// Positions rotated by one mutation.
    pub change_size: usize,
    /// Scales score deltas before the logistic acceptance test.
    pub greedy: f64,
    /// Mutation attempts per improvement step.
    pub effort: usize,
    pub p_shuffle: f64,
    pub p_return_to_best: f64,
}

impl Default for TrialParams {
    fn default() -> Self {
        Self {
            change_size: 2,
            greedy: 1.0,
            effort: 100,
            p_shuffle: 0.0,
            p_return_to_best: 0.005,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TrialStats {
    pub iterations: usize,
    pub moves: usize,
    pub stalls: usize,
    pub shuffles: usize,
    pub returns: usize,
}

/// One independent local search over a private arrangement of shared rows.
pub struct Trial {
    pub scorer: Scorer,
    pub params: TrialParams,
    pub current: Permutation<Row>,
    pub best: Permutation<Row>,
    pub best_score: f64,
    pub stats: TrialStats,
    pub rng: fastrand::Rng,
}

impl Trial {
    pub fn new(
        rows: Permutation<Row>,
        scorer: Scorer,
        params: TrialParams,
        seed: Option<u64>,
    ) -> HsResult<Self> {
        let n = rows.len();
        if n >= 2 && (params.change_size < 2 || params.change_size > n) {
            return Err(HeatsortError::Config(format!(
                "Mutation size {} is invalid for {} rows (must be within 2..={})",
                params.change_size, n, n
            )));
        }
        if params.effort == 0 {
            return Err(HeatsortError::Config(
                "Trial effort must be at least 1".to_string(),
            ));
        }

        let rng = if let Some(s) = seed {
            fastrand::Rng::with_seed(s)
        } else {
            fastrand::Rng::new()
        };

        Ok(Trial {
            scorer,
            params,
            best: rows.clone(),
            current: rows,
            best_score: f64::NEG_INFINITY,
            stats: TrialStats::default(),
            rng,
        })
    }

    /// Randomizes the whole current arrangement.
    pub fn shuffle(&mut self) {
        self.current.shuffle(&mut self.rng);
    }

    pub fn current_score(&self) -> f64 {
        self.scorer.score(&self.current)
    }

    /// Records the current arrangement as best-seen if `score` (its score)
    /// strictly beats the best so far. Ties never replace.
    fn track_best(&mut self, score: f64) -> bool {
        if score > self.best_score {
            self.best_score = score;
            self.best = self.current.clone();
            true
        } else {
            false
        }
    }
}
