use super::{Trial, TrialStats};
use crate::error::HsResult;
use tracing::{debug, trace};

/// Outcome of one improvement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved,
    Stalled,
}

/// Logistic acceptance: 0.5 at `delta == 0`, towards 1 for improvements.
/// A NaN delta (infinite greed on a tie) is never accepted.
#[inline(always)]
pub fn acceptance_probability(delta: f64) -> f64 {
    1.0 / (1.0 + (-delta).exp())
}

impl Trial {
    /// Proposes up to `effort` mutations of the current arrangement and
    /// commits the first one that passes the acceptance test.
    pub fn improve(&mut self) -> HsResult<Step> {
        let old_score = self.scorer.score(&self.current);
        if self.current.len() < 2 {
            self.track_best(old_score);
            return Ok(Step::Stalled);
        }

        for _ in 0..self.params.effort {
            let candidate = self
                .current
                .mutate(self.params.change_size, &mut self.rng)?;
            let new_score = self.scorer.score(&candidate);
            let delta = self.params.greedy * (new_score - old_score);

            if self.rng.f64() < acceptance_probability(delta) {
                self.current = candidate;
                if self.track_best(new_score) {
                    trace!("new best {:.4}", new_score);
                }
                self.stats.moves += 1;
                return Ok(Step::Moved);
            }
        }

        self.track_best(old_score);
        self.stats.stalls += 1;
        Ok(Step::Stalled)
    }

    /// Runs `max_iter` iterations of shuffle / return-to-best / improve and
    /// leaves both `current` and `best` holding the best arrangement seen.
    pub fn optimize(&mut self, max_iter: usize) -> HsResult<TrialStats> {
        let start = self.current_score();
        self.track_best(start);

        let p_shuffle = self.params.p_shuffle;
        let p_return = p_shuffle + self.params.p_return_to_best;

        for _ in 0..max_iter {
            let r = self.rng.f64();
            if r < p_shuffle {
                self.shuffle();
                self.stats.shuffles += 1;
            } else if r < p_return {
                self.current = self.best.clone();
                self.stats.returns += 1;
            } else {
                self.improve()?;
            }
            self.stats.iterations += 1;
        }

        // current and best hold separate index buffers from here on
        self.current = self.best.clone();

        debug!(
            "trial done: k={} greedy={} window={} | start {:.3} -> best {:.3} | {} moves, {} stalls",
            self.params.change_size,
            self.params.greedy,
            self.scorer.window,
            start,
            self.best_score,
            self.stats.moves,
            self.stats.stalls
        );
        Ok(self.stats)
    }
}
