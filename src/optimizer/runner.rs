use crate::config::{Config, ScoringWeights};
use crate::error::{HeatsortError, HsResult};
use crate::heatmap::{Permutation, Row};
use crate::optimizer::{Trial, TrialParams, TrialStats};
use crate::scorer::Scorer;
use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Spacing between the seeds of consecutive trials.
pub const SEED_STRIDE: u64 = 3571;

#[derive(Debug, Clone)]
pub struct OptimizationOptions {
    pub trials: usize,
    pub iter_multiplier: f64,
    pub change_sizes: Vec<usize>,
    pub windows: Vec<usize>,
    pub greedies: Vec<f64>,
    pub effort: usize,
    pub p_shuffle: f64,
    pub p_return_to_best: f64,
    pub seed: Option<u64>,
    pub threads: Option<usize>,
    pub weights: ScoringWeights,
}

impl From<&Config> for OptimizationOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            trials: cfg.search.trials,
            iter_multiplier: cfg.search.iter_multiplier,
            change_sizes: cfg.search.change_sizes.clone(),
            windows: cfg.search.windows.clone(),
            greedies: cfg.search.greedies.clone(),
            effort: cfg.search.effort,
            p_shuffle: cfg.search.p_shuffle,
            p_return_to_best: cfg.search.p_return_to_best,
            seed: cfg.search.seed,
            threads: cfg.search.threads,
            weights: cfg.weights.clone(),
        }
    }
}

impl Default for OptimizationOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// Iterations granted to each trial: `multiplier * n * ln(n)`, at least 1.
pub fn iteration_budget(iter_multiplier: f64, rows: usize) -> usize {
    if rows < 2 {
        return 0;
    }
    let k = rows as f64;
    ((iter_multiplier * k * k.ln()) as usize).max(1)
}

/// Configuration of one trial, derived from its position in the run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialSpec {
    pub id: usize,
    pub seed: Option<u64>,
    pub window: usize,
    pub params: TrialParams,
}

#[derive(Debug, Clone)]
pub struct TrialOutcome {
    pub spec: TrialSpec,
    pub best_score: f64,
    pub best: Permutation<Row>,
    pub stats: TrialStats,
}

/// Final answer of a run.
#[derive(Debug, Clone)]
pub struct Arrangement {
    pub rows: Permutation<Row>,
    pub score: f64,
    /// Index into `trials` of the winning trial; `None` when no search ran.
    pub winner: Option<usize>,
    pub max_iter: usize,
    pub trials: Vec<TrialOutcome>,
}

/// Runs independent trials in parallel over shared rows and keeps the best.
pub struct Orchestrator {
    rows: Arc<Vec<Row>>,
    options: OptimizationOptions,
}

impl Orchestrator {
    pub fn new(rows: Vec<Row>, options: OptimizationOptions) -> Self {
        Self::from_shared(Arc::new(rows), options)
    }

    pub fn from_shared(rows: Arc<Vec<Row>>, options: OptimizationOptions) -> Self {
        Self { rows, options }
    }

    pub fn options(&self) -> &OptimizationOptions {
        &self.options
    }

    /// Trial `i` cycles through the candidate lists at position `i`.
    pub fn trial_specs(&self) -> HsResult<Vec<TrialSpec>> {
        let opts = &self.options;
        if opts.trials == 0 {
            return Err(HeatsortError::Config(
                "At least one trial is required".to_string(),
            ));
        }
        for (name, empty) in [
            ("change sizes", opts.change_sizes.is_empty()),
            ("windows", opts.windows.is_empty()),
            ("greedy factors", opts.greedies.is_empty()),
        ] {
            if empty {
                return Err(HeatsortError::Config(format!(
                    "The list of {} must not be empty",
                    name
                )));
            }
        }

        Ok((0..opts.trials)
            .map(|i| TrialSpec {
                id: i,
                seed: opts.seed.map(|s| s.wrapping_add(i as u64 * SEED_STRIDE)),
                window: cycle(&opts.windows, i),
                params: TrialParams {
                    change_size: cycle(&opts.change_sizes, i),
                    greedy: cycle(&opts.greedies, i),
                    effort: opts.effort,
                    p_shuffle: opts.p_shuffle,
                    p_return_to_best: opts.p_return_to_best,
                },
            })
            .collect())
    }

    pub fn run(&self) -> HsResult<Arrangement> {
        let opts = &self.options;
        let n = self.rows.len();
        let identity = Permutation::from_shared(Arc::clone(&self.rows));
        let specs = self.trial_specs()?;

        if n < 2 {
            let scorer = Scorer::new(&opts.weights, specs[0].window)?;
            info!("Only {} row(s); nothing to arrange", n);
            return Ok(Arrangement {
                score: scorer.score(&identity),
                rows: identity,
                winner: None,
                max_iter: 0,
                trials: Vec::new(),
            });
        }

        // Fail fast on bad specs before any thread starts searching.
        let trials = specs
            .into_iter()
            .map(|spec| -> HsResult<(TrialSpec, Trial)> {
                let scorer = Scorer::new(&opts.weights, spec.window)?;
                let trial = Trial::new(identity.clone(), scorer, spec.params, spec.seed)?;
                Ok((spec, trial))
            })
            .collect::<HsResult<Vec<_>>>()?;

        let max_iter = iteration_budget(opts.iter_multiplier, n);
        info!(
            "🔥 Spawning {} trials x {} iterations over {} rows",
            trials.len(),
            max_iter,
            n
        );

        let start = Instant::now();
        let run_all = move || {
            trials
                .into_par_iter()
                .map(|(spec, trial)| run_trial(spec, trial, max_iter))
                .collect::<HsResult<Vec<_>>>()
        };
        let outcomes = match opts.threads {
            Some(threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?
                .install(run_all)?,
            None => run_all()?,
        };
        debug!("All trials joined after {:.2?}", start.elapsed());

        let mut winner = 0;
        for (i, outcome) in outcomes.iter().enumerate() {
            if outcome.best_score > outcomes[winner].best_score {
                winner = i;
            }
        }
        let chosen = &outcomes[winner];
        info!(
            "🏆 Trial #{} wins with score {:.4} (k={}, window={}, greedy={})",
            chosen.spec.id,
            chosen.best_score,
            chosen.spec.params.change_size,
            chosen.spec.window,
            chosen.spec.params.greedy
        );

        Ok(Arrangement {
            rows: chosen.best.clone(),
            score: chosen.best_score,
            winner: Some(winner),
            max_iter,
            trials: outcomes,
        })
    }
}

fn run_trial(spec: TrialSpec, mut trial: Trial, max_iter: usize) -> HsResult<TrialOutcome> {
    trial.shuffle();
    let stats = trial.optimize(max_iter)?;
    Ok(TrialOutcome {
        spec,
        best_score: trial.best_score,
        best: trial.best,
        stats,
    })
}

fn cycle<T: Copy>(items: &[T], i: usize) -> T {
    items[i % items.len()]
}
