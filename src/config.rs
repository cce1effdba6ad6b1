use crate::error::{HeatsortError, HsResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    #[serde(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    #[serde(flatten)]
    pub weights: ScoringWeights,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchParams {
    /// Number of independent trials run in parallel
    #[arg(long, default_value_t = 8)]
    pub trials: usize,

    /// Iterations per trial = multiplier * rows * ln(rows)
    #[arg(long, default_value_t = 10.0)]
    pub iter_multiplier: f64,

    /// Mutation sizes, assigned to trials round-robin. Each must lie in
    /// 2..=rows, so inputs with fewer than 5 rows need smaller sizes
    #[arg(long, value_delimiter = ',', default_value = "2,3,4,5")]
    pub change_sizes: Vec<usize>,

    /// Neighbor window sizes, assigned to trials round-robin
    #[arg(long, value_delimiter = ',', default_value = "50")]
    pub windows: Vec<usize>,

    /// Greedy factors, assigned to trials round-robin (0 = random walk)
    #[arg(long, value_delimiter = ',', default_value = "1.0")]
    pub greedies: Vec<f64>,

    /// Mutation attempts per improvement step before giving up
    #[arg(long, default_value_t = 100)]
    pub effort: usize,

    /// Per-iteration probability of reshuffling the whole arrangement
    #[arg(long, default_value_t = 0.0)]
    pub p_shuffle: f64,

    /// Per-iteration probability of jumping back to the best arrangement
    #[arg(long, default_value_t = 0.005)]
    pub p_return_to_best: f64,

    /// Base seed; trial i uses seed + i * 3571
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Worker threads (defaults to the rayon global pool)
    #[arg(long)]
    pub threads: Option<usize>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            trials: 8,
            iter_multiplier: 10.0,
            change_sizes: vec![2, 3, 4, 5],
            windows: vec![50],
            greedies: vec![1.0],
            effort: 100,
            p_shuffle: 0.0,
            p_return_to_best: 0.005,
            seed: None,
            threads: None,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringWeights {
    /// Weight multiplier per step of neighbor distance
    #[arg(long, default_value_t = 0.95)]
    pub decay: f64,

    /// Reward for values matching the neighbor row's adjacent columns
    #[arg(long, default_value_t = 0.1)]
    pub diag_reward: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            decay: 0.95,
            diag_reward: crate::heatmap::row::DEFAULT_DIAG_REWARD,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> HsResult<Self> {
        let path = path.as_ref();
        info!("⚖️  Loading config from: {}", path.display());
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Copies every flag the user typed on the command line over `self`,
    /// leaving file-provided (or default) values for the rest.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        self.search.merge_from_cli(&cli.search, matches);
        self.weights.merge_from_cli(&cli.weights, matches);
    }

    pub fn validate(&self) -> HsResult<()> {
        self.search.validate()?;
        self.weights.validate()
    }
}

macro_rules! update_if_present {
    ($target:expr, $source:expr, $matches:expr, $field:ident) => {
        if $matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
            $target.$field = $source.$field.clone();
        }
    };
}

impl SearchParams {
    pub fn merge_from_cli(&mut self, cli: &SearchParams, matches: &ArgMatches) {
        update_if_present!(self, cli, matches, trials);
        update_if_present!(self, cli, matches, iter_multiplier);
        update_if_present!(self, cli, matches, change_sizes);
        update_if_present!(self, cli, matches, windows);
        update_if_present!(self, cli, matches, greedies);
        update_if_present!(self, cli, matches, effort);
        update_if_present!(self, cli, matches, p_shuffle);
        update_if_present!(self, cli, matches, p_return_to_best);
        update_if_present!(self, cli, matches, seed);
        update_if_present!(self, cli, matches, threads);
    }

    pub fn validate(&self) -> HsResult<()> {
        if self.trials == 0 {
            return Err(config_err("--trials must be at least 1"));
        }
        if !(self.iter_multiplier.is_finite() && self.iter_multiplier >= 0.0) {
            return Err(config_err("--iter-multiplier must be a non-negative number"));
        }
        if self.effort == 0 {
            return Err(config_err("--effort must be at least 1"));
        }
        if self.change_sizes.is_empty() {
            return Err(config_err("--change-sizes must list at least one size"));
        }
        if let Some(k) = self.change_sizes.iter().find(|&&k| k < 2) {
            return Err(config_err(&format!(
                "--change-sizes entries must be at least 2 (got {})",
                k
            )));
        }
        if self.windows.is_empty() {
            return Err(config_err("--windows must list at least one size"));
        }
        if let Some(w) = self.windows.iter().find(|&&w| w < 2) {
            return Err(config_err(&format!(
                "--windows entries must be at least 2 (got {})",
                w
            )));
        }
        if self.greedies.is_empty() {
            return Err(config_err("--greedies must list at least one factor"));
        }
        if let Some(g) = self.greedies.iter().find(|g| g.is_nan() || **g < 0.0) {
            return Err(config_err(&format!(
                "--greedies entries must be non-negative (got {})",
                g
            )));
        }
        for (name, p) in [
            ("--p-shuffle", self.p_shuffle),
            ("--p-return-to-best", self.p_return_to_best),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(config_err(&format!(
                    "{} must lie in [0, 1] (got {})",
                    name, p
                )));
            }
        }
        if self.p_shuffle + self.p_return_to_best > 1.0 {
            return Err(config_err(
                "--p-shuffle and --p-return-to-best must not sum above 1",
            ));
        }
        if self.threads == Some(0) {
            return Err(config_err("--threads must be at least 1"));
        }
        Ok(())
    }
}

impl ScoringWeights {
    pub fn merge_from_cli(&mut self, cli: &ScoringWeights, matches: &ArgMatches) {
        update_if_present!(self, cli, matches, decay);
        update_if_present!(self, cli, matches, diag_reward);
    }

    pub fn validate(&self) -> HsResult<()> {
        if !(self.decay > 0.0 && self.decay <= 1.0) {
            return Err(config_err(&format!(
                "--decay must lie in (0, 1] (got {})",
                self.decay
            )));
        }
        if !self.diag_reward.is_finite() {
            return Err(config_err("--diag-reward must be a finite number"));
        }
        Ok(())
    }
}

fn config_err(msg: &str) -> HeatsortError {
    HeatsortError::Config(msg.to_string())
}
