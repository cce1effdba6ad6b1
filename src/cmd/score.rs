use crate::reports;
use clap::Args;
use heatsort::config::Config;
use heatsort::error::HsResult;
use heatsort::heatmap::loader;
use heatsort::scorer::Scorer;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Heatmap to score in its current row order
    pub input: PathBuf,

    #[command(flatten)]
    pub config: Config,
}

pub fn run(args: &ScoreArgs, config: Config) -> HsResult<()> {
    let heatmap = loader::load_heatmap(&args.input)?;
    let (_, rows) = heatmap.into_permutation();

    let mut results = Vec::new();
    for &window in &config.search.windows {
        let scorer = Scorer::new(&config.weights, window)?;
        results.push(scorer.score_details(&rows));
    }

    reports::print_score_report(&results);
    Ok(())
}
