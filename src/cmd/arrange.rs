use crate::reports;
use clap::Args;
use heatsort::config::Config;
use heatsort::error::HsResult;
use heatsort::heatmap::loader;
use heatsort::optimizer::{OptimizationOptions, Orchestrator};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ArrangeArgs {
    /// Heatmap to reorder
    pub input: PathBuf,

    /// Where to write the result (defaults to <INPUT>.better)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub config: Config,
}

pub fn run(args: &ArrangeArgs, config: Config) -> HsResult<()> {
    let heatmap = loader::load_heatmap(&args.input)?;
    let (header, rows) = heatmap.into_permutation();

    let start = Instant::now();
    let orchestrator = Orchestrator::from_shared(
        rows.backing().clone(),
        OptimizationOptions::from(&config),
    );
    let arrangement = orchestrator.run()?;
    info!("Search finished in {:.2?}", start.elapsed());

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| loader::default_output_path(&args.input));
    loader::save_heatmap(&output, &header, arrangement.rows.iter())?;

    reports::print_trial_report(&arrangement);
    reports::print_row_order(&arrangement.rows);
    println!("\n=== 🏆 FINAL RESULT ===");
    println!("Score: {:.4}", arrangement.score);
    println!("Output: {}", output.display());
    Ok(())
}
