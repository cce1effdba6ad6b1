use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use heatsort::config::Config;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with search and scoring parameters; explicit flags win
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reorder rows so similar rows end up adjacent
    Arrange(cmd::arrange::ArrangeArgs),
    /// Score the file's current row order without searching
    Score(cmd::score::ScoreArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .init();

    info!("🚀 Initializing heatsort...");

    let (cli_config, sub_matches) = match &cli.command {
        Commands::Arrange(args) => (&args.config, matches.subcommand_matches("arrange")),
        Commands::Score(args) => (&args.config, matches.subcommand_matches("score")),
    };

    let config = match &cli.config {
        Some(path) => {
            let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                error!("❌ {}", e);
                process::exit(1);
            });
            if let Some(sub) = sub_matches {
                file_config.merge_from_cli(cli_config, sub);
            }
            file_config
        }
        None => cli_config.clone(),
    };

    if let Err(e) = config.validate() {
        error!("❌ {}", e);
        process::exit(1);
    }

    let result = match &cli.command {
        Commands::Arrange(args) => cmd::arrange::run(args, config),
        Commands::Score(args) => cmd::score::run(args, config),
    };

    if let Err(e) = result {
        error!("\n❌ FATAL ERROR:");
        error!("   {}", e);
        process::exit(1);
    }
}
