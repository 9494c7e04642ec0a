mod query;
mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "parlwatch-cli")]
#[command(about = "Parliament mention and sentiment monitor")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Collect mentions, compute rollups, alerts and trends, and write the documents
    Run {
        /// Directory to write documents to (overrides PARLWATCH_DATA_DIR)
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Synthetic records per outlet (overrides PARLWATCH_POSTS_PER_OUTLET)
        #[arg(long)]
        posts_per_outlet: Option<usize>,

        /// Fixed RNG seed for a reproducible run (overrides PARLWATCH_SEED)
        #[arg(long)]
        seed: Option<u64>,

        /// Compute everything and print the summary without writing documents
        #[arg(long)]
        dry_run: bool,
    },
    /// Show entity rollups from the last run
    Status {
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
    /// Print a markdown report of the last run's alerts and trend
    Report {
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let config = parlwatch_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Run {
            data_dir,
            posts_per_outlet,
            seed,
            dry_run,
        }) => {
            let options = run::RunOptions {
                data_dir,
                posts_per_outlet,
                seed,
                dry_run,
            };
            run::run_monitor(&config, options)?;
        }
        Some(Commands::Status { data_dir }) => {
            query::run_status(&run::resolve_data_dir(data_dir, &config))?;
        }
        Some(Commands::Report { data_dir }) => {
            query::run_report(&run::resolve_data_dir(data_dir, &config))?;
        }
        None => println!("no command given; try `parlwatch-cli run`"),
    }

    Ok(())
}
