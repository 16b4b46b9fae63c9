#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use paperscout_config::Config;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod command;
mod render;

#[derive(Parser)]
#[command(name = "paperscout")]
#[command(about = "Find recent arXiv papers by roster members", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch recent papers and write the HTML digest
    Scrape {
        /// Write the digest here instead of the configured path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Match a single author name against the member roster
    Check {
        /// Author name as it appears in a byline
        name: String,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Scrape { output } => {
            let config = Config::load()?;
            info!("Loaded config from ~/paperscout/config.json");
            command::scrape::run(&config, output).await
        }
        Commands::Check { name } => {
            let config = Config::load()?;
            command::check::run(&config, &name)
        }
        Commands::Init => Config::create_config(),
        Commands::Version => {
            println!("paperscout {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
