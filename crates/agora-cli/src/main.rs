//! Agora CLI - philosophical debates from the terminal
//!
//! # Usage
//!
//! ```bash
//! # Debate a topic for the default five rounds
//! agora debate "Free Will"
//!
//! # Shorter debate on a specific model
//! agora debate "Utilitarianism" --rounds 2 --model llama-3.3-70b-versatile
//!
//! # Show version and configuration
//! agora info
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{debate, info};

/// Agora - a debate arena for generated philosophers
///
/// Generates two opposing philosopher personas for a topic, gathers
/// supporting sources for each, and lets them argue for a fixed number of
/// rounds.
#[derive(Parser)]
#[command(
    name = "agora",
    version,
    about = "Agora CLI - LLM-vs-LLM philosophical debates"
)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a debate on a topic
    #[command(name = "debate")]
    Debate(debate::DebateArgs),

    /// Show version and provider configuration
    #[command(name = "info")]
    Info,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Debate(args) => debate::run(args).await,
        Commands::Info => info::run(),
    }
}
