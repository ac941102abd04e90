//! Scenesmith CLI binary.
//!
//! Command-line access to the scene pipeline:
//! - Generate a scene document from a natural-language prompt
//! - Dump the canned fallback scene

use anyhow::Result;
use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    use cli::{Cli, Commands, run_fallback, run_generate};

    // .env support for ANTHROPIC_API_KEY
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Generate(args) => {
            run_generate(args).await?;
        }

        Commands::Fallback { out } => {
            run_fallback(&out)?;
        }
    }

    Ok(())
}
