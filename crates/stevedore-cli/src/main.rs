//! Stevedore CLI - Syncs artifact-registry inventory into a software catalog.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before flag/env parsing
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stevedore=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sync(args) => commands::sync::run(args).await,
        Commands::Regions => commands::regions::run(),
        Commands::Version => {
            println!("stevedore {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
