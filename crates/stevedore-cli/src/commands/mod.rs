//! CLI commands and argument parsing.

pub mod regions;
pub mod sync;

use clap::{Parser, Subcommand};

/// Stevedore - artifact-registry inventory sync for software catalogs
#[derive(Parser)]
#[command(name = "stevedore")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run a full inventory sync into the catalog
    Sync(sync::SyncArgs),

    /// List the artifact-registry locations accepted in --regions
    Regions,

    /// Print version information
    Version,
}
