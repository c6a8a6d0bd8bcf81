//! CLI module for the search service
//!
//! Provides subcommands over the search use cases:
//! - `search`: run one search (cache first)
//! - `recent` / `clear-recent`: inspect or wipe the search history
//! - `popular`: list popular searches
//! - `watch`: interactive session fed by query edits on stdin

pub mod query;
pub mod watch;

use clap::{Args, Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging::{self, LoggingConfig};

/// Search Service Core - cache-first search with local history
#[derive(Parser)]
#[command(name = "search-core")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search for items, serving cached results when fresh
    Search(query::SearchArgs),

    /// List recent searches, most recent first
    ///
    /// History only outlives a single run with a shared backend
    /// (storage.backend=redis).
    Recent(OutputArgs),

    /// Clear the recent search history
    ///
    /// Only meaningful with a shared backend (storage.backend=redis).
    ClearRecent,

    /// List popular searches
    Popular(OutputArgs),

    /// Read query edits from stdin and print session snapshots
    Watch(watch::WatchArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Print JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

/// Loads `.env` and configuration, then installs logging
pub fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&LoggingConfig::from(&config.logging));

    config
}
