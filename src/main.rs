use clap::Parser;
use search_core::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Search(args) => cli::query::search(args).await,
        Command::Recent(args) => cli::query::recent(args).await,
        Command::ClearRecent => cli::query::clear_recent().await,
        Command::Popular(args) => cli::query::popular(args).await,
        Command::Watch(args) => cli::watch::run(args).await,
    }
}
