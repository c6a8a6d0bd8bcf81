//! One-shot commands over the search use cases

use clap::Args;
use tracing::{info, warn};

use super::OutputArgs;
use crate::config::AppConfig;
use crate::domain::{SearchResultItem, SearchUseCases, UseCase};
use crate::infrastructure::storage::StorageType;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Search query; an empty query returns no results
    pub query: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

async fn use_cases(config: &AppConfig) -> anyhow::Result<SearchUseCases> {
    crate::create_search_use_cases(config).await
}

/// True when storage lives only as long as this process
fn is_process_local(config: &AppConfig) -> bool {
    matches!(config.storage.backend.parse::<StorageType>(), Ok(StorageType::InMemory))
}

fn warn_if_process_local(config: &AppConfig, command: &str) {
    if is_process_local(config) {
        warn!(
            command,
            "In-memory storage does not persist between runs; \
             set storage.backend=redis to share search history"
        );
    }
}

pub async fn search(args: SearchArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();
    let use_cases = use_cases(&config).await?;

    let results = use_cases.search_items.execute(args.query.clone()).await?;
    info!(query = %args.query, count = results.len(), "Search completed");

    if args.output.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if results.is_empty() {
        println!("No results for '{}'", args.query);
    } else {
        for item in &results {
            println!("{}", format_item(item));
        }
    }

    Ok(())
}

pub async fn recent(args: OutputArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();
    warn_if_process_local(&config, "recent");
    let use_cases = use_cases(&config).await?;

    let searches = use_cases.get_recent_searches.execute(()).await?;
    print_queries(&searches, &args)
}

pub async fn clear_recent() -> anyhow::Result<()> {
    let config = super::bootstrap();
    warn_if_process_local(&config, "clear-recent");
    let use_cases = use_cases(&config).await?;

    use_cases.clear_recent_searches.execute(()).await?;
    println!("Recent searches cleared");

    Ok(())
}

pub async fn popular(args: OutputArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();
    let use_cases = use_cases(&config).await?;

    let searches = use_cases.get_popular_searches.execute(()).await?;
    print_queries(&searches, &args)
}

fn print_queries(queries: &[String], args: &OutputArgs) -> anyhow::Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(queries)?);
    } else {
        for query in queries {
            println!("{}", query);
        }
    }
    Ok(())
}

/// One line per item: type, id, title and the category when present
pub(crate) fn format_item(item: &SearchResultItem) -> String {
    let line = format!("[{}] {}\t{}", item.result_type(), item.id(), item.title());

    if item.category().is_empty() {
        line
    } else {
        format!("{} ({})", line, item.category())
    }
}
