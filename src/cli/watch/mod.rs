//! Watch command - drives a search session from stdin
//!
//! Each input line replaces the current query and is searched once the
//! debounce period passes. Lines starting with `!` search immediately, as if
//! picked from history, and `:clear` wipes the recent searches. A snapshot is
//! printed whenever the session state changes.

use std::time::Duration;

use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::info;

use super::query::format_item;
use crate::infrastructure::services::{SearchSession, SearchSnapshot, SearchState};

#[derive(Args, Debug, Clone)]
pub struct WatchArgs {
    /// Overrides the configured debounce period
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Print snapshots as JSON lines
    #[arg(long)]
    pub json: bool,
}

/// Input line interpreted as a session action
#[derive(Debug, Clone, PartialEq, Eq)]
enum WatchInput {
    Edit(String),
    Select(String),
    ClearRecent,
}

impl WatchInput {
    fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);

        if line == ":clear" {
            Self::ClearRecent
        } else if let Some(query) = line.strip_prefix('!') {
            Self::Select(query.to_string())
        } else {
            Self::Edit(line.to_string())
        }
    }
}

pub async fn run(args: WatchArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();

    let mut session_config = config.session_config();
    if let Some(ms) = args.debounce_ms {
        session_config = session_config.with_debounce(Duration::from_millis(ms));
    }
    let debounce = session_config.debounce;
    let request_timeout = Duration::from_secs(config.api.timeout_secs);

    let use_cases = crate::create_search_use_cases(&config).await?;
    let session = SearchSession::with_config(use_cases, session_config);
    let mut snapshots = session.subscribe();

    session.load_initial_data().await;
    print_snapshot(&snapshots.borrow_and_update(), args.json)?;

    info!("Watching stdin for queries");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => apply(&session, WatchInput::parse(&line)).await,
                None => break,
            },
            changed = snapshots.changed() => {
                if changed.is_err() {
                    return Ok(());
                }
                print_snapshot(&snapshots.borrow_and_update(), args.json)?;
            }
        }
    }

    drain(&mut snapshots, debounce, request_timeout, args.json).await
}

async fn apply(session: &SearchSession, input: WatchInput) {
    match input {
        WatchInput::Edit(query) => session.set_query(query),
        WatchInput::Select(query) => session.select_recent_search(query),
        WatchInput::ClearRecent => session.clear_recent_searches().await,
    }
}

/// Lets a pending debounced search fire and complete after stdin closes
async fn drain(
    snapshots: &mut watch::Receiver<SearchSnapshot>,
    debounce: Duration,
    request_timeout: Duration,
    json: bool,
) -> anyhow::Result<()> {
    let quiet = tokio::time::sleep(debounce + Duration::from_millis(50));
    tokio::pin!(quiet);

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    return Ok(());
                }
                print_snapshot(&snapshots.borrow_and_update(), json)?;
            }
            _ = &mut quiet => break,
        }
    }

    if snapshots.borrow().state == SearchState::Searching {
        let settled = tokio::time::timeout(
            request_timeout,
            snapshots.wait_for(|s| s.state != SearchState::Searching),
        )
        .await;

        if let Ok(Ok(snapshot)) = settled {
            print_snapshot(&snapshot, json)?;
        }
    }

    Ok(())
}

fn print_snapshot(snapshot: &SearchSnapshot, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(snapshot)?);
        return Ok(());
    }

    println!("{}", summarize(snapshot));
    if snapshot.state == SearchState::Results {
        for item in &snapshot.results {
            println!("  {}", format_item(item));
        }
    }
    Ok(())
}

fn summarize(snapshot: &SearchSnapshot) -> String {
    match snapshot.state {
        SearchState::Initial => format!(
            "ready: recent [{}] popular [{}]",
            snapshot.recent_searches.join(", "),
            snapshot.popular_searches.join(", ")
        ),
        SearchState::Searching => format!("searching '{}'...", snapshot.query),
        SearchState::Results => format!(
            "{} result(s) for '{}'",
            snapshot.results.len(),
            snapshot.query
        ),
        SearchState::NoResults => format!("no results for '{}'", snapshot.query),
        SearchState::Error => format!(
            "error: {}",
            snapshot.error_message.as_deref().unwrap_or("unknown error")
        ),
    }
}
