//! Query-to-search session
//!
//! Turns a stream of query edits into searches: edits are debounced, each
//! search runs as a task that supersedes the previous one, and the outcome
//! is published as a [`SearchSnapshot`] on a watch channel.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::domain::search::{SearchResultItem, SearchUseCases, UseCase};

/// Phase of the current search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchState {
    #[default]
    Initial,
    Searching,
    Results,
    NoResults,
    Error,
}

/// Everything a front end needs to render the search screen
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSnapshot {
    pub query: String,
    pub state: SearchState,
    pub results: Vec<SearchResultItem>,
    pub recent_searches: Vec<String>,
    pub popular_searches: Vec<String>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

/// Configuration for a search session
#[derive(Debug, Clone)]
pub struct SearchSessionConfig {
    /// Quiet period before a query edit triggers a search
    pub debounce: Duration,
}

impl Default for SearchSessionConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(500),
        }
    }
}

impl SearchSessionConfig {
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}

/// Handle to one in-flight search
///
/// Cancelling does not abort the underlying request; the task checks the flag
/// once the use case has resolved and discards its output if set.
#[derive(Debug)]
struct SearchTask {
    query: String,
    cancelled: Arc<AtomicBool>,
}

impl SearchTask {
    fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

/// Latest query edit as seen by the debounce loop
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct QueryEdit {
    query: String,
    /// False when the query was already searched directly
    pending: bool,
}

struct SessionInner {
    use_cases: SearchUseCases,
    snapshot: watch::Sender<SearchSnapshot>,
    current: Mutex<Option<SearchTask>>,
}

impl SessionInner {
    fn perform_search(self: &Arc<Self>, query: String) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(previous) = current.take() {
            debug!(query = previous.query, "Cancelling superseded search");
            previous.cancel();
        }

        if query.is_empty() {
            self.snapshot.send_modify(|s| {
                s.results.clear();
                s.state = SearchState::Initial;
                s.is_loading = false;
                s.error_message = None;
            });
            return;
        }

        self.snapshot.send_modify(|s| {
            s.state = SearchState::Searching;
            s.is_loading = true;
            s.error_message = None;
        });

        let cancelled = Arc::new(AtomicBool::new(false));
        tokio::spawn(Self::run_search(
            self.clone(),
            query.clone(),
            cancelled.clone(),
        ));

        *current = Some(SearchTask { query, cancelled });
    }

    async fn run_search(self: Arc<Self>, query: String, cancelled: Arc<AtomicBool>) {
        let result = self.use_cases.search_items.execute(query.clone()).await;

        // The flag is read under the watch lock so a superseding search that
        // already published `Searching` is never overwritten.
        self.snapshot.send_if_modified(|s| {
            if cancelled.load(Ordering::SeqCst) {
                debug!(query, "Discarding results of cancelled search");
                return false;
            }

            s.is_loading = false;

            match result {
                Ok(items) => {
                    s.state = if items.is_empty() {
                        SearchState::NoResults
                    } else {
                        SearchState::Results
                    };
                    s.results = items;
                }
                Err(e) => {
                    error!(query, error = %e, "Search error");
                    s.results.clear();
                    s.error_message = Some(e.to_string());
                    s.state = SearchState::Error;
                }
            }
            true
        });
    }
}

/// Stateful search front for one client context
///
/// Must be created inside a Tokio runtime; the debounce loop is spawned on
/// construction and aborted on drop.
pub struct SearchSession {
    inner: Arc<SessionInner>,
    query_tx: watch::Sender<QueryEdit>,
    debouncer: JoinHandle<()>,
}

impl std::fmt::Debug for SearchSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSession")
            .field("snapshot", &*self.inner.snapshot.borrow())
            .finish_non_exhaustive()
    }
}

impl SearchSession {
    pub fn new(use_cases: SearchUseCases) -> Self {
        Self::with_config(use_cases, SearchSessionConfig::default())
    }

    pub fn with_config(use_cases: SearchUseCases, config: SearchSessionConfig) -> Self {
        let (snapshot, _) = watch::channel(SearchSnapshot::default());
        let (query_tx, query_rx) = watch::channel(QueryEdit::default());

        let inner = Arc::new(SessionInner {
            use_cases,
            snapshot,
            current: Mutex::new(None),
        });

        let debouncer = tokio::spawn(debounce_queries(inner.clone(), query_rx, config.debounce));

        Self {
            inner,
            query_tx,
            debouncer,
        }
    }

    /// Subscribes to snapshot updates
    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.inner.snapshot.subscribe()
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        self.inner.snapshot.borrow().clone()
    }

    /// Records a query edit; the search fires after the debounce period
    ///
    /// An edit equal to the current query is ignored.
    pub fn set_query(&self, query: impl Into<String>) {
        self.update_query(query.into(), true);
    }

    fn update_query(&self, query: String, pending: bool) {
        let changed = self.query_tx.send_if_modified(|edit| {
            if edit.query == query {
                return false;
            }
            *edit = QueryEdit {
                query: query.clone(),
                pending,
            };
            true
        });

        if changed {
            self.inner.snapshot.send_modify(|s| s.query = query);
        }
    }

    /// Starts a search right away, superseding any in-flight one
    pub fn perform_search(&self, query: impl Into<String>) {
        self.inner.perform_search(query.into());
    }

    /// Sets the query from history and searches without waiting
    pub fn select_recent_search(&self, query: impl Into<String>) {
        let query = query.into();

        self.inner.perform_search(query.clone());
        self.update_query(query, false);
    }

    /// Loads recent and popular searches into the snapshot
    pub async fn load_initial_data(&self) {
        if let Ok(recent) = self.inner.use_cases.get_recent_searches.execute(()).await {
            self.inner
                .snapshot
                .send_modify(|s| s.recent_searches = recent);
        }

        match self.inner.use_cases.get_popular_searches.execute(()).await {
            Ok(popular) => self
                .inner
                .snapshot
                .send_modify(|s| s.popular_searches = popular),
            Err(e) => error!(error = %e, "Failed to load popular searches"),
        }
    }

    pub async fn clear_recent_searches(&self) {
        let _ = self.inner.use_cases.clear_recent_searches.execute(()).await;
        self.inner
            .snapshot
            .send_modify(|s| s.recent_searches.clear());
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        self.debouncer.abort();

        if let Some(task) = self
            .inner
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            task.cancel();
        }
    }
}

/// Waits for `debounce` of silence after each edit, then searches the latest
/// value unless it was already searched directly.
async fn debounce_queries(
    inner: Arc<SessionInner>,
    mut queries: watch::Receiver<QueryEdit>,
    debounce: Duration,
) {
    while queries.changed().await.is_ok() {
        loop {
            tokio::select! {
                changed = queries.changed() => {
                    if changed.is_err() {
                        return;
                    }
                }
                _ = tokio::time::sleep(debounce) => break,
            }
        }

        let edit = queries.borrow_and_update().clone();

        if edit.pending {
            inner.perform_search(edit.query);
        }
    }
}
