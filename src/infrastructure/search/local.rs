//! Local search store: history, result cache and popular-search cache

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error};

use super::policy::{best_effort, propagating};
use crate::domain::search::{CachedSearchResults, SearchResultItem};
use crate::domain::storage::{LocalStorage, LocalStorageExt};
use crate::domain::{Clock, DomainError};

const RECENT_SEARCHES_KEY: &str = "recent_searches";
const CACHED_RESULTS_KEY_PREFIX: &str = "cached_search_results_";
const POPULAR_SEARCHES_KEY: &str = "popular_searches";

/// Limits applied by the local store
#[derive(Debug, Clone)]
pub struct SearchStoreConfig {
    /// Maximum length of the recent search history
    pub max_recent_searches: usize,
    /// Age after which a cached result set is discarded
    pub cache_ttl: Duration,
}

impl Default for SearchStoreConfig {
    fn default() -> Self {
        Self {
            max_recent_searches: 10,
            cache_ttl: Duration::from_secs(60 * 60),
        }
    }
}

impl SearchStoreConfig {
    pub fn with_max_recent_searches(mut self, max: usize) -> Self {
        self.max_recent_searches = max;
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }
}

/// Owns every persisted search key
///
/// History operations are advisory and never fail; result-cache operations
/// surface storage errors to the caller.
#[derive(Debug, Clone)]
pub struct SearchLocalStore {
    storage: Arc<dyn LocalStorage>,
    clock: Arc<dyn Clock>,
    config: SearchStoreConfig,
}

impl SearchLocalStore {
    pub fn new(storage: Arc<dyn LocalStorage>, clock: Arc<dyn Clock>) -> Self {
        Self::with_config(storage, clock, SearchStoreConfig::default())
    }

    pub fn with_config(
        storage: Arc<dyn LocalStorage>,
        clock: Arc<dyn Clock>,
        config: SearchStoreConfig,
    ) -> Self {
        Self {
            storage,
            clock,
            config,
        }
    }

    fn cached_results_key(query: &str) -> String {
        format!("{}{}", CACHED_RESULTS_KEY_PREFIX, query.to_lowercase())
    }

    /// Records `query` at the front of the history
    ///
    /// Any entry equal ignoring case is dropped first and the list is cut to
    /// the configured maximum.
    pub async fn save_search_query(&self, query: &str) {
        let mut recent = self.recent_searches().await;
        let normalized = query.to_lowercase();

        recent.retain(|existing| existing.to_lowercase() != normalized);
        recent.insert(0, query.to_string());
        recent.truncate(self.config.max_recent_searches);

        if let Err(e) = self.storage.save(RECENT_SEARCHES_KEY, &recent).await {
            error!(error = %e, "Failed to save search query");
        }
    }

    /// Recent searches, most recent first; empty on absence or read failure
    pub async fn recent_searches(&self) -> Vec<String> {
        match self.storage.get::<Vec<String>>(RECENT_SEARCHES_KEY).await {
            Ok(recent) => recent.unwrap_or_default(),
            Err(e) => {
                error!(error = %e, "Failed to get recent searches");
                Vec::new()
            }
        }
    }

    pub async fn clear_recent_searches(&self) {
        best_effort(
            "clear recent searches",
            self.storage.remove(RECENT_SEARCHES_KEY).await,
        );
    }

    /// Replaces the cached result set for the normalized query
    pub async fn cache_search_results(
        &self,
        query: &str,
        results: &[SearchResultItem],
    ) -> Result<(), DomainError> {
        let entry = CachedSearchResults::new(results.to_vec(), self.clock.now_secs());

        propagating(
            "cache search results",
            self.storage
                .save(&Self::cached_results_key(query), &entry)
                .await,
        )
    }

    /// Cached result set for the query, or `None` if absent or expired
    ///
    /// Discovering an expired entry removes it.
    pub async fn cached_results(
        &self,
        query: &str,
    ) -> Result<Option<Vec<SearchResultItem>>, DomainError> {
        let key = Self::cached_results_key(query);

        let Some(cached) = self.storage.get::<CachedSearchResults>(&key).await? else {
            return Ok(None);
        };

        let ttl_secs = i64::try_from(self.config.cache_ttl.as_secs()).unwrap_or(i64::MAX);

        if cached.is_expired(self.clock.now_secs(), ttl_secs) {
            debug!(query, "Cached search results expired");
            best_effort("remove expired search results", self.storage.remove(&key).await);
            return Ok(None);
        }

        Ok(Some(cached.into_results()))
    }

    pub async fn cache_popular_searches(&self, searches: &[String]) {
        if let Err(e) = self.storage.save(POPULAR_SEARCHES_KEY, &searches).await {
            error!(error = %e, "Failed to cache popular searches");
        }
    }

    /// Cached popular searches; never expires
    pub async fn cached_popular_searches(&self) -> Option<Vec<String>> {
        match self.storage.get::<Vec<String>>(POPULAR_SEARCHES_KEY).await {
            Ok(popular) => popular,
            Err(e) => {
                error!(error = %e, "Failed to get cached popular searches");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::mock::ManualClock;
    use crate::domain::search::SearchResultType;
    use crate::domain::storage::{MockLocalStorage, StorageOp};

    const NOW: i64 = 1_700_000_000;

    fn store_with(storage: Arc<MockLocalStorage>, clock: Arc<ManualClock>) -> SearchLocalStore {
        SearchLocalStore::new(storage, clock)
    }

    fn items() -> Vec<SearchResultItem> {
        vec![
            SearchResultItem::new("1", "Zelda", SearchResultType::Video),
            SearchResultItem::new("2", "Zelda II", SearchResultType::Article),
        ]
    }

    #[tokio::test]
    async fn test_save_search_query_prepends() {
        let storage = Arc::new(MockLocalStorage::new());
        let store = store_with(storage, Arc::new(ManualClock::new(NOW)));

        store.save_search_query("mario").await;
        store.save_search_query("zelda").await;

        assert_eq!(store.recent_searches().await, vec!["zelda", "mario"]);
    }

    #[tokio::test]
    async fn test_save_search_query_dedupes_ignoring_case() {
        let storage = Arc::new(MockLocalStorage::new());
        let store = store_with(storage, Arc::new(ManualClock::new(NOW)));

        store.save_search_query("zelda").await;
        store.save_search_query("mario").await;
        store.save_search_query("ZeLdA").await;

        assert_eq!(store.recent_searches().await, vec!["ZeLdA", "mario"]);
    }

    #[tokio::test]
    async fn test_history_is_capped_and_evicts_oldest() {
        let storage = Arc::new(MockLocalStorage::new());
        let store = store_with(storage, Arc::new(ManualClock::new(NOW)));

        for i in 0..11 {
            store.save_search_query(&format!("query {}", i)).await;
        }

        let recent = store.recent_searches().await;
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0], "query 10");
        assert_eq!(recent[9], "query 1");
        assert!(!recent.contains(&"query 0".to_string()));
    }

    #[tokio::test]
    async fn test_history_limit_is_configurable() {
        let storage = Arc::new(MockLocalStorage::new());
        let store = SearchLocalStore::with_config(
            storage,
            Arc::new(ManualClock::new(NOW)),
            SearchStoreConfig::default().with_max_recent_searches(2),
        );

        store.save_search_query("a").await;
        store.save_search_query("b").await;
        store.save_search_query("c").await;

        assert_eq!(store.recent_searches().await, vec!["c", "b"]);
    }

    #[tokio::test]
    async fn test_save_search_query_swallows_write_failure() {
        let storage =
            Arc::new(MockLocalStorage::new().with_write_error(RECENT_SEARCHES_KEY, "disk full"));
        let store = store_with(storage.clone(), Arc::new(ManualClock::new(NOW)));

        store.save_search_query("zelda").await;

        assert!(!storage.contains(RECENT_SEARCHES_KEY));
    }

    #[tokio::test]
    async fn test_recent_searches_read_failure_is_empty() {
        let storage = Arc::new(
            MockLocalStorage::new()
                .with_entry(RECENT_SEARCHES_KEY, &vec!["zelda"])
                .with_read_error(RECENT_SEARCHES_KEY, "corrupt"),
        );
        let store = store_with(storage, Arc::new(ManualClock::new(NOW)));

        assert!(store.recent_searches().await.is_empty());
    }

    #[tokio::test]
    async fn test_clear_recent_searches() {
        let storage = Arc::new(MockLocalStorage::new());
        let store = store_with(storage.clone(), Arc::new(ManualClock::new(NOW)));

        store.save_search_query("zelda").await;
        store.clear_recent_searches().await;

        assert!(store.recent_searches().await.is_empty());
        assert!(!storage.contains(RECENT_SEARCHES_KEY));
    }

    #[tokio::test]
    async fn test_cache_key_is_lower_cased() {
        let storage = Arc::new(MockLocalStorage::new());
        let store = store_with(storage.clone(), Arc::new(ManualClock::new(NOW)));

        store.cache_search_results("ZELDA", &items()).await.unwrap();

        assert!(storage.contains("cached_search_results_zelda"));
        assert_eq!(store.cached_results("Zelda").await.unwrap(), Some(items()));
    }

    #[tokio::test]
    async fn test_cached_results_missing() {
        let storage = Arc::new(MockLocalStorage::new());
        let store = store_with(storage, Arc::new(ManualClock::new(NOW)));

        assert_eq!(store.cached_results("zelda").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_cached_results_valid_at_ttl_boundary() {
        let storage = Arc::new(MockLocalStorage::new());
        let clock = Arc::new(ManualClock::new(NOW));
        let store = store_with(storage, clock.clone());

        store.cache_search_results("zelda", &items()).await.unwrap();
        clock.advance(3600);

        assert_eq!(store.cached_results("zelda").await.unwrap(), Some(items()));
    }

    #[tokio::test]
    async fn test_expired_results_are_purged_on_read() {
        let storage = Arc::new(MockLocalStorage::new());
        let clock = Arc::new(ManualClock::new(NOW));
        let store = store_with(storage.clone(), clock.clone());

        store.cache_search_results("zelda", &items()).await.unwrap();
        clock.advance(3601);

        assert_eq!(store.cached_results("zelda").await.unwrap(), None);
        assert!(!storage.contains("cached_search_results_zelda"));
        assert!(storage
            .operations()
            .contains(&StorageOp::Remove("cached_search_results_zelda".to_string())));
    }

    #[tokio::test]
    async fn test_huge_ttl_keeps_results_fresh() {
        let storage = Arc::new(MockLocalStorage::new());
        let clock = Arc::new(ManualClock::new(NOW));
        let store = SearchLocalStore::with_config(
            storage,
            clock.clone(),
            SearchStoreConfig::default().with_cache_ttl(Duration::from_secs(u64::MAX)),
        );

        store.cache_search_results("zelda", &items()).await.unwrap();
        clock.advance(365 * 24 * 3600);

        assert_eq!(store.cached_results("zelda").await.unwrap(), Some(items()));
    }

    #[tokio::test]
    async fn test_cache_write_failure_propagates() {
        let storage = Arc::new(
            MockLocalStorage::new().with_write_error(CACHED_RESULTS_KEY_PREFIX, "disk full"),
        );
        let store = store_with(storage, Arc::new(ManualClock::new(NOW)));

        let result = store.cache_search_results("zelda", &items()).await;
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }

    #[tokio::test]
    async fn test_cache_read_failure_propagates() {
        let storage = Arc::new(
            MockLocalStorage::new().with_raw_entry("cached_search_results_zelda", "{broken"),
        );
        let store = store_with(storage, Arc::new(ManualClock::new(NOW)));

        assert!(store.cached_results("zelda").await.is_err());
    }

    #[tokio::test]
    async fn test_cached_popular_searches_never_expire() {
        let storage = Arc::new(MockLocalStorage::new());
        let clock = Arc::new(ManualClock::new(NOW));
        let store = store_with(storage, clock.clone());

        store
            .cache_popular_searches(&["mario".to_string(), "zelda".to_string()])
            .await;
        clock.advance(7 * 24 * 3600);

        assert_eq!(
            store.cached_popular_searches().await,
            Some(vec!["mario".to_string(), "zelda".to_string()])
        );
    }

    #[tokio::test]
    async fn test_cached_popular_searches_read_failure_is_none() {
        let storage =
            Arc::new(MockLocalStorage::new().with_read_error(POPULAR_SEARCHES_KEY, "corrupt"));
        let store = store_with(storage, Arc::new(ManualClock::new(NOW)));

        assert_eq!(store.cached_popular_searches().await, None);
    }
}
