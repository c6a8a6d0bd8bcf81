//! Cache-first search repository

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::local::SearchLocalStore;
use super::policy::{best_effort, propagating};
use crate::domain::search::{SearchGateway, SearchRepository, SearchResultItem};
use crate::domain::DomainError;

/// Orchestrates the remote gateway and the local store
///
/// Holds no state of its own. Cache and history writes happen only after a
/// genuine remote fetch.
#[derive(Clone)]
pub struct CachingSearchRepository {
    gateway: Arc<dyn SearchGateway>,
    store: SearchLocalStore,
}

impl std::fmt::Debug for CachingSearchRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachingSearchRepository")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl CachingSearchRepository {
    pub fn new(gateway: Arc<dyn SearchGateway>, store: SearchLocalStore) -> Self {
        Self { gateway, store }
    }
}

#[async_trait]
impl SearchRepository for CachingSearchRepository {
    async fn search_items(&self, query: &str) -> Result<Vec<SearchResultItem>, DomainError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }

        // A failed cache read counts as a miss
        let cached = best_effort("read cached results", self.store.cached_results(query).await);

        if let Some(results) = cached.flatten() {
            debug!(query, count = results.len(), "Using cached search results");
            return Ok(results);
        }

        debug!(query, "Performing remote search");
        let results = propagating("remote search", self.gateway.search_items(query).await)?;

        best_effort(
            "cache search results",
            self.store.cache_search_results(query, &results).await,
        );
        self.store.save_search_query(query).await;

        Ok(results)
    }

    async fn recent_searches(&self) -> Vec<String> {
        self.store.recent_searches().await
    }

    async fn clear_recent_searches(&self) {
        self.store.clear_recent_searches().await
    }

    async fn popular_searches(&self) -> Result<Vec<String>, DomainError> {
        if let Some(popular) = self.store.cached_popular_searches().await {
            debug!(count = popular.len(), "Using cached popular searches");
            return Ok(popular);
        }

        let popular = propagating("fetch popular searches", self.gateway.popular_searches().await)?;
        self.store.cache_popular_searches(&popular).await;

        Ok(popular)
    }
}
