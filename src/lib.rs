//! Search Service Core
//!
//! Cache-first retrieval of search results with local history bookkeeping:
//! - Remote search gateway over an HTTP API
//! - Local store for recent searches, TTL-bound result cache and popular searches
//! - In-memory (moka) or Redis backed key-value storage
//! - Debounced, cancellable search sessions

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use domain::{SearchRepository, SearchUseCases, SystemClock};
use infrastructure::http::HttpApiService;
use infrastructure::search::{CachingSearchRepository, RemoteSearchGateway, SearchLocalStore};
use infrastructure::storage::StorageFactory;
use tracing::info;

/// Create the search repository from configuration
pub async fn create_search_repository(
    config: &AppConfig,
) -> anyhow::Result<Arc<dyn SearchRepository>> {
    let storage_config = config.storage_config()?;
    info!("Storage backend: {}", storage_config.storage_type);

    let storage = StorageFactory::new().create(&storage_config).await?;
    let api = Arc::new(HttpApiService::new(config.http_api_config())?);
    info!("Search API: {}", config.api.base_url);

    let gateway = Arc::new(RemoteSearchGateway::new(api));
    let store = SearchLocalStore::with_config(
        storage,
        Arc::new(SystemClock),
        config.search_store_config(),
    );

    Ok(Arc::new(CachingSearchRepository::new(gateway, store)))
}

/// Create the search use cases from configuration
pub async fn create_search_use_cases(config: &AppConfig) -> anyhow::Result<SearchUseCases> {
    let repository = create_search_repository(config).await?;
    Ok(SearchUseCases::new(repository))
}
