//! Remote search gateway backed by the API service

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::dto::{PopularSearchesResponse, SearchResultItemDto};
use crate::domain::api::{ApiService, ApiServiceExt, Endpoint};
use crate::domain::search::{SearchGateway, SearchResultItem};
use crate::domain::DomainError;

const SEARCH_PATH: &str = "/api/search";
const POPULAR_SEARCHES_PATH: &str = "/api/search/popular";

/// Gateway issuing search requests through an [`ApiService`]
#[derive(Clone)]
pub struct RemoteSearchGateway {
    api: Arc<dyn ApiService>,
}

impl std::fmt::Debug for RemoteSearchGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteSearchGateway").finish_non_exhaustive()
    }
}

impl RemoteSearchGateway {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self { api }
    }

    fn search_endpoint(query: &str) -> Endpoint {
        Endpoint::get(SEARCH_PATH).with_query("query", query)
    }
}

#[async_trait]
impl SearchGateway for RemoteSearchGateway {
    async fn search_items(&self, query: &str) -> Result<Vec<SearchResultItem>, DomainError> {
        debug!(query, "Executing remote search");

        let dtos: Vec<SearchResultItemDto> =
            self.api.request(&Self::search_endpoint(query)).await?;

        Ok(dtos.into_iter().map(SearchResultItemDto::into_domain).collect())
    }

    async fn popular_searches(&self) -> Result<Vec<String>, DomainError> {
        debug!("Fetching popular searches");

        let response: PopularSearchesResponse =
            self.api.request(&Endpoint::get(POPULAR_SEARCHES_PATH)).await?;

        Ok(response.popular_searches)
    }
}
