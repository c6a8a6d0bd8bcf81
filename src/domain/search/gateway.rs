//! Remote search gateway trait

use async_trait::async_trait;

use super::SearchResultItem;
use crate::domain::error::DomainError;

#[cfg(test)]
use mockall::automock;

/// Remote source of search results and popular terms
///
/// Implementations always hit the remote source and never consult a cache.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SearchGateway: Send + Sync {
    /// Runs a remote search for `query`
    async fn search_items(&self, query: &str) -> Result<Vec<SearchResultItem>, DomainError>;

    /// Fetches the current popular search terms
    async fn popular_searches(&self) -> Result<Vec<String>, DomainError>;
}
