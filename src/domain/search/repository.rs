//! Search repository trait

use async_trait::async_trait;

use super::SearchResultItem;
use crate::domain::error::DomainError;

#[cfg(test)]
use mockall::automock;

/// Single entry point for search data, hiding cache and remote details
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SearchRepository: Send + Sync {
    /// Cache-first search; an empty query yields an empty result
    async fn search_items(&self, query: &str) -> Result<Vec<SearchResultItem>, DomainError>;

    /// Recent queries, most recent first
    async fn recent_searches(&self) -> Vec<String>;

    async fn clear_recent_searches(&self);

    /// Cache-first popular terms
    async fn popular_searches(&self) -> Result<Vec<String>, DomainError>;
}
