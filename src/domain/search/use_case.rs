//! Search use cases
//!
//! Each use case wraps exactly one repository call behind the uniform
//! [`UseCase`] seam.

use std::sync::Arc;

use async_trait::async_trait;

use super::{SearchRepository, SearchResultItem};
use crate::domain::error::DomainError;

/// Single-operation application service
#[async_trait]
pub trait UseCase: Send + Sync {
    type Params: Send + 'static;
    type Output: Send;

    async fn execute(&self, params: Self::Params) -> Result<Self::Output, DomainError>;
}

/// Runs a cache-first search for the given query
#[derive(Clone)]
pub struct SearchItemsUseCase {
    repository: Arc<dyn SearchRepository>,
}

impl SearchItemsUseCase {
    pub fn new(repository: Arc<dyn SearchRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for SearchItemsUseCase {
    type Params = String;
    type Output = Vec<SearchResultItem>;

    async fn execute(&self, query: String) -> Result<Vec<SearchResultItem>, DomainError> {
        self.repository.search_items(&query).await
    }
}

/// Returns the recent search history; never fails
#[derive(Clone)]
pub struct GetRecentSearchesUseCase {
    repository: Arc<dyn SearchRepository>,
}

impl GetRecentSearchesUseCase {
    pub fn new(repository: Arc<dyn SearchRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for GetRecentSearchesUseCase {
    type Params = ();
    type Output = Vec<String>;

    async fn execute(&self, _params: ()) -> Result<Vec<String>, DomainError> {
        Ok(self.repository.recent_searches().await)
    }
}

/// Deletes the recent search history; never fails
#[derive(Clone)]
pub struct ClearRecentSearchesUseCase {
    repository: Arc<dyn SearchRepository>,
}

impl ClearRecentSearchesUseCase {
    pub fn new(repository: Arc<dyn SearchRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for ClearRecentSearchesUseCase {
    type Params = ();
    type Output = ();

    async fn execute(&self, _params: ()) -> Result<(), DomainError> {
        self.repository.clear_recent_searches().await;
        Ok(())
    }
}

/// Returns popular search terms, cache-first
#[derive(Clone)]
pub struct GetPopularSearchesUseCase {
    repository: Arc<dyn SearchRepository>,
}

impl GetPopularSearchesUseCase {
    pub fn new(repository: Arc<dyn SearchRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for GetPopularSearchesUseCase {
    type Params = ();
    type Output = Vec<String>;

    async fn execute(&self, _params: ()) -> Result<Vec<String>, DomainError> {
        self.repository.popular_searches().await
    }
}

/// The four search use cases built over one repository
#[derive(Clone)]
pub struct SearchUseCases {
    pub search_items: SearchItemsUseCase,
    pub get_recent_searches: GetRecentSearchesUseCase,
    pub clear_recent_searches: ClearRecentSearchesUseCase,
    pub get_popular_searches: GetPopularSearchesUseCase,
}

impl SearchUseCases {
    pub fn new(repository: Arc<dyn SearchRepository>) -> Self {
        Self {
            search_items: SearchItemsUseCase::new(repository.clone()),
            get_recent_searches: GetRecentSearchesUseCase::new(repository.clone()),
            clear_recent_searches: ClearRecentSearchesUseCase::new(repository.clone()),
            get_popular_searches: GetPopularSearchesUseCase::new(repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::{MockSearchRepository, SearchResultType};

    #[tokio::test]
    async fn test_search_items_passes_query_through() {
        let mut repository = MockSearchRepository::new();
        repository
            .expect_search_items()
            .withf(|query| query == "zelda")
            .times(1)
            .returning(|_| {
                Ok(vec![SearchResultItem::new("1", "Zelda", SearchResultType::Video)])
            });

        let use_case = SearchItemsUseCase::new(Arc::new(repository));
        let results = use_case.execute("zelda".to_string()).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title(), "Zelda");
    }

    #[tokio::test]
    async fn test_search_items_propagates_failure() {
        let mut repository = MockSearchRepository::new();
        repository
            .expect_search_items()
            .returning(|_| Err(DomainError::remote("connection refused")));

        let use_case = SearchItemsUseCase::new(Arc::new(repository));
        let error = use_case.execute("zelda".to_string()).await.unwrap_err();

        assert_eq!(error.to_string(), "Remote error: connection refused");
    }

    #[tokio::test]
    async fn test_get_recent_searches_always_succeeds() {
        let mut repository = MockSearchRepository::new();
        repository
            .expect_recent_searches()
            .returning(|| vec!["mario".to_string()]);

        let use_case = GetRecentSearchesUseCase::new(Arc::new(repository));
        let recent = tokio_test::assert_ok!(use_case.execute(()).await);

        assert_eq!(recent, vec!["mario".to_string()]);
    }

    #[tokio::test]
    async fn test_clear_recent_searches_always_succeeds() {
        let mut repository = MockSearchRepository::new();
        repository.expect_clear_recent_searches().times(1).return_const(());

        let use_case = ClearRecentSearchesUseCase::new(Arc::new(repository));
        tokio_test::assert_ok!(use_case.execute(()).await);
    }

    #[tokio::test]
    async fn test_get_popular_searches_propagates_failure() {
        let mut repository = MockSearchRepository::new();
        repository
            .expect_popular_searches()
            .returning(|| Err(DomainError::remote("timeout")));

        let use_case = GetPopularSearchesUseCase::new(Arc::new(repository));
        tokio_test::assert_err!(use_case.execute(()).await);
    }
}
