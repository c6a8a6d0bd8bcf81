//! Domain layer - Core business logic and entities

pub mod api;
pub mod clock;
pub mod error;
pub mod search;
pub mod storage;

pub use api::{ApiService, ApiServiceExt, Endpoint, HttpMethod};
pub use clock::{Clock, SystemClock};
pub use error::DomainError;
pub use search::{
    CachedSearchResults, ClearRecentSearchesUseCase, GetPopularSearchesUseCase,
    GetRecentSearchesUseCase, SearchGateway, SearchItemsUseCase, SearchRepository,
    SearchResultItem, SearchResultType, SearchUseCases, UseCase,
};
pub use storage::{LocalStorage, LocalStorageExt};
