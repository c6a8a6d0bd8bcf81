//! Search domain - result model, collaborator traits and use cases

mod cached;
mod gateway;
mod item;
mod repository;
mod use_case;

pub use cached::CachedSearchResults;
pub use gateway::SearchGateway;
pub use item::{SearchResultItem, SearchResultType};
pub use repository::SearchRepository;
pub use use_case::{
    ClearRecentSearchesUseCase, GetPopularSearchesUseCase, GetRecentSearchesUseCase,
    SearchItemsUseCase, SearchUseCases, UseCase,
};

#[cfg(test)]
pub use gateway::MockSearchGateway;
#[cfg(test)]
pub use repository::MockSearchRepository;
