//! Search infrastructure - gateway, local store and repository implementations

mod dto;
mod local;
mod policy;
mod remote;
mod repository;

pub use dto::{PopularSearchesResponse, SearchResultItemDto};
pub use local::{SearchLocalStore, SearchStoreConfig};
pub use policy::{best_effort, propagating};
pub use remote::RemoteSearchGateway;
pub use repository::CachingSearchRepository;
