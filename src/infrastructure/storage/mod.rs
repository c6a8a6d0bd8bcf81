//! Storage infrastructure - LocalStorage implementations

mod factory;
mod in_memory;
mod redis;

pub use factory::{StorageConfig, StorageFactory, StorageType};
pub use in_memory::{InMemoryLocalStorage, InMemoryStorageConfig};
pub use self::redis::{RedisLocalStorage, RedisStorageConfig};
