//! Storage factory for runtime backend selection

use std::sync::Arc;

use crate::domain::storage::LocalStorage;
use crate::domain::DomainError;

use super::in_memory::{InMemoryLocalStorage, InMemoryStorageConfig};
use super::redis::{RedisLocalStorage, RedisStorageConfig};

/// Supported storage backends
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StorageType {
    /// In-memory storage using moka
    #[default]
    InMemory,
    /// Redis storage
    Redis,
}

impl std::fmt::Display for StorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageType::InMemory => write!(f, "in_memory"),
            StorageType::Redis => write!(f, "redis"),
        }
    }
}

impl std::str::FromStr for StorageType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in_memory" | "inmemory" | "in-memory" | "memory" => Ok(StorageType::InMemory),
            "redis" => Ok(StorageType::Redis),
            _ => Err(DomainError::configuration(format!(
                "Unknown storage backend: {}. Valid backends: in_memory, redis",
                s
            ))),
        }
    }
}

/// Configuration for the storage factory
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub storage_type: StorageType,
    /// Redis URL (required for Redis type)
    pub redis_url: Option<String>,
    /// Key prefix for namespacing (Redis only)
    pub key_prefix: Option<String>,
    /// Maximum capacity (in-memory only)
    pub max_capacity: Option<u64>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            storage_type: StorageType::InMemory,
            redis_url: None,
            key_prefix: None,
            max_capacity: Some(10_000),
        }
    }
}

impl StorageConfig {
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn redis(url: impl Into<String>) -> Self {
        Self {
            storage_type: StorageType::Redis,
            redis_url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    pub fn with_max_capacity(mut self, capacity: u64) -> Self {
        self.max_capacity = Some(capacity);
        self
    }
}

/// Factory for creating storage instances
#[derive(Debug, Default)]
pub struct StorageFactory;

impl StorageFactory {
    pub fn new() -> Self {
        Self
    }

    /// Creates a storage instance based on configuration
    pub async fn create(&self, config: &StorageConfig) -> Result<Arc<dyn LocalStorage>, DomainError> {
        match config.storage_type {
            StorageType::InMemory => {
                let mut in_memory_config = InMemoryStorageConfig::default();

                if let Some(capacity) = config.max_capacity {
                    in_memory_config = in_memory_config.with_max_capacity(capacity);
                }

                Ok(Arc::new(InMemoryLocalStorage::with_config(in_memory_config)))
            }
            StorageType::Redis => {
                let url = config.redis_url.clone().ok_or_else(|| {
                    DomainError::configuration("Redis URL is required for Redis storage")
                })?;

                let mut redis_config = RedisStorageConfig::new(url);

                if let Some(prefix) = &config.key_prefix {
                    redis_config = redis_config.with_key_prefix(prefix.clone());
                }

                Ok(Arc::new(RedisLocalStorage::new(redis_config).await?))
            }
        }
    }

    /// Creates an in-memory storage with default settings
    pub fn create_in_memory(&self) -> Arc<dyn LocalStorage> {
        Arc::new(InMemoryLocalStorage::new())
    }
}
