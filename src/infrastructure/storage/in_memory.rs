//! In-memory local storage implementation using moka

use async_trait::async_trait;
use moka::future::Cache as MokaCache;

use crate::domain::storage::LocalStorage;
use crate::domain::DomainError;

/// Configuration for in-memory storage
#[derive(Debug, Clone)]
pub struct InMemoryStorageConfig {
    /// Maximum number of keys held before moka starts evicting
    pub max_capacity: u64,
}

impl Default for InMemoryStorageConfig {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
        }
    }
}

impl InMemoryStorageConfig {
    pub fn with_max_capacity(mut self, capacity: u64) -> Self {
        self.max_capacity = capacity;
        self
    }
}

/// Thread-safe in-memory key-value storage
///
/// Useful for testing and development. Data is lost when the process terminates.
/// Entries never expire on their own; expiry policy belongs to the caller.
#[derive(Debug)]
pub struct InMemoryLocalStorage {
    entries: MokaCache<String, String>,
    config: InMemoryStorageConfig,
}

impl InMemoryLocalStorage {
    pub fn new() -> Self {
        Self::with_config(InMemoryStorageConfig::default())
    }

    pub fn with_config(config: InMemoryStorageConfig) -> Self {
        let entries = MokaCache::builder()
            .max_capacity(config.max_capacity)
            .build();

        Self { entries, config }
    }

    pub fn max_capacity(&self) -> u64 {
        self.config.max_capacity
    }
}

impl Default for InMemoryLocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocalStorage for InMemoryLocalStorage {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.entries.get(key).await)
    }

    async fn save_raw(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.entries
            .insert(key.to_string(), value.to_string())
            .await;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.entries.remove(key).await.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::storage::LocalStorageExt;

    #[tokio::test]
    async fn test_save_and_get() {
        let storage = InMemoryLocalStorage::new();

        storage.save("key1", &"value1").await.unwrap();

        let result: Option<String> = storage.get("key1").await.unwrap();
        assert_eq!(result, Some("value1".to_string()));
    }

    #[tokio::test]
    async fn test_get_missing() {
        let storage = InMemoryLocalStorage::new();

        let result: Option<String> = storage.get("missing").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_save_replaces_previous_value() {
        let storage = InMemoryLocalStorage::new();

        storage.save("key1", &vec!["a"]).await.unwrap();
        storage.save("key1", &vec!["b", "c"]).await.unwrap();

        let result: Option<Vec<String>> = storage.get("key1").await.unwrap();
        assert_eq!(result, Some(vec!["b".to_string(), "c".to_string()]));
    }

    #[tokio::test]
    async fn test_remove() {
        let storage = InMemoryLocalStorage::new();

        storage.save("key1", &"value1").await.unwrap();

        assert!(storage.remove("key1").await.unwrap());
        assert!(!storage.remove("key1").await.unwrap());

        let result: Option<String> = storage.get("key1").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_config() {
        let config = InMemoryStorageConfig::default().with_max_capacity(100);
        let storage = InMemoryLocalStorage::with_config(config);

        assert_eq!(storage.max_capacity(), 100);
    }
}
