//! Local key-value storage trait definition

use std::fmt::Debug;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::domain::DomainError;

/// Persistent key-value store
///
/// This trait uses JSON strings internally to be dyn-compatible.
/// Use the helper methods on [`LocalStorageExt`] for typed get/save.
#[async_trait]
pub trait LocalStorage: Send + Sync + Debug {
    /// Gets a raw JSON value
    async fn get_raw(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Stores a raw JSON value, replacing any previous value
    async fn save_raw(&self, key: &str, value: &str) -> Result<(), DomainError>;

    /// Removes a key, returning true if it existed
    async fn remove(&self, key: &str) -> Result<bool, DomainError>;
}

/// Extension trait providing typed get/save operations
pub trait LocalStorageExt: LocalStorage {
    /// Gets a typed value
    fn get<'a, V>(
        &'a self,
        key: &'a str,
    ) -> impl std::future::Future<Output = Result<Option<V>, DomainError>> + Send
    where
        V: DeserializeOwned + Send,
    {
        async move {
            match self.get_raw(key).await? {
                Some(data) => {
                    let value: V = serde_json::from_str(&data).map_err(|e| {
                        DomainError::storage(format!(
                            "Failed to deserialize value for '{}': {}",
                            key, e
                        ))
                    })?;
                    Ok(Some(value))
                }
                None => Ok(None),
            }
        }
    }

    /// Serializes and saves a typed value
    fn save<'a, V>(
        &'a self,
        key: &'a str,
        value: &'a V,
    ) -> impl std::future::Future<Output = Result<(), DomainError>> + Send
    where
        V: Serialize + Send + Sync,
    {
        async move {
            let data = serde_json::to_string(value).map_err(|e| {
                DomainError::storage(format!("Failed to serialize value for '{}': {}", key, e))
            })?;
            self.save_raw(key, &data).await
        }
    }
}

// Blanket implementation for all types implementing LocalStorage
impl<T: LocalStorage + ?Sized> LocalStorageExt for T {}
