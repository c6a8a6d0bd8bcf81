//! Remote request executor trait

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::Endpoint;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Executes requests against the remote catalog API
///
/// Responses are returned as JSON so the trait stays dyn-compatible; use
/// [`ApiServiceExt::request`] for typed decoding.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    async fn request_raw(&self, endpoint: &Endpoint) -> Result<serde_json::Value, DomainError>;
}

/// Extension trait providing typed responses
pub trait ApiServiceExt: ApiService {
    fn request<'a, T>(
        &'a self,
        endpoint: &'a Endpoint,
    ) -> impl std::future::Future<Output = Result<T, DomainError>> + Send
    where
        T: DeserializeOwned + Send,
    {
        async move {
            let value = self.request_raw(endpoint).await?;
            serde_json::from_value(value).map_err(|e| {
                DomainError::remote(format!("Failed to decode response from {}: {}", endpoint, e))
            })
        }
    }
}

impl<T: ApiService + ?Sized> ApiServiceExt for T {}
