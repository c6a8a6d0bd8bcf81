use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::api::{ApiService, Endpoint, HttpMethod};
use crate::domain::DomainError;

/// Configuration for the HTTP API service
#[derive(Debug, Clone)]
pub struct HttpApiConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for HttpApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl HttpApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Real API service using reqwest
#[derive(Debug, Clone)]
pub struct HttpApiService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApiService {
    pub fn new(config: HttpApiConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

#[async_trait]
impl ApiService for HttpApiService {
    async fn request_raw(&self, endpoint: &Endpoint) -> Result<serde_json::Value, DomainError> {
        let url = self.url_for(endpoint);
        debug!(method = %endpoint.method(), url = %url, "Sending API request");

        let request = match endpoint.method() {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        let response = request
            .query(endpoint.query())
            .send()
            .await
            .map_err(|e| DomainError::remote(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(DomainError::remote(format!("HTTP {}: {}", status, error_body)));
        }

        response
            .json()
            .await
            .map_err(|e| DomainError::remote(format!("Failed to parse response: {}", e)))
    }
}
