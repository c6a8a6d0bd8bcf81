use std::time::Duration;

use serde::Deserialize;

use crate::domain::DomainError;
use crate::infrastructure::http::HttpApiConfig;
use crate::infrastructure::search::SearchStoreConfig;
use crate::infrastructure::services::SearchSessionConfig;
use crate::infrastructure::storage::{StorageConfig, StorageType};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub storage: StorageSettings,
    pub search: SearchConfig,
    pub logging: LoggingConfig,
}

/// Remote search backend
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// `in_memory` or `redis`
    pub backend: String,
    pub redis_url: Option<String>,
    pub key_prefix: Option<String>,
    pub max_capacity: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub cache_ttl_secs: u64,
    pub max_recent_searches: usize,
    pub debounce_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageType::InMemory.to_string(),
            redis_url: None,
            key_prefix: None,
            max_capacity: 10_000,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: 3600,
            max_recent_searches: 10,
            debounce_ms: 500,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    pub fn http_api_config(&self) -> HttpApiConfig {
        HttpApiConfig::new(&self.api.base_url)
            .with_timeout(Duration::from_secs(self.api.timeout_secs))
    }

    /// Resolves the storage backend, failing on unknown or incomplete settings
    pub fn storage_config(&self) -> Result<StorageConfig, DomainError> {
        let storage_type: StorageType = self.storage.backend.parse()?;

        let config = match storage_type {
            StorageType::InMemory => StorageConfig::in_memory(),
            StorageType::Redis => {
                let url = self.storage.redis_url.as_deref().ok_or_else(|| {
                    DomainError::configuration("storage.redis_url is required for redis backend")
                })?;
                StorageConfig::redis(url)
            }
        };

        let config = config.with_max_capacity(self.storage.max_capacity);

        Ok(match &self.storage.key_prefix {
            Some(prefix) => config.with_key_prefix(prefix.clone()),
            None => config,
        })
    }

    pub fn search_store_config(&self) -> SearchStoreConfig {
        SearchStoreConfig::default()
            .with_max_recent_searches(self.search.max_recent_searches)
            .with_cache_ttl(Duration::from_secs(self.search.cache_ttl_secs))
    }

    pub fn session_config(&self) -> SearchSessionConfig {
        SearchSessionConfig::default().with_debounce(Duration::from_millis(self.search.debounce_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.search.cache_ttl_secs, 3600);
        assert_eq!(config.search.max_recent_searches, 10);
        assert_eq!(config.search.debounce_ms, 500);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_partial_sections_fall_back_to_defaults() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "search": { "max_recent_searches": 3 },
            "logging": { "format": "json" }
        }))
        .unwrap();

        assert_eq!(config.search.max_recent_searches, 3);
        assert_eq!(config.search.cache_ttl_secs, 3600);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_storage_config_in_memory() {
        let config = AppConfig::default();
        let storage = config.storage_config().unwrap();

        assert_eq!(storage.storage_type, StorageType::InMemory);
        assert_eq!(storage.max_capacity, Some(10_000));
    }

    #[test]
    fn test_storage_config_redis_requires_url() {
        let mut config = AppConfig::default();
        config.storage.backend = "redis".to_string();

        let result = config.storage_config();
        assert!(matches!(result, Err(DomainError::Configuration { .. })));

        config.storage.redis_url = Some("redis://localhost:6379".to_string());
        config.storage.key_prefix = Some("search".to_string());

        let storage = config.storage_config().unwrap();
        assert_eq!(storage.storage_type, StorageType::Redis);
        assert_eq!(storage.redis_url.as_deref(), Some("redis://localhost:6379"));
        assert_eq!(storage.key_prefix.as_deref(), Some("search"));
    }

    #[test]
    fn test_storage_config_rejects_unknown_backend() {
        let mut config = AppConfig::default();
        config.storage.backend = "sqlite".to_string();

        assert!(config.storage_config().is_err());
    }

    #[test]
    fn test_search_settings_conversion() {
        let mut config = AppConfig::default();
        config.search.cache_ttl_secs = 60;
        config.search.max_recent_searches = 5;
        config.search.debounce_ms = 250;

        let store = config.search_store_config();
        assert_eq!(store.cache_ttl, Duration::from_secs(60));
        assert_eq!(store.max_recent_searches, 5);
        assert_eq!(config.session_config().debounce, Duration::from_millis(250));
    }
}
