//! Cached result set entry

use serde::{Deserialize, Serialize};

use super::SearchResultItem;

/// A result set stored under a normalized query key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedSearchResults {
    results: Vec<SearchResultItem>,
    /// Seconds since the Unix epoch at write time
    timestamp: i64,
}

impl CachedSearchResults {
    pub fn new(results: Vec<SearchResultItem>, timestamp: i64) -> Self {
        Self { results, timestamp }
    }

    pub fn results(&self) -> &[SearchResultItem] {
        &self.results
    }

    pub fn into_results(self) -> Vec<SearchResultItem> {
        self.results
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// An entry is expired once strictly more than `ttl_secs` have elapsed
    pub fn is_expired(&self, now: i64, ttl_secs: i64) -> bool {
        now - self.timestamp > ttl_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_boundary() {
        let cached = CachedSearchResults::new(vec![], 1_000);

        assert!(!cached.is_expired(1_000, 3600));
        assert!(!cached.is_expired(4_600, 3600));
        assert!(cached.is_expired(4_601, 3600));
    }
}
