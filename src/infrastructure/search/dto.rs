//! Wire payloads of the remote search API

use serde::Deserialize;

use crate::domain::search::{SearchResultItem, SearchResultType};

/// Search hit as sent by the remote API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultItemDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    /// Kept untyped so a malformed value degrades to `Unknown`
    #[serde(rename = "type", default)]
    pub result_type: serde_json::Value,
    pub relevance_score: f64,
}

impl SearchResultItemDto {
    pub fn into_domain(self) -> SearchResultItem {
        let result_type = self
            .result_type
            .as_str()
            .map(SearchResultType::from_wire)
            .unwrap_or_default();

        SearchResultItem::new(self.id, self.title, result_type)
            .with_description(self.description)
            .with_image_url(self.image_url)
            .with_category(self.category)
            .with_relevance_score(self.relevance_score)
    }
}

/// Body of `GET /api/search/popular`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularSearchesResponse {
    pub popular_searches: Vec<String>,
}
