//! Search result value types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of catalog item a search result points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchResultType {
    Article,
    Video,
    Podcast,
    Event,
    Profile,
    #[default]
    Unknown,
}

impl SearchResultType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Video => "video",
            Self::Podcast => "podcast",
            Self::Event => "event",
            Self::Profile => "profile",
            Self::Unknown => "unknown",
        }
    }

    /// Maps a wire value onto the taxonomy; anything unrecognized is `Unknown`
    pub fn from_wire(value: &str) -> Self {
        match value {
            "article" => Self::Article,
            "video" => Self::Video,
            "podcast" => Self::Podcast,
            "event" => Self::Event,
            "profile" => Self::Profile,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for SearchResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single search hit as returned by the remote source
///
/// Values are never mutated after construction; the `with_*` methods consume
/// and return a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultItem {
    id: String,
    title: String,
    description: String,
    image_url: String,
    category: String,
    #[serde(rename = "type")]
    result_type: SearchResultType,
    relevance_score: f64,
}

impl SearchResultItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        result_type: SearchResultType,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            image_url: String::new(),
            category: String::new(),
            result_type,
            relevance_score: 0.0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_relevance_score(mut self, relevance_score: f64) -> Self {
        self.relevance_score = relevance_score;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn result_type(&self) -> SearchResultType {
        self.result_type
    }

    /// Source-assigned score; no ordering is enforced here
    pub fn relevance_score(&self) -> f64 {
        self.relevance_score
    }
}
