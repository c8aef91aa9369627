use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Placeholder shown when a video carries no description.
pub const NO_DESCRIPTION: &str = "No description";

/// A listing's description field. The provider distinguishes an absent key
/// from an explicit `null`, and the SEO view renders them differently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Description {
    #[default]
    Missing,
    Null,
    Text(String),
}

impl Description {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Description::Text(text) => Some(text),
            Description::Missing | Description::Null => None,
        }
    }
}

impl From<Option<Option<String>>> for Description {
    fn from(field: Option<Option<String>>) -> Self {
        match field {
            None => Description::Missing,
            Some(None) => Description::Null,
            Some(Some(text)) => Description::Text(text),
        }
    }
}

/// One listing entry as returned by the search provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub view_count: Option<u64>,
    pub description: Description,
}

impl SearchResult {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            view_count: None,
            description: Description::Missing,
        }
    }

    #[cfg(test)]
    pub fn with_views(mut self, views: u64) -> Self {
        self.view_count = Some(views);
        self
    }

    #[cfg(test)]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Description::Text(description.into());
        self
    }

    #[cfg(test)]
    pub fn with_null_description(mut self) -> Self {
        self.description = Description::Null;
        self
    }

    /// View count, or 0 when the provider did not report one.
    pub fn views(&self) -> u64 {
        self.view_count.unwrap_or(0)
    }

    /// Description, or [`NO_DESCRIPTION`] when missing or null.
    pub fn description(&self) -> &str {
        self.description.as_text().unwrap_or(NO_DESCRIPTION)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendingVideo {
    pub title: String,
    pub url: String,
    pub view_count: u64,
    pub hashtags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoVideo {
    pub title: String,
    pub url: String,
    pub view_count: u64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitorChannel {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EarningsEstimate {
    pub views: u64,
    pub cpm: f64,
    pub earnings: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct KeywordForm {
    #[validate(length(min = 1, max = 200, message = "keyword must be 1-200 characters"))]
    pub keyword: String,
}

impl KeywordForm {
    pub fn trimmed(&self) -> KeywordForm {
        KeywordForm {
            keyword: self.keyword.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct EarningsForm {
    #[validate(range(min = 0, message = "views must not be negative"))]
    pub views: i64,
    /// Blank means the configured default.
    #[serde(default)]
    pub cpm: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TipsResponse {
    pub tips: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub provider_ready: bool,
    pub provider_version: Option<String>,
    pub uptime_seconds: u64,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
            timestamp: Utc::now(),
        }
    }
}
