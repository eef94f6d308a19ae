use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reduced projection of a tool used in list and grid views.
///
/// The backend returns this shape from `/api/tools` and `/api/tools/trending`.
/// It carries the rating aggregate but none of the long-form fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolSummary {
    /// Server-assigned identifier
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub language: Option<String>,
    /// Comma-separated tag list, e.g. "network, scanner, recon"
    #[serde(default)]
    pub tags: Option<String>,
    /// Mean of all ratings; absent when the tool has no ratings
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub rating_count: u32,
    #[serde(default)]
    pub github_url: Option<String>,
}

/// Full tool record as returned by `/api/tools/{id}`.
///
/// Includes the embedded ratings collection in server-defined order.
/// The aggregate fields (`average_rating`, `rating_count`) are computed
/// and owned by the backend; the client never derives them locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tool {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub installation_guide: Option<String>,
    #[serde(default)]
    pub usage_example: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub rating_count: u32,
    #[serde(default)]
    pub ratings: Vec<Rating>,
}

/// A single user-submitted score attached to one tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    pub id: i64,
    pub tool_id: i64,
    pub user_name: String,
    /// Integer score in 1..=5
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Catalog-wide aggregate snapshot from `/api/stats`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stats {
    pub total_tools: u32,
    pub total_ratings: u32,
    /// Count of distinct category values
    pub categories: u32,
    /// Overall mean across all ratings; absent when there are none
    #[serde(default)]
    pub average_rating: Option<f64>,
}

/// Request body for creating a tool.
///
/// Optional fields left blank in the form must be omitted from the wire
/// body entirely so the backend stores "no value" rather than an empty
/// string; `skip_serializing_if` enforces that.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installation_guide: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Request body for creating a rating.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RatingDraft {
    pub user_name: String,
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Sort order accepted by the tool listing endpoint.
///
/// The server decides sort direction; the client only names the key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Rating,
    Name,
    CreatedAt,
}

impl SortBy {
    /// Cycle to the next sort order (used by the sort selector).
    pub fn next(self) -> Self {
        match self {
            SortBy::Rating => SortBy::Name,
            SortBy::Name => SortBy::CreatedAt,
            SortBy::CreatedAt => SortBy::Rating,
        }
    }

    /// Human-readable label for the filter bar.
    pub fn label(self) -> &'static str {
        match self {
            SortBy::Rating => "Rating",
            SortBy::Name => "Name",
            SortBy::CreatedAt => "Newest",
        }
    }
}

/// Query parameters for the tool listing endpoint.
///
/// `None` fields are omitted from the query string entirely; an empty
/// search is "no search", never an explicit empty-match filter.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct ToolFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub sort_by: SortBy,
}

/// Split a comma-separated tags string into trimmed, non-empty segments.
pub fn split_tags(tags: &str) -> Vec<&str> {
    tags.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}
