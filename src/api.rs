//! Catalog API client.
//!
//! Thin typed wrapper over the catalog backend's REST endpoints. It maps
//! requests to HTTP calls and responses to model types and does nothing
//! else: no retries, no caching, no interpretation of failures. Callers
//! decide what each error means for their view.

use crate::config::Config;
use crate::models::{Rating, RatingDraft, Stats, Tool, ToolDraft, ToolFilter, ToolSummary};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;

/// Error type for catalog API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection refused, DNS, timeout)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Server returned a 5xx status
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
    /// The requested entity does not exist (404 on an id fetch)
    #[error("not found")]
    NotFound,
    /// The server rejected a create request (non-404 4xx)
    #[error("validation error: {message}")]
    Validation { message: String },
    /// Response body did not match the expected shape
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "Could not reach the catalog server. Is it running?".to_string()
            }
            ApiError::Server { status, .. } => {
                format!("The catalog server returned an error (HTTP {status}).")
            }
            ApiError::NotFound => "Not found.".to_string(),
            ApiError::Validation { message } => message.clone(),
            ApiError::Decode(_) => "The catalog server sent an unexpected response.".to_string(),
        }
    }
}

/// Error body shape used by the backend for 4xx/5xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Client for the catalog backend API.
///
/// Holds a reusable HTTP client; cheap to clone via `Arc` at the app layer.
pub struct CatalogClient {
    base_url: String,
    client: Client,
}

impl CatalogClient {
    /// Create a client from configuration.
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();
        Self {
            base_url: config.base_url.clone(),
            client,
        }
    }

    /// Create a client for a given base URL with default settings.
    /// Used by tests pointing at a mock server.
    pub fn with_url(base_url: &str) -> Self {
        Self::new(&Config::new().with_base_url(base_url))
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List tools matching the filter, in server-defined sort order.
    pub async fn list_tools(&self, filter: &ToolFilter) -> Result<Vec<ToolSummary>, ApiError> {
        let url = format!("{}/api/tools", self.base_url);
        let response = self.client.get(&url).query(filter).send().await?;
        read_json(response).await
    }

    /// Fetch one tool by id, including its embedded ratings.
    pub async fn get_tool(&self, id: i64) -> Result<Tool, ApiError> {
        let url = format!("{}/api/tools/{}", self.base_url, id);
        let response = self.client.get(&url).send().await?;
        read_json(response).await
    }

    /// Create a tool from a draft. Returns the created tool with its
    /// server-assigned id and timestamps.
    pub async fn create_tool(&self, draft: &ToolDraft) -> Result<Tool, ApiError> {
        let url = format!("{}/api/tools", self.base_url);
        let response = self.client.post(&url).json(draft).send().await?;
        read_json(response).await
    }

    /// Create a rating for a tool. The server recomputes the tool's
    /// aggregate; callers wanting the new aggregate re-fetch the tool.
    pub async fn create_rating(
        &self,
        tool_id: i64,
        draft: &RatingDraft,
    ) -> Result<Rating, ApiError> {
        let url = format!("{}/api/tools/{}/ratings", self.base_url, tool_id);
        let response = self.client.post(&url).json(draft).send().await?;
        read_json(response).await
    }

    /// Distinct category strings currently in use.
    pub async fn list_categories(&self) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/api/categories", self.base_url);
        let response = self.client.get(&url).send().await?;
        read_json(response).await
    }

    /// Top tools by the server's trending metric, truncated to `limit`.
    pub async fn get_trending(&self, limit: u32) -> Result<Vec<ToolSummary>, ApiError> {
        let url = format!("{}/api/tools/trending", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("limit", limit)])
            .send()
            .await?;
        read_json(response).await
    }

    /// Catalog-wide stats snapshot.
    pub async fn get_stats(&self) -> Result<Stats, ApiError> {
        let url = format!("{}/api/stats", self.base_url);
        let response = self.client.get(&url).send().await?;
        read_json(response).await
    }
}

/// Map a response to a typed body or an `ApiError` per the status class.
async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        let bytes = response.bytes().await?;
        return serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()));
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|e| e.detail)
        .unwrap_or_else(|_| {
            if body.is_empty() {
                "request failed".to_string()
            } else {
                body.clone()
            }
        });

    if status == StatusCode::NOT_FOUND {
        Err(ApiError::NotFound)
    } else if status.is_client_error() {
        Err(ApiError::Validation { message })
    } else {
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }
}
