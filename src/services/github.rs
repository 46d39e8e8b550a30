//! GitHub REST API calls: directory listing and code search.

use super::http::{Fetched, HttpFetcher, Upstream};
use crate::config::DocsConfig;
use crate::error::DocsError;
use serde::Deserialize;

/// One entry of a contents-API directory listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ContentEntry {
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == "dir"
    }
}

/// Code-search response body.
#[derive(Debug, Clone, Deserialize)]
pub struct CodeSearchResponse {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub items: Vec<CodeSearchItem>,
}

/// A single code-search hit.
#[derive(Debug, Clone, Deserialize)]
pub struct CodeSearchItem {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub score: f64,
}

/// Error body returned by the API on failure.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// Client for the two API endpoints the tools use.
#[derive(Debug, Clone)]
pub struct GitHubApi {
    http: HttpFetcher,
    config: DocsConfig,
}

impl GitHubApi {
    #[must_use]
    pub fn new(http: HttpFetcher, config: DocsConfig) -> Self {
        Self { http, config }
    }

    /// Lists a directory relative to the package root.
    ///
    /// # Errors
    ///
    /// Fails on any non-success response or a body that is not an array of
    /// entries.
    pub async fn list_directory(&self, dir: &str) -> Result<Vec<ContentEntry>, DocsError> {
        let url = self.config.contents_url(dir);
        let body = self.http.get_text(&url, Upstream::GitHubApi).await?;
        serde_json::from_str(&body).map_err(|e| DocsError::Decode {
            url,
            details: e.to_string(),
        })
    }

    /// Runs a code search scoped to the repository and package path.
    ///
    /// # Errors
    ///
    /// Non-success responses become `UpstreamStatus` (or `NotFound`) with the
    /// API's `message` as details when present.
    pub async fn search_code(&self, query: &str) -> Result<CodeSearchResponse, DocsError> {
        let url = self.config.code_search_url(query);
        let fetched = self.http.get(&url, Upstream::GitHubApi).await;
        if let Fetched::Status { status, body } = &fetched {
            let details = serde_json::from_str::<ApiErrorBody>(body)
                .ok()
                .and_then(|b| b.message)
                .or_else(|| status.canonical_reason().map(str::to_string));
            return Err(DocsError::UpstreamStatus {
                url,
                status: status.as_u16(),
                details,
            });
        }
        let body = fetched.into_body(&url)?;

        serde_json::from_str(&body).map_err(|e| DocsError::Decode {
            url,
            details: e.to_string(),
        })
    }
}
