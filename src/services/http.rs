//! Shared HTTP fetch helper.
//!
//! Every tool issues its GETs through [`HttpFetcher::get`], which folds the
//! "send, check status, read body" sequence into one tagged [`Fetched`].

use crate::config::DocsConfig;
use crate::error::DocsError;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};

/// User agent sent with every request (the GitHub API rejects requests without one).
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Media type requested from the GitHub REST API.
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Outcome of a single GET.
#[derive(Debug)]
pub enum Fetched {
    /// 2xx with the decoded body
    Body(String),
    /// 404
    NotFound,
    /// Any other non-success status, with whatever body came back
    Status { status: StatusCode, body: String },
    /// Connection, timeout or body-read failure
    Transport(String),
}

impl Fetched {
    /// Converts into the body or the matching [`DocsError`].
    ///
    /// # Errors
    ///
    /// Returns `NotFound`, `UpstreamStatus` or `Network` for the
    /// corresponding non-success outcomes.
    pub fn into_body(self, url: &str) -> Result<String, DocsError> {
        match self {
            Self::Body(body) => Ok(body),
            Self::NotFound => Err(DocsError::NotFound {
                url: url.to_string(),
            }),
            Self::Status { status, .. } => Err(DocsError::UpstreamStatus {
                url: url.to_string(),
                status: status.as_u16(),
                details: status.canonical_reason().map(str::to_string),
            }),
            Self::Transport(details) => Err(DocsError::Network {
                url: url.to_string(),
                details,
            }),
        }
    }
}

/// Which upstream a request targets; controls content negotiation headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    /// Raw files and rendered pages
    Plain,
    /// GitHub REST API (contents, code search)
    GitHubApi,
}

/// Thin wrapper over a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a client with the crate user agent and configured timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: &DocsConfig) -> Result<Self, DocsError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| DocsError::Internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Issues a GET and classifies the response.
    pub async fn get(&self, url: &str, upstream: Upstream) -> Fetched {
        let mut request = self.client.get(url);
        if upstream == Upstream::GitHubApi {
            request = request.header(ACCEPT, HeaderValue::from_static(GITHUB_JSON));
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(%url, error = %e, "request failed");
                return Fetched::Transport(e.to_string());
            }
        };

        let status = response.status();
        tracing::debug!(%url, status = status.as_u16(), "fetched");

        if status == StatusCode::NOT_FOUND {
            return Fetched::NotFound;
        }

        let body = response.text().await.map_err(|e| e.to_string());
        classify(status, body)
    }

    /// GET that must succeed; convenience for tools that fail on any error.
    ///
    /// # Errors
    ///
    /// See [`Fetched::into_body`].
    pub async fn get_text(&self, url: &str, upstream: Upstream) -> Result<String, DocsError> {
        self.get(url, upstream).await.into_body(url)
    }
}

/// Combines a non-404 status with the outcome of reading its body.
///
/// A failed body read only counts as a transport failure on success
/// statuses; otherwise the status is kept with an empty body.
fn classify(status: StatusCode, body: Result<String, String>) -> Fetched {
    match body {
        Ok(body) if status.is_success() => Fetched::Body(body),
        Ok(body) => Fetched::Status { status, body },
        Err(details) if status.is_success() => {
            Fetched::Transport(format!("Failed to read response body: {details}"))
        }
        Err(details) => {
            tracing::debug!(status = status.as_u16(), %details, "discarding unreadable error body");
            Fetched::Status {
                status,
                body: String::new(),
            }
        }
    }
}
