//! Documentation search tool.
//!
//! Two strategies sit behind [`SearchStrategy`]:
//! - `code-search` delegates to the GitHub code-search endpoint and maps each
//!   hit's file path back to a documentation route.
//! - `content-scan` enumerates known routes and scans each page source
//!   locally. Routes that fail to fetch contribute nothing; the call still
//!   succeeds.

use super::list::list_from_directories;
use crate::config::SearchStrategy;
use crate::error::DocsError;
use crate::services::extract::collapse_whitespace;
use crate::services::{DocsService, Fetched, Upstream};
use crate::types::{MatchType, Relevance, Route, SourceVariant};
use futures::stream::{self, StreamExt};
use regex::{Regex, RegexBuilder};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Maximum hits returned by the code-search strategy.
pub const CODE_SEARCH_LIMIT: usize = 10;

/// Maximum hits returned by the content-scan strategy.
pub const CONTENT_SCAN_LIMIT: usize = 20;

/// Page-source fetches in flight at once during a content scan.
const MAX_CONCURRENT_FETCHES: usize = 8;

/// Characters of context kept on each side of a content match.
const PREVIEW_RADIUS: usize = 150;

/// Input for the search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchInput {
    /// The search query (e.g., 'BarChart', 'tooltip')
    pub query: String,
}

/// Output for the search tool; tagged with the strategy that produced it.
#[derive(Debug, Serialize)]
#[serde(tag = "strategy", rename_all = "kebab-case")]
pub enum SearchOutput {
    CodeSearch(CodeSearchOutput),
    ContentScan(ContentScanOutput),
}

impl SearchOutput {
    /// Routes of the returned hits, in result order (unmapped hits skipped).
    #[must_use]
    pub fn routes(&self) -> Vec<&str> {
        match self {
            Self::CodeSearch(out) => out.results.iter().filter_map(|h| h.route.as_deref()).collect(),
            Self::ContentScan(out) => out.results.iter().map(|h| h.route.as_str()).collect(),
        }
    }
}

/// Code-search results.
#[derive(Debug, Serialize)]
pub struct CodeSearchOutput {
    pub query: String,
    /// Total matches reported by the endpoint
    pub total_count: u64,
    /// Top hits by endpoint score
    pub results: Vec<CodeSearchHit>,
}

/// One code-search hit.
#[derive(Debug, Serialize)]
pub struct CodeSearchHit {
    /// File name
    pub name: String,
    /// Repository path
    pub path: String,
    /// Documentation route for this file, if one applies
    pub route: Option<String>,
    pub github_url: Option<String>,
    pub score: f64,
}

/// Content-scan results.
#[derive(Debug, Serialize)]
pub struct ContentScanOutput {
    pub query: String,
    /// Routes considered
    pub routes_scanned: usize,
    /// Hits found before truncation
    pub total_count: usize,
    /// High-relevance hits first, then medium
    pub results: Vec<ScanHit>,
}

/// One content-scan hit.
#[derive(Debug, Clone, Serialize)]
pub struct ScanHit {
    pub route: String,
    pub relevance: Relevance,
    pub match_type: MatchType,
    /// Text around the first content match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

/// Executes the search tool with the configured strategy.
///
/// # Errors
///
/// `InvalidInput` for a blank query; otherwise the strategy's upstream
/// error. Individual route failures in a content scan are not errors.
pub async fn execute_search(
    service: &DocsService,
    input: SearchInput,
) -> Result<SearchOutput, DocsError> {
    let query = input.query.trim();
    if query.is_empty() {
        return Err(DocsError::InvalidInput(
            "Query must not be empty".to_string(),
        ));
    }

    match service.config().search_strategy {
        SearchStrategy::CodeSearch => code_search(service, query).await.map(SearchOutput::CodeSearch),
        SearchStrategy::ContentScan => {
            content_scan(service, query).await.map(SearchOutput::ContentScan)
        }
    }
}

/// Searches via the remote code-search endpoint.
///
/// # Errors
///
/// Fails on any non-success response or malformed body.
pub async fn code_search(service: &DocsService, query: &str) -> Result<CodeSearchOutput, DocsError> {
    let response = service.github().search_code(query).await?;

    let mut items = response.items;
    // Stable: ties keep the endpoint's order
    items.sort_by(|a, b| b.score.total_cmp(&a.score));

    let resolver = service.resolver();
    let results = items
        .into_iter()
        .take(CODE_SEARCH_LIMIT)
        .map(|item| CodeSearchHit {
            route: resolver
                .route_for_repo_path(&item.path)
                .map(Route::into_string),
            name: item.name,
            path: item.path,
            github_url: item.html_url,
            score: item.score,
        })
        .collect();

    Ok(CodeSearchOutput {
        query: query.to_string(),
        total_count: response.total_count,
        results,
    })
}

/// Scans every known route locally.
///
/// # Errors
///
/// Fails only if route enumeration fails.
pub async fn content_scan(
    service: &DocsService,
    query: &str,
) -> Result<ContentScanOutput, DocsError> {
    let matcher = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .map_err(|e| DocsError::InvalidInput(format!("Unusable query: {e}")))?;

    let routes = list_from_directories(service).await?;
    let routes_scanned = routes.len();

    let mut hits: Vec<ScanHit> = stream::iter(routes)
        .map(|route| scan_route(service, &matcher, route))
        .buffered(MAX_CONCURRENT_FETCHES)
        .collect::<Vec<_>>()
        .await
        .into_iter()
        .flatten()
        .collect();

    // Stable: within a tier, hits keep route order
    hits.sort_by_key(|hit| hit.relevance);
    let total_count = hits.len();
    hits.truncate(CONTENT_SCAN_LIMIT);

    tracing::debug!(query, routes_scanned, total_count, "content scan finished");

    Ok(ContentScanOutput {
        query: query.to_string(),
        routes_scanned,
        total_count,
        results: hits,
    })
}

async fn scan_route(service: &DocsService, matcher: &Regex, route: Route) -> Option<ScanHit> {
    if matcher.is_match(route.name()) {
        return Some(ScanHit {
            route: route.into_string(),
            relevance: Relevance::High,
            match_type: MatchType::RouteName,
            preview: None,
        });
    }

    let url = service.resolver().resolve_route(&route, SourceVariant::Usage)?;
    let body = match service.http().get(&url, Upstream::Plain).await {
        Fetched::Body(body) => body,
        Fetched::NotFound => {
            tracing::debug!(%route, %url, "skipping route: source not found");
            return None;
        }
        Fetched::Status { status, .. } => {
            tracing::debug!(%route, %url, status = status.as_u16(), "skipping route");
            return None;
        }
        Fetched::Transport(details) => {
            tracing::debug!(%route, %url, %details, "skipping route: request failed");
            return None;
        }
    };

    let found = matcher.find(&body)?;
    Some(ScanHit {
        route: route.into_string(),
        relevance: Relevance::Medium,
        match_type: MatchType::Content,
        preview: Some(preview_around(&body, found.start(), found.end())),
    })
}

/// Up to [`PREVIEW_RADIUS`] characters on each side of `start..end`,
/// whitespace collapsed. Offsets must lie on char boundaries.
fn preview_around(text: &str, start: usize, end: usize) -> String {
    let from = text[..start]
        .char_indices()
        .rev()
        .take(PREVIEW_RADIUS)
        .last()
        .map_or(start, |(i, _)| i);
    let to = text[end..]
        .char_indices()
        .nth(PREVIEW_RADIUS)
        .map_or(text.len(), |(i, _)| end + i);
    collapse_whitespace(&text[from..to])
}
