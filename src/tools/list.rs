//! Route enumeration tool.

use crate::config::ListStrategy;
use crate::error::DocsError;
use crate::services::{extract, DocsService, Upstream};
use crate::types::Route;
use serde::Serialize;
use std::collections::BTreeSet;

/// Docs subtrees enumerated by the directory strategy, relative to the
/// package root, with the route prefix their entries map to.
const DOC_SUBTREES: &[(&str, &str)] = &[
    ("src/routes/docs/components", "/docs/components"),
    ("src/routes/docs/examples", "/docs/examples"),
];

/// Output for the list tool.
#[derive(Debug, Serialize)]
pub struct ListOutput {
    /// Number of routes
    pub count: usize,
    /// Sorted, de-duplicated routes
    pub routes: Vec<String>,
    /// Strategy that produced the list
    pub strategy: String,
}

/// Executes the list tool with the configured strategy.
///
/// # Errors
///
/// Returns an error if any upstream request fails or returns an
/// unparseable body.
pub async fn execute_list(service: &DocsService) -> Result<ListOutput, DocsError> {
    let strategy = service.config().list_strategy;
    let routes = match strategy {
        ListStrategy::Directory => list_from_directories(service).await?,
        ListStrategy::Navigation => list_from_navigation(service).await?,
    };

    Ok(ListOutput {
        count: routes.len(),
        routes: routes.into_iter().map(Route::into_string).collect(),
        strategy: strategy.to_string(),
    })
}

/// Enumerates routes from the contents API listings of the docs subtrees.
///
/// Only directory entries become routes; the result is sorted and
/// de-duplicated.
///
/// # Errors
///
/// Fails if either listing fails.
pub async fn list_from_directories(service: &DocsService) -> Result<Vec<Route>, DocsError> {
    let mut routes = BTreeSet::new();

    for &(dir, prefix) in DOC_SUBTREES {
        let entries = service.github().list_directory(dir).await?;
        let before = routes.len();
        routes.extend(
            entries
                .iter()
                .filter(|entry| entry.is_dir())
                .map(|entry| Route::new(format!("{prefix}/{}", entry.name))),
        );
        tracing::debug!(dir, added = routes.len() - before, "listed docs subtree");
    }

    Ok(routes.into_iter().collect())
}

/// Enumerates routes by scraping the rendered site's related-links section.
///
/// # Errors
///
/// Fails if the page cannot be fetched.
pub async fn list_from_navigation(service: &DocsService) -> Result<Vec<Route>, DocsError> {
    let url = service.config().site_url(&service.config().nav_page);
    let html = service.http().get_text(&url, Upstream::Plain).await?;
    Ok(extract::extract_nav_routes(&html)
        .into_iter()
        .map(Route::new)
        .collect())
}
