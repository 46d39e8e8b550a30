//! Common test utilities for layerchart-docs-mcp integration tests.
//!
//! Provides `TestEnv`, a `wiremock` server standing in for the site, the raw
//! host and the REST API at once, with a `DocsService` pointed at it.

#![allow(dead_code)] // Test utilities may not all be used in every test file

use layerchart_docs_mcp::{DocsConfig, DocsService, ListStrategy, SearchStrategy};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Raw-host path prefix for the package (`/<repo>/<branch>/<package>`).
pub const RAW_PREFIX: &str = "/techniq/layerchart/main/packages/layerchart";

/// Contents-API path prefix for the docs subtrees.
pub const CONTENTS_PREFIX: &str =
    "/repos/techniq/layerchart/contents/packages/layerchart/src/routes/docs";

/// A mock upstream plus a service configured against it.
pub struct TestEnv {
    pub server: MockServer,
    pub config: DocsConfig,
}

impl TestEnv {
    /// Starts a mock server with default strategies.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let config = DocsConfig::with_origin(&server.uri());
        Self { server, config }
    }

    pub fn with_list_strategy(mut self, strategy: ListStrategy) -> Self {
        self.config = self.config.with_list_strategy(strategy);
        self
    }

    pub fn with_search_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.config = self.config.with_search_strategy(strategy);
        self
    }

    /// Builds the service under test.
    pub fn service(&self) -> DocsService {
        DocsService::new(self.config.clone()).expect("Failed to build service")
    }

    /// Expected raw URL for a path relative to the package root.
    pub fn raw_url(&self, rel: &str) -> String {
        format!("{}{RAW_PREFIX}/{rel}", self.server.uri())
    }

    /// Serves `body` with `status` at an exact path.
    pub async fn mount(&self, at: &str, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path(at.to_string()))
            .respond_with(ResponseTemplate::new(status).set_body_string(body.to_string()))
            .mount(&self.server)
            .await;
    }

    /// Serves a docs page source for a route.
    pub async fn mount_page(&self, route: &str, body: &str) {
        self.mount(&format!("{RAW_PREFIX}/src/routes{route}/+page.svelte"), 200, body)
            .await;
    }

    /// Serves a component implementation source.
    pub async fn mount_component(&self, name: &str, body: &str) {
        self.mount(&format!("{RAW_PREFIX}/src/lib/components/{name}.svelte"), 200, body)
            .await;
    }

    /// Serves a contents-API listing for `components` or `examples`.
    ///
    /// `entries` are `(name, type)` pairs.
    pub async fn mount_listing(&self, subtree: &str, entries: &[(&str, &str)]) {
        let body = json!(entries
            .iter()
            .map(|(name, kind)| json!({
                "name": name,
                "type": kind,
                "path": format!("packages/layerchart/src/routes/docs/{subtree}/{name}"),
            }))
            .collect::<Vec<_>>());
        Mock::given(method("GET"))
            .and(path(format!("{CONTENTS_PREFIX}/{subtree}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Serves a contents-API listing with a standard set of routes.
    pub async fn mount_default_listings(&self) {
        self.mount_listing(
            "components",
            &[
                ("BarChart", "dir"),
                ("Tooltip", "dir"),
                ("Axis", "dir"),
                ("README.md", "file"),
            ],
        )
        .await;
        self.mount_listing("examples", &[("Area", "dir"), ("Brush", "dir")])
            .await;
    }
}
