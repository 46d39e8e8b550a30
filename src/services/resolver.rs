//! Route ↔ raw-source URL mapping.
//!
//! Pure string transformations; nothing here performs I/O.

use crate::config::DocsConfig;
use crate::types::{Route, SourceVariant};

/// Route served from a fixed page outside the `/docs` tree on the site.
const GETTING_STARTED_ROUTE: &str = "/getting-started";
const GETTING_STARTED_PAGE: &str = "src/routes/docs/getting-started/+page.svelte";

/// Filename of a SvelteKit page source.
const PAGE_FILE: &str = "+page.svelte";
const SOURCE_EXT: &str = "svelte";

const COMPONENTS_SEGMENT: &str = "/components/";
const ROUTES_DIR: &str = "src/routes";
const DOC_ROUTES_DIR: &str = "src/routes/docs";
const COMPONENTS_DIR: &str = "src/lib/components";

/// Maps documentation routes to raw-source URLs and back.
#[derive(Debug, Clone)]
pub struct RouteResolver {
    site_origin: String,
    raw_base: String,
    package_path: String,
}

impl RouteResolver {
    #[must_use]
    pub fn new(config: &DocsConfig) -> Self {
        Self {
            site_origin: config.site_origin.trim_end_matches('/').to_string(),
            raw_base: config.raw_base(),
            package_path: config.package_path.trim_matches('/').to_string(),
        }
    }

    /// Strips the site origin (or any absolute URL's origin) and trailing
    /// slashes.
    #[must_use]
    pub fn normalize(&self, route: &str) -> Route {
        let route = route.trim();
        let path = match route.strip_prefix(self.site_origin.as_str()) {
            Some(rest) => rest.to_string(),
            None if route.starts_with("http://") || route.starts_with("https://") => {
                url::Url::parse(route)
                    .map(|u| u.path().to_string())
                    .unwrap_or_else(|_| route.to_string())
            }
            None => route.to_string(),
        };
        Route::new(path.trim_end_matches('/'))
    }

    /// Resolves a route to a raw-source URL, or `None` when no mapping applies.
    #[must_use]
    pub fn resolve(&self, route: &str, variant: SourceVariant) -> Option<String> {
        self.resolve_route(&self.normalize(route), variant)
    }

    /// Same as [`resolve`](Self::resolve) for an already-normalized route.
    #[must_use]
    pub fn resolve_route(&self, route: &Route, variant: SourceVariant) -> Option<String> {
        let path = route.as_str();
        if !path.starts_with('/') || path.split('/').any(|seg| seg == "..") {
            return None;
        }

        match variant {
            SourceVariant::Usage => {
                if path == GETTING_STARTED_ROUTE {
                    Some(format!("{}/{GETTING_STARTED_PAGE}", self.raw_base))
                } else {
                    Some(format!("{}/{ROUTES_DIR}{path}/{PAGE_FILE}", self.raw_base))
                }
            }
            SourceVariant::Implementation => {
                if !path.contains(COMPONENTS_SEGMENT) {
                    return None;
                }
                let name = route.name();
                if name.is_empty() {
                    return None;
                }
                Some(format!(
                    "{}/{COMPONENTS_DIR}/{name}.{SOURCE_EXT}",
                    self.raw_base
                ))
            }
        }
    }

    /// Maps a repository file path back to its documentation route.
    ///
    /// - `.../src/routes/docs/components/BarChart/+page.svelte` → `/docs/components/BarChart`
    /// - `.../src/lib/components/BarChart.svelte` → `/docs/components/BarChart`
    ///
    /// Any other file (layouts, `.ts` modules) maps to `None`.
    #[must_use]
    pub fn route_for_repo_path(&self, path: &str) -> Option<Route> {
        if path.contains(DOC_ROUTES_DIR) {
            let routes_prefix = format!("{}/{ROUTES_DIR}", self.package_path);
            let route = path
                .strip_prefix(routes_prefix.as_str())
                .or_else(|| path.find(DOC_ROUTES_DIR).map(|i| &path[i + ROUTES_DIR.len()..]))?;
            // Layouts, loaders and assets under the docs tree are not pages
            let route = route.strip_suffix(PAGE_FILE)?.trim_end_matches('/');
            return Some(Route::new(route));
        }

        if path.contains(COMPONENTS_DIR) {
            let file = path.rsplit('/').next()?;
            let name = file.strip_suffix(SOURCE_EXT)?.strip_suffix('.')?;
            if name.is_empty() {
                return None;
            }
            return Some(Route::new(format!("/docs/components/{name}")));
        }

        None
    }
}
