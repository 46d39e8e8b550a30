//! Runtime configuration: upstream origins, repository coordinates and
//! strategy switches.
//!
//! Defaults point at the public LayerChart site and GitHub. Every origin is
//! overridable so tests can aim the tools at a local mock server.

use std::fmt;
use std::time::Duration;

/// Rendered documentation website.
pub const DEFAULT_SITE_ORIGIN: &str = "https://www.layerchart.com";
/// Raw file host.
pub const DEFAULT_RAW_ORIGIN: &str = "https://raw.githubusercontent.com";
/// REST API host (contents listing and code search).
pub const DEFAULT_API_ORIGIN: &str = "https://api.github.com";
pub const DEFAULT_REPO: &str = "techniq/layerchart";
pub const DEFAULT_BRANCH: &str = "main";
pub const DEFAULT_PACKAGE_PATH: &str = "packages/layerchart";
/// Page whose "Related" section the navigation strategy scrapes.
pub const DEFAULT_NAV_PAGE: &str = "/docs/components/BarChart";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// How the list tool enumerates routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ListStrategy {
    /// Directory listing of the docs subtrees via the contents API
    #[default]
    Directory,
    /// Links scraped from the rendered site's navigation
    Navigation,
}

impl fmt::Display for ListStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory => write!(f, "directory"),
            Self::Navigation => write!(f, "navigation"),
        }
    }
}

/// How the search tool finds matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SearchStrategy {
    /// Remote code-search endpoint
    #[default]
    CodeSearch,
    /// Local substring scan over every known route's page source
    ContentScan,
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CodeSearch => write!(f, "code-search"),
            Self::ContentScan => write!(f, "content-scan"),
        }
    }
}

/// Immutable configuration shared by every tool call.
#[derive(Debug, Clone)]
pub struct DocsConfig {
    pub site_origin: String,
    pub raw_origin: String,
    pub api_origin: String,
    /// `owner/name`
    pub repo: String,
    pub branch: String,
    /// Package directory inside the repository
    pub package_path: String,
    pub nav_page: String,
    pub timeout: Duration,
    pub list_strategy: ListStrategy,
    pub search_strategy: SearchStrategy,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
            raw_origin: DEFAULT_RAW_ORIGIN.to_string(),
            api_origin: DEFAULT_API_ORIGIN.to_string(),
            repo: DEFAULT_REPO.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            package_path: DEFAULT_PACKAGE_PATH.to_string(),
            nav_page: DEFAULT_NAV_PAGE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            list_strategy: ListStrategy::default(),
            search_strategy: SearchStrategy::default(),
        }
    }
}

impl DocsConfig {
    /// Points all three upstream origins at one base URL (mock servers).
    #[must_use]
    pub fn with_origin(origin: &str) -> Self {
        let origin = origin.trim_end_matches('/').to_string();
        Self {
            site_origin: origin.clone(),
            raw_origin: origin.clone(),
            api_origin: origin,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_list_strategy(mut self, strategy: ListStrategy) -> Self {
        self.list_strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_search_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.search_strategy = strategy;
        self
    }

    /// Base URL for raw files of the package, e.g.
    /// `https://raw.githubusercontent.com/techniq/layerchart/main/packages/layerchart`.
    #[must_use]
    pub fn raw_base(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.raw_origin.trim_end_matches('/'),
            self.repo,
            self.branch,
            self.package_path.trim_matches('/')
        )
    }

    /// Contents API URL for a directory relative to the package root.
    #[must_use]
    pub fn contents_url(&self, dir: &str) -> String {
        format!(
            "{}/repos/{}/contents/{}/{}?ref={}",
            self.api_origin.trim_end_matches('/'),
            self.repo,
            self.package_path.trim_matches('/'),
            dir.trim_matches('/'),
            self.branch
        )
    }

    /// Code-search API URL scoped to the repository and package path.
    #[must_use]
    pub fn code_search_url(&self, query: &str) -> String {
        let q = format!(
            "{query} repo:{} path:{}",
            self.repo,
            self.package_path.trim_matches('/')
        );
        format!(
            "{}/search/code?q={}",
            self.api_origin.trim_end_matches('/'),
            urlencoding::encode(&q)
        )
    }

    /// Rendered site URL for a normalized route.
    #[must_use]
    pub fn site_url(&self, route: &str) -> String {
        format!("{}{route}", self.site_origin.trim_end_matches('/'))
    }
}
