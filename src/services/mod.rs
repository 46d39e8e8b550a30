//! Service layer: HTTP plumbing, route mapping and markup extraction.

pub mod extract;
mod github;
mod http;
mod resolver;

pub use github::{CodeSearchItem, CodeSearchResponse, ContentEntry, GitHubApi};
pub use http::{Fetched, HttpFetcher, Upstream, USER_AGENT};
pub use resolver::RouteResolver;

use crate::config::DocsConfig;
use crate::error::DocsError;

/// Everything a tool call needs, shared immutably across calls.
#[derive(Debug, Clone)]
pub struct DocsService {
    config: DocsConfig,
    http: HttpFetcher,
    resolver: RouteResolver,
    github: GitHubApi,
}

impl DocsService {
    /// Builds the HTTP client and derives the resolver from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: DocsConfig) -> Result<Self, DocsError> {
        let http = HttpFetcher::new(&config)?;
        let resolver = RouteResolver::new(&config);
        let github = GitHubApi::new(http.clone(), config.clone());
        Ok(Self {
            config,
            http,
            resolver,
            github,
        })
    }

    #[must_use]
    pub fn config(&self) -> &DocsConfig {
        &self.config
    }

    #[must_use]
    pub fn http(&self) -> &HttpFetcher {
        &self.http
    }

    #[must_use]
    pub fn resolver(&self) -> &RouteResolver {
        &self.resolver
    }

    #[must_use]
    pub fn github(&self) -> &GitHubApi {
        &self.github
    }
}
