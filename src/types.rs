//! Type-safe domain values for layerchart-docs-mcp.
//!
//! These types provide compile-time safety and semantic clarity
//! for the small vocabulary the tools share.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized documentation route, e.g. `/docs/components/BarChart`.
///
/// Normalization removes the site origin and any trailing slash; see
/// [`crate::services::RouteResolver::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Route(String);

impl Route {
    /// Wraps an already-normalized route string.
    #[must_use]
    pub fn new(route: impl Into<String>) -> Self {
        Self(route.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Final path segment, e.g. `BarChart` for `/docs/components/BarChart`.
    #[must_use]
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or_default()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Route {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Which source a route resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SourceVariant {
    /// The documentation page's own source (`+page.svelte`)
    Usage,
    /// The underlying component's source (`src/lib/components/<Name>.svelte`)
    Implementation,
}

impl fmt::Display for SourceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage => write!(f, "usage"),
            Self::Implementation => write!(f, "implementation"),
        }
    }
}

impl std::str::FromStr for SourceVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "usage" => Ok(Self::Usage),
            "implementation" => Ok(Self::Implementation),
            other => Err(format!(
                "Invalid source type: '{other}'. Valid types: usage, implementation"
            )),
        }
    }
}

/// Relevance tier of a content-scan hit.
///
/// Ordering matters: `High` sorts before `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Relevance {
    High,
    Medium,
}

impl fmt::Display for Relevance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => f.pad("high"),
            Self::Medium => f.pad("medium"),
        }
    }
}

/// Why a content-scan hit matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    RouteName,
    Content,
}
