//! Raw source retrieval tool.

use crate::error::DocsError;
use crate::services::{DocsService, Upstream};
use crate::types::SourceVariant;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Language tag reported for every fetched source.
const SOURCE_LANGUAGE: &str = "svelte";

/// Input for the source tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SourceInput {
    /// The documentation route (e.g., /docs/components/BarChart)
    pub route: String,
    /// Type of source to fetch: 'usage' for the docs page code,
    /// 'implementation' for the component source code
    #[serde(rename = "type")]
    pub variant: SourceVariant,
}

/// Output for the source tool.
#[derive(Debug, Serialize)]
pub struct SourceOutput {
    pub route: String,
    #[serde(rename = "type")]
    pub variant: SourceVariant,
    /// Resolved raw-source URL
    pub github_url: String,
    /// Response body, verbatim
    pub content: String,
    pub language: &'static str,
}

/// Executes the source tool: resolve, GET once, return the body untouched.
///
/// # Errors
///
/// `UnmappableRoute` when the route has no URL for this variant, otherwise
/// the fetch error (`NotFound` for 404, `UpstreamStatus`, `Network`).
pub async fn execute_source(
    service: &DocsService,
    input: SourceInput,
) -> Result<SourceOutput, DocsError> {
    let url = service
        .resolver()
        .resolve(&input.route, input.variant)
        .ok_or_else(|| DocsError::UnmappableRoute {
            route: input.route.clone(),
            variant: input.variant,
        })?;

    let content = service.http().get_text(&url, Upstream::Plain).await?;

    Ok(SourceOutput {
        route: input.route,
        variant: input.variant,
        github_url: url,
        content,
        language: SOURCE_LANGUAGE,
    })
}
