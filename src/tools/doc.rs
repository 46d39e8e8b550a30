//! Documentation text tool: page source with markup stripped.

use crate::error::DocsError;
use crate::services::{extract, DocsService, Upstream};
use crate::types::SourceVariant;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input for the doc tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DocInput {
    /// The documentation route (e.g., /docs/components/BarChart)
    pub route: String,
    /// Also fetch the rendered website page and include its text (default: false)
    #[serde(default)]
    pub include_rendered: bool,
}

/// Output for the doc tool.
#[derive(Debug, Serialize)]
pub struct DocOutput {
    pub route: String,
    /// Resolved page-source URL
    pub github_url: String,
    /// Page source with script/style removed and whitespace collapsed
    pub text: String,
    /// Raw page source
    pub code: String,
    /// Text of the rendered website page, when requested and reachable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered_text: Option<String>,
}

/// Executes the doc tool.
///
/// # Errors
///
/// `UnmappableRoute` when no usage URL exists, otherwise the page-source
/// fetch error. A failed rendered-page fetch is not an error.
pub async fn execute_doc(service: &DocsService, input: DocInput) -> Result<DocOutput, DocsError> {
    let resolver = service.resolver();
    let route = resolver.normalize(&input.route);
    let url = resolver
        .resolve_route(&route, SourceVariant::Usage)
        .ok_or_else(|| DocsError::UnmappableRoute {
            route: input.route.clone(),
            variant: SourceVariant::Usage,
        })?;

    let code = service.http().get_text(&url, Upstream::Plain).await?;
    let text = extract::extract_text(&code);

    let rendered_text = if input.include_rendered {
        let site_url = service.config().site_url(route.as_str());
        match service.http().get_text(&site_url, Upstream::Plain).await {
            Ok(html) => Some(extract::extract_main_text(&html)).filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!(url = %site_url, code = e.code(), "rendered page unavailable: {e}");
                None
            }
        }
    } else {
        None
    };

    Ok(DocOutput {
        route: input.route,
        github_url: url,
        text,
        code,
        rendered_text,
    })
}
