//! Error types for layerchart-docs-mcp.
//!
//! Uses thiserror for ergonomic error handling. Every tool error is
//! recovered at the tool boundary and rendered as an [`ErrorPayload`],
//! never surfaced to the agent as a protocol-level failure.

use crate::types::SourceVariant;
use serde::Serialize;
use thiserror::Error;

/// Top-level error for every tool operation.
#[derive(Error, Debug)]
pub enum DocsError {
    #[error("Could not map route to a GitHub URL")]
    UnmappableRoute {
        route: String,
        variant: SourceVariant,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Resource not found: {url}")]
    NotFound { url: String },

    #[error("Upstream returned status {status}")]
    UpstreamStatus {
        url: String,
        status: u16,
        details: Option<String>,
    },

    #[error("Request failed: {details}")]
    Network { url: String, details: String },

    #[error("Malformed response body: {details}")]
    Decode { url: String, details: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DocsError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnmappableRoute { .. } => "UNMAPPABLE_ROUTE",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::UpstreamStatus { .. } => "UPSTREAM_STATUS",
            Self::Network { .. } => "NETWORK_ERROR",
            Self::Decode { .. } => "DECODE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// HTTP status carried by this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::UpstreamStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true when the upstream reported the resource as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Renders the structured error shape returned to callers.
    #[must_use]
    pub fn payload(&self) -> ErrorPayload {
        let mut payload = ErrorPayload {
            error: self.to_string(),
            code: self.code(),
            details: None,
            route: None,
            variant: None,
            url: None,
            status: self.status(),
        };

        match self {
            Self::UnmappableRoute { route, variant } => {
                payload.route = Some(route.clone());
                payload.variant = Some(*variant);
            }
            Self::InvalidInput(_) | Self::Internal(_) => {}
            Self::NotFound { url } => payload.url = Some(url.clone()),
            Self::UpstreamStatus { url, details, .. } => {
                payload.url = Some(url.clone());
                payload.details = details.clone();
            }
            Self::Network { url, details } | Self::Decode { url, details } => {
                payload.url = Some(url.clone());
                payload.details = Some(details.clone());
            }
        }

        payload
    }
}

/// Structured error returned in place of a tool's success output.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    /// Human-readable error summary
    pub error: String,
    /// Machine-readable error code
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub variant: Option<SourceVariant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

// Conversion to rmcp protocol errors (used only for serialization failures)
impl From<DocsError> for rmcp::ErrorData {
    fn from(err: DocsError) -> Self {
        rmcp::ErrorData::internal_error(err.to_string(), None)
    }
}
