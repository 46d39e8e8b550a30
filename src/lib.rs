//! layerchart-docs-mcp: MCP server for LayerChart documentation.
//!
//! Lets an agent discover, fetch and search the documentation pages and
//! component sources of the LayerChart charting library:
//! - Route ↔ raw-source URL mapping (pure, no I/O)
//! - Raw source retrieval from GitHub
//! - Page text extraction with script/style removed
//! - Search via GitHub code search or a local scan of page sources
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              MCP Server (rmcp)              │
//! │         JSON-RPC over stdin/stdout          │
//! └─────────────────┬───────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────┐
//! │               Tool Router                    │
//! │  list_docs, get_source, get_doc, search_docs│
//! └─────────────────┬───────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────┐
//! │               DocsService                    │
//! │   RouteResolver · HttpFetcher · GitHubApi   │
//! └───────┬─────────────────┬───────────────────┘
//!         │                 │
//!    ┌────▼─────┐     ┌─────▼──────┐
//!    │ raw host │     │ REST API   │
//!    │ + site   │     │ contents,  │
//!    │ (HTML)   │     │ code search│
//!    └──────────┘     └────────────┘
//! ```

pub mod config;
pub mod error;
pub mod fmt;
pub mod server;
pub mod services;
pub mod tools;
pub mod types;

pub use config::{DocsConfig, ListStrategy, SearchStrategy};
pub use error::{DocsError, ErrorPayload};
pub use services::DocsService;
pub use types::{Route, SourceVariant};
