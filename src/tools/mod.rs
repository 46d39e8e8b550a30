//! MCP tool implementations.

mod doc;
mod list;
mod search;
mod source;

// doc
pub use doc::{execute_doc, DocInput, DocOutput};

// list
pub use list::{execute_list, list_from_directories, list_from_navigation, ListOutput};

// search
pub use search::{
    code_search, content_scan, execute_search, CodeSearchHit, CodeSearchOutput,
    ContentScanOutput, ScanHit, SearchInput, SearchOutput, CODE_SEARCH_LIMIT, CONTENT_SCAN_LIMIT,
};

// source
pub use source::{execute_source, SourceInput, SourceOutput};
