//! # docsift
//!
//! Index a directory of text files with [tantivy] and search it.
//!
//! ## Features
//!
//! - One document per file with `contents`, `fileName` and `fullPath` fields
//! - Extension and closure based file filters
//! - Free-text queries ranked by tantivy, plus exact file name lookup
//! - A small CLI (`docsift index`, `docsift search`, `docsift stats`)
//!
//! [tantivy]: https://docs.rs/tantivy

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod filter;
pub mod indexer;
pub mod schema;
pub mod searcher;

pub mod prelude {
    pub use crate::config::{IndexerConfig, SearchConfig};
    pub use crate::document::FileDocument;
    pub use crate::error::{DocsiftError, Result};
    pub use crate::filter::{ExtensionFilter, FileFilter};
    pub use crate::indexer::{IndexReport, Indexer};
    pub use crate::searcher::{IndexStats, SearchHit, SearchResults, Searcher};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
