//! Error types for docsift.
//!
//! All failures are represented by the [`DocsiftError`] enum. Errors coming
//! from the search library, the filesystem and JSON output are converted
//! automatically, so library code can propagate them with `?`.
//!
//! # Examples
//!
//! ```
//! use docsift::error::{DocsiftError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(DocsiftError::invalid_argument("limit must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use tantivy::TantivyError;
use tantivy::query::QueryParserError;
use thiserror::Error;

/// The main error type for docsift operations.
#[derive(Error, Debug)]
pub enum DocsiftError {
    /// I/O errors (listing directories, reading files, clearing the index)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors while walking the data directory
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Errors raised by the search library while writing or reading the index
    #[error("Index error: {0}")]
    Tantivy(#[from] TantivyError),

    /// Malformed query strings
    #[error("Query error: {0}")]
    QueryParse(#[from] QueryParserError),

    /// The index does not carry the fields docsift expects
    #[error("Schema error: {0}")]
    Schema(String),

    /// No index was found at the given location
    #[error("No index found at {}", .0.display())]
    IndexNotFound(PathBuf),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with DocsiftError.
pub type Result<T> = std::result::Result<T, DocsiftError>;

impl DocsiftError {
    /// Create a new schema error.
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        DocsiftError::Schema(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        DocsiftError::InvalidArgument(msg.into())
    }

    /// Create a new index-not-found error.
    pub fn index_not_found<P: Into<PathBuf>>(path: P) -> Self {
        DocsiftError::IndexNotFound(path.into())
    }
}
