//! Configuration for indexing and searching.

use serde::{Deserialize, Serialize};

use crate::schema::CONTENTS;

/// Smallest writer budget tantivy accepts for a single indexing thread.
pub const MIN_WRITER_MEMORY: usize = 15_000_000;

/// Configuration for building an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexerConfig {
    /// Memory budget for the index writer, in bytes.
    pub writer_memory_bytes: usize,

    /// Descend into subdirectories of the data directory.
    pub recursive: bool,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            writer_memory_bytes: 50_000_000, // 50MB
            recursive: false,
        }
    }
}

impl IndexerConfig {
    /// Set the writer memory budget. Values below [`MIN_WRITER_MEMORY`] are raised to it.
    pub fn with_writer_memory(mut self, bytes: usize) -> Self {
        self.writer_memory_bytes = bytes.max(MIN_WRITER_MEMORY);
        self
    }

    /// Enable or disable recursive traversal.
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}

/// Configuration for querying an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of ranked hits returned when no limit is given.
    pub default_limit: usize,

    /// Field that free-text queries are parsed against.
    pub default_field: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: 10,
            default_field: CONTENTS.to_string(),
        }
    }
}

impl SearchConfig {
    /// Set the default number of hits.
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    /// Set the default query field.
    pub fn with_default_field<S: Into<String>>(mut self, field: S) -> Self {
        self.default_field = field.into();
        self
    }
}
