//! Querying an index built by [`crate::indexer::Indexer`].
//!
//! Query text is parsed by tantivy's query parser, so the usual syntax
//! applies: `foo bar` matches either term, `+foo -bar` requires and excludes,
//! `"foo bar"` is a phrase, and `fileName:notes.txt` targets another field.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::debug;
use serde::{Deserialize, Serialize};
use tantivy::collector::{Count, TopDocs};
use tantivy::query::{Query, QueryParser, TermQuery};
use tantivy::schema::{Field, IndexRecordOption, Value};
use tantivy::{Index, IndexReader, ReloadPolicy, TantivyDocument, Term};

use crate::config::SearchConfig;
use crate::error::{DocsiftError, Result};
use crate::schema::FileSchema;

/// A single ranked match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub score: f32,
    pub full_path: String,
    pub file_name: String,
}

/// Result of one query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub field: String,
    /// Number of matching documents, which may exceed `hits.len()`.
    pub total_hits: usize,
    pub hits: Vec<SearchHit>,
    pub duration_ms: u64,
}

/// Index statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexStats {
    pub path: String,
    pub total_documents: u64,
    pub number_of_segments: usize,
    pub index_size_bytes: u64,
}

/// Read-only handle on an index directory.
pub struct Searcher {
    path: PathBuf,
    index: Index,
    reader: IndexReader,
    schema: FileSchema,
    config: SearchConfig,
}

impl Searcher {
    /// Open the index at `index_dir` with the default configuration.
    pub fn open<P: AsRef<Path>>(index_dir: P) -> Result<Self> {
        Self::open_with_config(index_dir, SearchConfig::default())
    }

    /// Open the index at `index_dir`.
    pub fn open_with_config<P: AsRef<Path>>(index_dir: P, config: SearchConfig) -> Result<Self> {
        let path = index_dir.as_ref();
        if !index_exists(path) {
            return Err(DocsiftError::index_not_found(path));
        }

        let index = Index::open_in_dir(path)?;
        let schema = FileSchema::from_schema(index.schema())?;
        // Validate the configured default field up front.
        schema.field(&config.default_field)?;

        let reader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()?;

        Ok(Searcher {
            path: path.to_path_buf(),
            index,
            reader,
            schema,
            config,
        })
    }

    /// Run a free-text query against the default field, returning at most `limit` hits.
    pub fn search(&self, query: &str, limit: usize) -> Result<SearchResults> {
        self.search_field(&self.config.default_field, query, limit)
    }

    /// Run a free-text query against the default field with the configured limit.
    pub fn search_default(&self, query: &str) -> Result<SearchResults> {
        self.search(query, self.config.default_limit)
    }

    /// Run a free-text query against `field`.
    pub fn search_field(&self, field: &str, query: &str, limit: usize) -> Result<SearchResults> {
        let target = self.schema.field(field)?;
        let parser = QueryParser::for_index(&self.index, vec![target]);
        let parsed = parser.parse_query(query)?;

        self.execute(parsed.as_ref(), query, field, limit)
    }

    /// Look up documents whose file name is exactly `name`.
    pub fn find_by_file_name(&self, name: &str) -> Result<SearchResults> {
        self.find_exact(self.schema.file_name, name)
    }

    /// Look up the document for an exact canonical path.
    pub fn find_by_full_path(&self, path: &str) -> Result<SearchResults> {
        self.find_exact(self.schema.full_path, path)
    }

    /// Document count, segment count and on-disk size of the index.
    pub fn stats(&self) -> Result<IndexStats> {
        let searcher = self.reader.searcher();

        let mut index_size_bytes = 0;
        for entry in fs::read_dir(&self.path)? {
            let metadata = entry?.metadata()?;
            if metadata.is_file() {
                index_size_bytes += metadata.len();
            }
        }

        Ok(IndexStats {
            path: self.path.to_string_lossy().into_owned(),
            total_documents: searcher.num_docs(),
            number_of_segments: searcher.segment_readers().len(),
            index_size_bytes,
        })
    }

    fn find_exact(&self, field: Field, value: &str) -> Result<SearchResults> {
        let term = Term::from_field_text(field, value);
        let query = TermQuery::new(term, IndexRecordOption::Basic);
        let field_name = self.schema.schema().get_field_name(field).to_string();

        // An exact match can hit at most every document.
        let limit = self.reader.searcher().num_docs().max(1) as usize;
        self.execute(&query, value, &field_name, limit)
    }

    fn execute(
        &self,
        query: &dyn Query,
        query_text: &str,
        field: &str,
        limit: usize,
    ) -> Result<SearchResults> {
        if limit == 0 {
            return Err(DocsiftError::invalid_argument("limit must be at least 1"));
        }

        let searcher = self.reader.searcher();
        let start = Instant::now();
        let (top_docs, total_hits) = searcher.search(query, &(TopDocs::with_limit(limit), Count))?;
        let duration_ms = start.elapsed().as_millis() as u64;

        let mut hits = Vec::with_capacity(top_docs.len());
        for (score, address) in top_docs {
            let doc: TantivyDocument = searcher.doc(address)?;
            hits.push(SearchHit {
                score,
                full_path: stored_text(&doc, self.schema.full_path),
                file_name: stored_text(&doc, self.schema.file_name),
            });
        }

        debug!("Query '{query_text}' on {field}: {total_hits} hits in {duration_ms}ms");

        Ok(SearchResults {
            query: query_text.to_string(),
            field: field.to_string(),
            total_hits,
            hits,
            duration_ms,
        })
    }
}

/// Whether `path` holds an index.
pub fn index_exists(path: &Path) -> bool {
    path.join("meta.json").exists()
}

fn stored_text(doc: &TantivyDocument, field: Field) -> String {
    doc.get_first(field)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}
