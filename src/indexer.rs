//! Building an index from a directory of files.
//!
//! Creating an [`Indexer`] wipes the index directory and starts a fresh
//! index there. [`Indexer::index`] then walks a data directory, adds one
//! document per eligible file and commits.
//!
//! # Examples
//!
//! ```no_run
//! use docsift::config::IndexerConfig;
//! use docsift::filter::ExtensionFilter;
//! use docsift::indexer::Indexer;
//!
//! let mut indexer = Indexer::create("/tmp/index", IndexerConfig::default())?;
//! let report = indexer.index("/tmp/docs", Some(&ExtensionFilter::text()))?;
//! println!("total index {} files", report.num_docs);
//! indexer.close()?;
//! # Ok::<(), docsift::error::DocsiftError>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use tantivy::{Index, IndexWriter, ReloadPolicy, TantivyDocument};
use walkdir::WalkDir;

use crate::config::IndexerConfig;
use crate::document::FileDocument;
use crate::error::{DocsiftError, Result};
use crate::filter::{FileFilter, is_candidate, is_hidden};
use crate::schema::FileSchema;

/// Outcome of one indexing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexReport {
    /// Canonical paths of the files added, in the order they were indexed.
    pub indexed: Vec<String>,
    /// Documents in the index after the commit.
    pub num_docs: u64,
    /// Wall-clock time spent listing, reading, adding and committing.
    pub duration_ms: u64,
}

/// Writes file documents into a tantivy index.
pub struct Indexer {
    index: Index,
    schema: FileSchema,
    writer: Option<IndexWriter<TantivyDocument>>,
    config: IndexerConfig,
}

impl Indexer {
    /// Create a new, empty index at `index_dir`.
    ///
    /// Every regular file directly inside `index_dir` is deleted first.
    /// Subdirectories are left in place.
    pub fn create<P: AsRef<Path>>(index_dir: P, config: IndexerConfig) -> Result<Self> {
        let index_dir = index_dir.as_ref();

        let removed = clear_directory(index_dir)?;
        if removed > 0 {
            info!("Removed {removed} existing files from {}", index_dir.display());
        }
        fs::create_dir_all(index_dir)?;

        let schema = FileSchema::build();
        let index = Index::create_in_dir(index_dir, schema.schema().clone())?;
        let writer = index.writer_with_num_threads(1, config.writer_memory_bytes)?;

        Ok(Indexer {
            index,
            schema,
            writer: Some(writer),
            config,
        })
    }

    /// Index every eligible file in `data_dir` and commit.
    pub fn index<P: AsRef<Path>>(
        &mut self,
        data_dir: P,
        filter: Option<&dyn FileFilter>,
    ) -> Result<IndexReport> {
        self.index_with_progress(data_dir, filter, |_| {})
    }

    /// Like [`Indexer::index`], calling `on_file` with each canonical path
    /// just before it is added.
    pub fn index_with_progress<P, F>(
        &mut self,
        data_dir: P,
        filter: Option<&dyn FileFilter>,
        mut on_file: F,
    ) -> Result<IndexReport>
    where
        P: AsRef<Path>,
        F: FnMut(&Path),
    {
        let data_dir = data_dir.as_ref();
        if !data_dir.is_dir() {
            return Err(DocsiftError::invalid_argument(format!(
                "data directory {} does not exist or is not a directory",
                data_dir.display()
            )));
        }

        let start = Instant::now();
        let files = list_files(data_dir, self.config.recursive)?;

        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| DocsiftError::invalid_argument("index writer already closed"))?;
        let mut indexed = Vec::new();
        for path in files {
            if !is_candidate(&path, filter) {
                debug!("Skipping {}", path.display());
                continue;
            }

            let canonical = fs::canonicalize(&path)?;
            on_file(&canonical);
            debug!("indexing: {}", canonical.display());

            let document = FileDocument::from_path(&path)?;
            writer.add_document(document.to_tantivy(&self.schema))?;
            indexed.push(document.full_path);
        }

        writer.commit()?;
        let num_docs = self.num_docs()?;
        let duration_ms = start.elapsed().as_millis() as u64;
        info!(
            "Committed {} files from {} ({num_docs} documents in index) in {duration_ms}ms",
            indexed.len(),
            data_dir.display()
        );

        Ok(IndexReport {
            indexed,
            num_docs,
            duration_ms,
        })
    }

    /// Number of documents visible in the last commit.
    pub fn num_docs(&self) -> Result<u64> {
        let reader = self
            .index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()?;
        Ok(reader.searcher().num_docs())
    }

    /// Wait for pending merges and release the writer lock.
    ///
    /// Uncommitted documents are discarded.
    pub fn close(mut self) -> Result<()> {
        if let Some(writer) = self.writer.take() {
            writer.wait_merging_threads()?;
        }
        Ok(())
    }
}

/// Delete the regular files directly inside `dir`, returning how many were removed.
///
/// A missing directory is not an error.
pub fn clear_directory(dir: &Path) -> Result<usize> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e.into()),
    };

    let mut removed = 0;
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            warn!("Leaving subdirectory {} in index directory", entry.path().display());
            continue;
        }
        fs::remove_file(entry.path())?;
        removed += 1;
    }
    Ok(removed)
}

/// List the entries of `dir` in file name order, descending into
/// subdirectories when `recursive` is set.
///
/// Symlinks are listed but never followed, so a link back to an ancestor
/// cannot make the walk revisit a directory. Hidden subdirectories are pruned.
fn list_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let max_depth = if recursive { usize::MAX } else { 1 };
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0 || !(entry.file_type().is_dir() && is_hidden(entry.path()))
        });

    let mut paths = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        paths.push(entry.into_path());
    }
    Ok(paths)
}
