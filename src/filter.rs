//! File selection for indexing.
//!
//! [`is_candidate`] applies the fixed eligibility rules (readable, regular,
//! not hidden); a [`FileFilter`] narrows the selection further.

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::path::Path;

/// Decides whether a file should be indexed.
pub trait FileFilter {
    /// Return true to index the file at `path`.
    fn accept(&self, path: &Path) -> bool;
}

impl<F> FileFilter for F
where
    F: Fn(&Path) -> bool,
{
    fn accept(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Accepts files whose name ends with one of a set of extensions.
///
/// Matching is case-insensitive, so `README.TXT` passes a `txt` filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: BTreeSet<String>,
}

impl ExtensionFilter {
    /// Create a filter from extensions given with or without the leading dot.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        ExtensionFilter { extensions }
    }

    /// The plain-text filter: `.txt` files only.
    pub fn text() -> Self {
        Self::new(["txt"])
    }

    /// The normalized extensions this filter accepts.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

impl FileFilter for ExtensionFilter {
    fn accept(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy().to_lowercase();
        self.extensions
            .iter()
            .any(|ext| name.len() > ext.len() && name.ends_with(&format!(".{ext}")))
    }
}

/// Whether the entry's name marks it hidden.
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

/// Whether the file can be opened for reading.
pub fn is_readable(path: &Path) -> bool {
    File::open(path).is_ok()
}

/// Check whether `path` should be indexed.
///
/// The entry must exist, be readable, not be a directory, not be hidden,
/// and pass `filter` when one is given.
pub fn is_candidate(path: &Path, filter: Option<&dyn FileFilter>) -> bool {
    let Ok(metadata) = fs::metadata(path) else {
        return false;
    };

    !metadata.is_dir()
        && !is_hidden(path)
        && is_readable(path)
        && filter.is_none_or(|f| f.accept(path))
}
