//! Mapping from files on disk to index documents.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tantivy::TantivyDocument;

use crate::error::Result;
use crate::schema::FileSchema;

/// A file's content and identity, ready to be added to the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDocument {
    /// The file text. Invalid UTF-8 sequences are replaced.
    pub contents: String,
    /// The final path component.
    pub file_name: String,
    /// The canonical absolute path.
    pub full_path: String,
}

impl FileDocument {
    /// Read a file and build its document.
    ///
    /// `file_name` is the name as listed in its directory, so a symlink keeps
    /// its own name while `full_path` resolves to the target.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let canonical = fs::canonicalize(path)?;
        let bytes = fs::read(&canonical)?;

        Ok(FileDocument {
            contents: String::from_utf8_lossy(&bytes).into_owned(),
            file_name,
            full_path: canonical.to_string_lossy().into_owned(),
        })
    }

    /// Convert into a tantivy document for the given schema.
    pub fn to_tantivy(&self, schema: &FileSchema) -> TantivyDocument {
        let mut doc = TantivyDocument::default();
        doc.add_text(schema.contents, &self.contents);
        doc.add_text(schema.file_name, &self.file_name);
        doc.add_text(schema.full_path, &self.full_path);
        doc
    }
}
