//! Index schema for file documents.
//!
//! Every indexed file becomes one document with three fields:
//!
//! - `contents` - the tokenized file text, indexed with positions but not stored
//! - `fileName` - the bare file name, indexed as a single token and stored
//! - `fullPath` - the canonical path, indexed as a single token and stored

use tantivy::schema::{Field, IndexRecordOption, STORED, STRING, Schema, TextFieldIndexing, TextOptions};

use crate::error::{DocsiftError, Result};

/// Name of the analyzed content field.
pub const CONTENTS: &str = "contents";

/// Name of the stored, non-analyzed file name field.
pub const FILE_NAME: &str = "fileName";

/// Name of the stored, non-analyzed canonical path field.
pub const FULL_PATH: &str = "fullPath";

/// All field names, in schema order.
pub const FIELD_NAMES: [&str; 3] = [CONTENTS, FILE_NAME, FULL_PATH];

/// The schema together with resolved field handles.
#[derive(Debug, Clone)]
pub struct FileSchema {
    schema: Schema,
    pub contents: Field,
    pub file_name: Field,
    pub full_path: Field,
}

impl FileSchema {
    /// Build a fresh schema for a new index.
    pub fn build() -> Self {
        let mut builder = Schema::builder();

        let contents_indexing = TextFieldIndexing::default()
            .set_tokenizer("default")
            .set_index_option(IndexRecordOption::WithFreqsAndPositions);
        let contents = builder.add_text_field(
            CONTENTS,
            TextOptions::default().set_indexing_options(contents_indexing),
        );
        let file_name = builder.add_text_field(FILE_NAME, STRING | STORED);
        let full_path = builder.add_text_field(FULL_PATH, STRING | STORED);

        FileSchema {
            schema: builder.build(),
            contents,
            file_name,
            full_path,
        }
    }

    /// Resolve the field handles from the schema of an existing index.
    pub fn from_schema(schema: Schema) -> Result<Self> {
        let lookup = |name: &str| {
            schema
                .get_field(name)
                .map_err(|_| DocsiftError::schema(format!("index has no field '{name}'")))
        };

        Ok(FileSchema {
            contents: lookup(CONTENTS)?,
            file_name: lookup(FILE_NAME)?,
            full_path: lookup(FULL_PATH)?,
            schema,
        })
    }

    /// Resolve a field handle by name.
    pub fn field(&self, name: &str) -> Result<Field> {
        match name {
            CONTENTS => Ok(self.contents),
            FILE_NAME => Ok(self.file_name),
            FULL_PATH => Ok(self.full_path),
            other => Err(DocsiftError::schema(format!(
                "unknown field '{other}', expected one of {}",
                FIELD_NAMES.join(", ")
            ))),
        }
    }

    /// The underlying tantivy schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}
