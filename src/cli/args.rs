//! Command line argument parsing for the docsift CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{IndexerConfig, SearchConfig};
use crate::filter::ExtensionFilter;
use crate::schema::CONTENTS;

/// docsift - index a directory of text files and search it
#[derive(Parser, Debug, Clone)]
#[command(name = "docsift")]
#[command(about = "Index a directory of text files and search it")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct DocsiftArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl DocsiftArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build a fresh index from the files in a directory
    Index(IndexArgs),

    /// Search an index
    Search(SearchArgs),

    /// Show index statistics
    Stats(StatsArgs),
}

/// Arguments for building an index
#[derive(Parser, Debug, Clone)]
pub struct IndexArgs {
    /// Directory holding the files to index
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Index directory. Existing files in it are deleted.
    #[arg(value_name = "INDEX_DIR")]
    pub index_dir: PathBuf,

    /// File extensions to index (repeatable)
    #[arg(short, long = "ext", default_value = "txt", value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Index every readable, non-hidden file regardless of extension
    #[arg(long, conflicts_with = "extensions")]
    pub all_files: bool,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Memory budget for the index writer, in bytes
    #[arg(long, value_name = "BYTES", env = "DOCSIFT_WRITER_MEMORY")]
    pub writer_memory: Option<usize>,
}

impl IndexArgs {
    /// Build the indexer configuration from the flags.
    pub fn indexer_config(&self) -> IndexerConfig {
        let config = IndexerConfig::default().with_recursive(self.recursive);
        match self.writer_memory {
            Some(bytes) => config.with_writer_memory(bytes),
            None => config,
        }
    }

    /// The extension filter, or `None` when every file should be indexed.
    pub fn filter(&self) -> Option<ExtensionFilter> {
        if self.all_files {
            None
        } else {
            Some(ExtensionFilter::new(&self.extensions))
        }
    }
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Path to the index directory
    #[arg(value_name = "INDEX_DIR")]
    pub index_dir: PathBuf,

    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Field to parse the query against
    #[arg(long, default_value = CONTENTS)]
    pub field: String,

    /// Maximum number of results to return
    #[arg(short, long, default_value = "10")]
    pub limit: usize,

    /// Treat the query as an exact file name instead of free text.
    /// Every matching document is returned, so `--limit` does not apply.
    #[arg(long, conflicts_with_all = ["field", "limit"])]
    pub file_name: bool,
}

impl SearchArgs {
    /// Build the search configuration from the flags.
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::default()
            .with_default_field(self.field.clone())
            .with_default_limit(self.limit)
    }
}

/// Arguments for index statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the index directory
    #[arg(value_name = "INDEX_DIR")]
    pub index_dir: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
