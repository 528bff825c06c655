//! Command implementations for the docsift CLI.

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::filter::FileFilter;
use crate::indexer::Indexer;
use crate::searcher::Searcher;

/// Execute a CLI command.
pub fn execute_command(args: DocsiftArgs) -> Result<()> {
    match &args.command {
        Command::Index(index_args) => build_index(index_args, &args),
        Command::Search(search_args) => search_index(search_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
    }
}

/// Build a fresh index from a data directory.
fn build_index(args: &IndexArgs, cli_args: &DocsiftArgs) -> Result<()> {
    let human = cli_args.output_format == OutputFormat::Human && cli_args.verbosity() > 0;

    let filter = args.filter();
    match &filter {
        Some(ext) => info!(
            "Indexing {} into {} (extensions: {})",
            args.data_dir.display(),
            args.index_dir.display(),
            ext.extensions().collect::<Vec<_>>().join(", ")
        ),
        None => info!(
            "Indexing {} into {} (all files)",
            args.data_dir.display(),
            args.index_dir.display()
        ),
    }

    let mut indexer = Indexer::create(&args.index_dir, args.indexer_config())?;
    if human {
        println!("begin indexing...");
    }

    let report = indexer.index_with_progress(
        &args.data_dir,
        filter.as_ref().map(|f| f as &dyn FileFilter),
        |path| {
            if human {
                println!("indexing:  {}", path.display());
            }
        },
    )?;
    indexer.close()?;

    output_result(&report, cli_args)
}

/// Search the index.
fn search_index(args: &SearchArgs, cli_args: &DocsiftArgs) -> Result<()> {
    let searcher = Searcher::open_with_config(&args.index_dir, args.search_config())?;

    let results = if args.file_name {
        searcher.find_by_file_name(&args.query)?
    } else {
        searcher.search_default(&args.query)?
    };

    output_result(&results, cli_args)
}

/// Show index statistics.
fn show_stats(args: &StatsArgs, cli_args: &DocsiftArgs) -> Result<()> {
    let searcher = Searcher::open(&args.index_dir)?;
    output_result(&searcher.stats()?, cli_args)
}
