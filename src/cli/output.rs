//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{DocsiftArgs, OutputFormat};
use crate::error::Result;
use crate::indexer::IndexReport;
use crate::searcher::{IndexStats, SearchResults};

/// Results that know how to print themselves for a human reader.
pub trait HumanOutput {
    /// Render the result as the lines printed in human mode.
    fn human_lines(&self, verbosity: u8) -> Vec<String>;
}

impl HumanOutput for IndexReport {
    fn human_lines(&self, verbosity: u8) -> Vec<String> {
        // Quiet mode silences the progress lines and the summary alike.
        if verbosity == 0 {
            return Vec::new();
        }
        vec![format!(
            "total index {} files, and elapse times: {}ms",
            self.num_docs, self.duration_ms
        )]
    }
}

impl HumanOutput for SearchResults {
    fn human_lines(&self, verbosity: u8) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.hits.len() + 1);
        lines.push(format!(
            "matched {} documents for keyword {}, took {}ms",
            self.total_hits, self.query, self.duration_ms
        ));
        for hit in &self.hits {
            if verbosity > 1 {
                lines.push(format!("{:.3}\t{}", hit.score, hit.full_path));
            } else {
                lines.push(hit.full_path.clone());
            }
        }
        lines
    }
}

impl HumanOutput for IndexStats {
    fn human_lines(&self, _verbosity: u8) -> Vec<String> {
        vec![
            "Index Statistics:".to_string(),
            "════════════════".to_string(),
            format!("Path: {}", self.path),
            format!("Total documents: {}", self.total_documents),
            format!("Number of segments: {}", self.number_of_segments),
            format!("Index size: {}", format_bytes(self.index_size_bytes)),
        ]
    }
}

/// Output a result in the selected format.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &DocsiftArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            for line in result.human_lines(args.verbosity()) {
                println!("{line}");
            }
        }
        OutputFormat::Json => println!("{}", to_json(result, args.pretty)?),
    }
    Ok(())
}

/// Serialize a result as JSON.
pub fn to_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

/// Format bytes into human-readable format.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    let unit = UNITS[unit_index];
    if unit_index == 0 {
        format!("{bytes} {unit}")
    } else {
        format!("{size:.1} {unit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::searcher::SearchHit;

    fn sample_results() -> SearchResults {
        SearchResults {
            query: "Contributor".to_string(),
            field: "contents".to_string(),
            total_hits: 3,
            hits: vec![
                SearchHit {
                    score: 1.5,
                    full_path: "/docs/a.txt".to_string(),
                    file_name: "a.txt".to_string(),
                },
                SearchHit {
                    score: 0.75,
                    full_path: "/docs/b.txt".to_string(),
                    file_name: "b.txt".to_string(),
                },
            ],
            duration_ms: 4,
        }
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1024), "1.0 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1048576), "1.0 MB");
        assert_eq!(format_bytes(1073741824), "1.0 GB");
    }

    #[test]
    fn test_search_results_lines() {
        let lines = sample_results().human_lines(1);
        assert_eq!(
            lines,
            vec![
                "matched 3 documents for keyword Contributor, took 4ms",
                "/docs/a.txt",
                "/docs/b.txt",
            ]
        );

        let verbose = sample_results().human_lines(2);
        assert_eq!(verbose[1], "1.500\t/docs/a.txt");
    }

    #[test]
    fn test_index_report_line() {
        let report = IndexReport {
            indexed: vec!["/docs/a.txt".to_string()],
            num_docs: 1,
            duration_ms: 12,
        };
        assert_eq!(
            report.human_lines(1),
            vec!["total index 1 files, and elapse times: 12ms"]
        );
        assert!(report.human_lines(0).is_empty());
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&sample_results(), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_hits"], 3);
        assert_eq!(value["hits"][1]["file_name"], "b.txt");
    }
}
