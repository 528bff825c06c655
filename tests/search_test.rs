//! Integration tests for querying a built index

use std::fs;

use docsift::prelude::*;
use tempfile::TempDir;

/// Index the given files and return the data and index directories.
fn indexed(files: &[(&str, &str)]) -> Result<(TempDir, TempDir)> {
    let data_dir = TempDir::new().unwrap();
    let index_dir = TempDir::new().unwrap();
    for (name, contents) in files {
        fs::write(data_dir.path().join(name), contents).unwrap();
    }

    let mut indexer = Indexer::create(index_dir.path(), IndexerConfig::default())?;
    indexer.index(data_dir.path(), Some(&ExtensionFilter::text()))?;
    indexer.close()?;

    Ok((data_dir, index_dir))
}

#[test]
fn test_hits_carry_stored_paths() -> Result<()> {
    let (data_dir, index_dir) = indexed(&[
        ("license.txt", "Each Contributor hereby grants"),
        ("readme.txt", "How to build the project"),
    ])?;

    let searcher = Searcher::open(index_dir.path())?;
    let results = searcher.search("Contributor", 10)?;

    assert_eq!(results.total_hits, 1);
    let expected = fs::canonicalize(data_dir.path().join("license.txt")).unwrap();
    assert_eq!(results.hits[0].full_path, expected.to_string_lossy());
    assert_eq!(results.hits[0].file_name, "license.txt");
    assert!(results.hits[0].score > 0.0);

    Ok(())
}

#[test]
fn test_term_count_matches_total_hits() -> Result<()> {
    let (_data, index_dir) = indexed(&[
        ("a.txt", "apple banana"),
        ("b.txt", "banana cherry"),
        ("c.txt", "cherry apple banana"),
        ("d.txt", "durian"),
    ])?;

    let searcher = Searcher::open(index_dir.path())?;
    assert_eq!(searcher.search("banana", 10)?.total_hits, 3);
    assert_eq!(searcher.search("apple", 10)?.total_hits, 2);
    assert_eq!(searcher.search("durian", 10)?.total_hits, 1);
    assert_eq!(searcher.search("elderberry", 10)?.total_hits, 0);

    Ok(())
}

#[test]
fn test_ranking_prefers_denser_matches() -> Result<()> {
    let (_data, index_dir) = indexed(&[
        ("dense.txt", "rust rust rust rust"),
        ("sparse.txt", "rust is one word among many other unrelated words here"),
    ])?;

    let searcher = Searcher::open(index_dir.path())?;
    let results = searcher.search("rust", 10)?;
    assert_eq!(results.hits.len(), 2);
    assert_eq!(results.hits[0].file_name, "dense.txt");
    assert!(results.hits[0].score >= results.hits[1].score);

    Ok(())
}

#[test]
fn test_query_syntax() -> Result<()> {
    let (_data, index_dir) = indexed(&[
        ("a.txt", "quick brown fox"),
        ("b.txt", "quick red fox"),
        ("c.txt", "brown quick dog"),
    ])?;

    let searcher = Searcher::open(index_dir.path())?;
    assert_eq!(searcher.search("+quick -fox", 10)?.total_hits, 1);
    assert_eq!(searcher.search("\"quick brown\"", 10)?.total_hits, 1);
    assert_eq!(searcher.search("fox dog", 10)?.total_hits, 3);

    Ok(())
}

#[test]
fn test_exact_file_name_lookup() -> Result<()> {
    let (_data, index_dir) = indexed(&[("Report 2024.txt", "annual"), ("other.txt", "misc")])?;

    let searcher = Searcher::open(index_dir.path())?;
    let results = searcher.find_by_file_name("Report 2024.txt")?;
    assert_eq!(results.total_hits, 1);
    assert_eq!(results.field, "fileName");

    // The field is not analyzed: case and partial names do not match
    assert_eq!(searcher.find_by_file_name("report 2024.txt")?.total_hits, 0);
    assert_eq!(searcher.find_by_file_name("Report")?.total_hits, 0);

    Ok(())
}

#[test]
fn test_search_default_uses_config() -> Result<()> {
    let files: Vec<(String, String)> = (0..5)
        .map(|i| (format!("f{i}.txt"), "common".to_string()))
        .collect();
    let refs: Vec<(&str, &str)> = files
        .iter()
        .map(|(n, c)| (n.as_str(), c.as_str()))
        .collect();
    let (_data, index_dir) = indexed(&refs)?;

    let config = SearchConfig::default().with_default_limit(3);
    let searcher = Searcher::open_with_config(index_dir.path(), config)?;
    let results = searcher.search_default("common")?;
    assert_eq!(results.total_hits, 5);
    assert_eq!(results.hits.len(), 3);

    Ok(())
}

#[test]
fn test_invalid_default_field_rejected() -> Result<()> {
    let (_data, index_dir) = indexed(&[("a.txt", "x")])?;
    let config = SearchConfig::default().with_default_field("title");
    assert!(matches!(
        Searcher::open_with_config(index_dir.path(), config),
        Err(DocsiftError::Schema(_))
    ));
    Ok(())
}

#[test]
fn test_missing_index() {
    let dir = TempDir::new().unwrap();
    let err = Searcher::open(dir.path().join("absent")).err().unwrap();
    assert!(matches!(err, DocsiftError::IndexNotFound(_)));
}
