//! Gene list input reader
//!
//! Reads the query gene list from a tab-separated file: the first column of
//! every record, with the first record skipped as a header.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Read the ordered gene identifier list from a tab-separated file
///
/// Takes the first field of every line, skips the header line
/// unconditionally and ignores blank lines. Order and duplicates are
/// preserved; a file with only a header yields an empty query.
pub fn read_query(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut query = Vec::new();
    for line in reader.lines().skip(1) {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let first = line.split('\t').next().unwrap_or_default();
        query.push(first.to_string());
    }

    debug!(path = %path.display(), genes = query.len(), "Read gene list");

    Ok(query)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_input(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_reads_first_column_in_order() {
        let file = write_input("Gene\tOther\nENSG1\tx\nENSG2\ty\nENSG3\tz\n");
        let query = read_query(file.path()).unwrap();
        assert_eq!(query, vec!["ENSG1", "ENSG2", "ENSG3"]);
    }

    #[test]
    fn test_skips_header_unconditionally() {
        // First line is dropped even if it looks like data
        let file = write_input("ENSG0\nENSG1\n");
        let query = read_query(file.path()).unwrap();
        assert_eq!(query, vec!["ENSG1"]);
    }

    #[test]
    fn test_single_column_file() {
        let file = write_input("Gene\nENSG1\nENSG2\n");
        let query = read_query(file.path()).unwrap();
        assert_eq!(query, vec!["ENSG1", "ENSG2"]);
    }

    #[test]
    fn test_header_only_yields_empty_query() {
        let file = write_input("Gene\tOther\n");
        let query = read_query(file.path()).unwrap();
        assert!(query.is_empty());
    }

    #[test]
    fn test_duplicates_preserved() {
        let file = write_input("Gene\nENSG1\nENSG1\n");
        let query = read_query(file.path()).unwrap();
        assert_eq!(query, vec!["ENSG1", "ENSG1"]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = read_query(Path::new("/nonexistent/genes.tsv"));
        assert!(result.is_err());
    }
}
