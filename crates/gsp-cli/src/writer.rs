//! Tab-separated result writer
//!
//! Serializes an [`EnrichmentTable`] to disk: a header row of column names
//! behind an unnamed index column, then one row per result with its 0-based
//! position. Any existing file at the path is overwritten.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::error::Result;
use gsp_common::EnrichmentTable;

/// Write the table as a tab-separated file with a leading index column
pub fn write_table(table: &EnrichmentTable, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "\t{}", table.columns().join("\t"))?;

    for (idx, row) in table.rows().iter().enumerate() {
        let cells: Vec<String> = row.iter().map(format_cell).collect();
        writeln!(out, "{}\t{}", idx, cells.join("\t"))?;
    }

    out.flush()?;

    info!(path = %path.display(), rows = table.len(), "Wrote result table");

    Ok(())
}

/// Render a single cell: strings raw, everything else in its JSON form
fn format_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
