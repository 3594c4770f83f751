//! Enrichment result table and detail-level column model
//!
//! The GOSt service returns result rows as free-form JSON objects. GSP keeps
//! only a fixed, ordered subset of their fields, selected by a three-tier
//! detail level, and preserves the row order of the service response.

use serde_json::{Map, Value};

use crate::error::{GspError, Result};

/// All selectable result columns, in output order.
///
/// The first 7 form the base set, the next 6 the extended set, and the last 5
/// the full set (grouping statistics the service documents only loosely).
const RESULT_COLUMNS: [&str; 18] = [
    "source",
    "native",
    "name",
    "p_value",
    "description",
    "query",
    "significant",
    "term_size",
    "query_size",
    "intersection_size",
    "effective_domain_size",
    "intersections",
    "parents",
    "goshv",
    "group_id",
    "precision",
    "recall",
    "source_order",
];

/// Output detail level for the result table
///
/// Level 0 selects the 7 base columns, level 1 adds the 6 extended columns,
/// level 2 adds the 5 remaining grouping columns. Any other value is rejected
/// at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailLevel(u8);

impl DetailLevel {
    /// The default level: base columns only
    pub const BASE: DetailLevel = DetailLevel(0);

    /// Validate a raw level value
    pub fn new(level: u8) -> Result<Self> {
        if level > 2 {
            return Err(GspError::InvalidDetailLevel(level));
        }
        Ok(Self(level))
    }

    /// Column names selected by this level, in output order
    pub fn columns(self) -> &'static [&'static str] {
        match self.0 {
            0 => &RESULT_COLUMNS[..7],
            1 => &RESULT_COLUMNS[..13],
            _ => &RESULT_COLUMNS[..18],
        }
    }

    /// The raw level value
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for DetailLevel {
    fn default() -> Self {
        Self::BASE
    }
}

impl std::fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tabular enrichment result
///
/// Ordered column names plus one row of JSON values per service result row,
/// in the order the service returned them.
#[derive(Debug, Clone)]
pub struct EnrichmentTable {
    columns: &'static [&'static str],
    rows: Vec<Vec<Value>>,
}

impl EnrichmentTable {
    /// Build a table from raw service records, selecting the columns of `detail`
    ///
    /// Fails if any record lacks one of the selected columns.
    pub fn from_records(records: &[Map<String, Value>], detail: DetailLevel) -> Result<Self> {
        let columns = detail.columns();
        let mut rows = Vec::with_capacity(records.len());

        for (row_idx, record) in records.iter().enumerate() {
            let mut row = Vec::with_capacity(columns.len());
            for &column in columns {
                let value = record.get(column).ok_or_else(|| GspError::MissingColumn {
                    column: column.to_string(),
                    row: row_idx,
                })?;
                row.push(value.clone());
            }
            rows.push(row);
        }

        Ok(Self { columns, rows })
    }

    /// Column names, in output order
    pub fn columns(&self) -> &[&'static str] {
        self.columns
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows, in service order
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|&c| c == name)
    }

    /// String value of a cell, if the column exists and the cell is a string
    pub fn str_cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)?.as_str()
    }

    /// Numeric value of a cell, if the column exists and the cell is a number
    pub fn f64_cell(&self, row: usize, column: &str) -> Option<f64> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)?.as_f64()
    }

    /// Distinct `source` values in first-seen order
    pub fn sources(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for row in 0..self.len() {
            if let Some(source) = self.str_cell(row, "source") {
                if !seen.iter().any(|s| s == source) {
                    seen.push(source.to_string());
                }
            }
        }
        seen
    }
}
