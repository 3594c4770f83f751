//! Error types for GSP

use thiserror::Error;

/// Result type alias for GSP operations
pub type Result<T> = std::result::Result<T, GspError>;

/// Main error type for GSP
#[derive(Error, Debug)]
pub enum GspError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Column '{column}' missing from enrichment result row {row}")]
    MissingColumn { column: String, row: usize },

    #[error("Invalid detail level {0}: must be 0, 1 or 2")]
    InvalidDetailLevel(u8),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
