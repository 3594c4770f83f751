//! Error types for the GSP CLI
//!
//! Every pipeline stage fails fast: errors bubble up to `main`, which logs
//! them and exits non-zero. There is no retry or partial-result recovery.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Input or output file operation failed
    #[error("File operation failed: {0}. Check the path, permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// HTTP request or response-body decoding failed
    #[error("Network request failed: {0}. Check your internet connection and the API URL.")]
    Http(#[from] reqwest::Error),

    /// JSON (de)serialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Shared GSP error (missing column, invalid detail level, ...)
    #[error(transparent)]
    Common(#[from] gsp_common::GspError),

    /// Chart rendering failed
    #[error("Plot rendering failed for '{file}': {message}")]
    Plot { file: String, message: String },

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create a plot error
    pub fn plot(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Plot {
            file: file.into(),
            message: message.into(),
        }
    }
}
