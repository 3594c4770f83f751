//! GSP Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, utilities, and error handling for the GSP project.
//!
//! # Overview
//!
//! This crate provides common functionality used across all GSP workspace members:
//!
//! - **Error Handling**: Custom error types and result types
//! - **Logging**: Centralized tracing initialization
//! - **Types**: The enrichment result table and its detail-level column model
//!
//! # Example
//!
//! ```no_run
//! use gsp_common::{Result, EnrichmentTable};
//!
//! fn row_count(table: &EnrichmentTable) -> usize {
//!     table.len()
//! }
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{GspError, Result};
pub use types::{DetailLevel, EnrichmentTable};
