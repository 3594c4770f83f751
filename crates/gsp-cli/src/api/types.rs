//! API request and response types
//!
//! Matches the g:Profiler GOSt wire format. The request body carries only
//! the fields the profile endpoint reads; the correction method stays a
//! client-side setting and is not part of the body.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON body of a GOSt profile request
#[derive(Debug, Clone, Serialize)]
pub struct ProfileRequest {
    /// Organism code (e.g. "hsapiens")
    pub organism: String,

    /// Ordered gene identifier list
    pub query: Vec<String>,

    /// p-value significance threshold
    pub user_threshold: f64,

    /// Ask for under-represented instead of over-represented terms
    pub measure_underrepresentation: bool,
}

/// JSON body of a GOSt profile response
///
/// Result rows are kept as raw JSON objects; column selection happens when
/// the [`gsp_common::EnrichmentTable`] is built. All other top-level fields
/// (meta, timings, ...) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    pub result: Vec<Map<String, Value>>,
}
