//! HTTP API client for the g:Profiler GOSt service

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::api::{endpoints, types::*};
use crate::error::Result;
use gsp_common::{DetailLevel, EnrichmentTable};

// ============================================================================
// API Client Constants
// ============================================================================

/// Public g:Profiler API base URL.
pub const DEFAULT_API_URL: &str = "https://biit.cs.ut.ee/gprofiler";

/// Default timeout for API requests in seconds.
/// Can be overridden via the GSP_API_TIMEOUT_SECS environment variable.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 300;

/// API client for the GOSt profile endpoint
pub struct GostClient {
    client: Client,
    base_url: String,
}

impl GostClient {
    /// Create a new API client
    pub fn new(base_url: String) -> Result<Self> {
        let timeout_secs = std::env::var("GSP_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_API_TIMEOUT_SECS);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Run a profile query and build the result table
    ///
    /// The detail level is validated before anything goes on the wire. The
    /// response body is decoded as JSON without inspecting the HTTP status,
    /// matching the service contract: an error body is not JSON and fails
    /// the decode, which aborts the run.
    pub async fn profile(
        &self,
        request: &ProfileRequest,
        detail: u8,
    ) -> Result<EnrichmentTable> {
        let detail = DetailLevel::new(detail)?;

        let url = endpoints::profile_url(&self.base_url);
        debug!(url = %url, genes = request.query.len(), "Posting profile request");

        let response = self.client.post(&url).json(request).send().await?;
        let profile: ProfileResponse = response.json().await?;

        debug!(rows = profile.result.len(), "Received profile response");

        let table = EnrichmentTable::from_records(&profile.result, detail)?;
        Ok(table)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
