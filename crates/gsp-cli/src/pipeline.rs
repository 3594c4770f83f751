//! The enrichment pipeline
//!
//! Single forward pass: read the gene list, run one profile request, write
//! the result table, render the per-source charts. Any error aborts the run.

use tracing::{info, warn};

use crate::api::{GostClient, ProfileRequest};
use crate::config::RunConfig;
use crate::error::Result;
use crate::{input, plot, writer};

/// Execute the whole pipeline for one run configuration
pub async fn run(config: &RunConfig) -> Result<()> {
    info!(
        infile = %config.infile.display(),
        organism = %config.organism,
        method = %config.method,
        threshold = config.threshold,
        underrepresented = config.underrepresented,
        "Starting enrichment run"
    );

    let query = input::read_query(&config.infile)?;
    if query.is_empty() {
        warn!("Input file contains no gene identifiers");
    }

    let client = GostClient::new(config.api_url.clone())?;
    let request = ProfileRequest {
        organism: config.organism.clone(),
        query,
        user_threshold: config.threshold,
        measure_underrepresentation: config.underrepresented,
    };

    let table = client.profile(&request, config.detail).await?;
    info!(rows = table.len(), sources = table.sources().len(), "Enrichment complete");

    writer::write_table(&table, &config.output)?;

    let images = plot::render_plots(&table, &config.output)?;
    info!(images = images.len(), "Run finished");

    Ok(())
}
