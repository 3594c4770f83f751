//! Run configuration for the GSP pipeline
//!
//! Built once from the parsed command line and passed by reference to each
//! pipeline stage, so no stage reads ambient state.

use std::path::{Path, PathBuf};

use crate::Cli;

// ============================================================================
// CLI Configuration Constants
// ============================================================================

/// Default p-value significance threshold.
pub const DEFAULT_THRESHOLD: f64 = 0.05;

/// Default multiple-testing correction method name.
///
/// Passed through to the service unvalidated; the service rejects or ignores
/// unknown names.
pub const DEFAULT_METHOD: &str = "g_SCS";

/// Suffix appended to the input path when no output path is given.
pub const OUTPUT_SUFFIX: &str = ".gprofiler";

/// Run configuration
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Input file with the gene list (first column, header skipped)
    pub infile: PathBuf,

    /// Organism code understood by g:Profiler (e.g. "hsapiens")
    pub organism: String,

    /// Output table path; also the prefix for the per-source chart files
    pub output: PathBuf,

    /// Multiple-testing correction method name
    pub method: String,

    /// p-value threshold
    pub threshold: f64,

    /// Return under-represented instead of over-represented terms
    pub underrepresented: bool,

    /// Output detail level (0, 1 or 2)
    pub detail: u8,

    /// Base URL of the g:Profiler API
    pub api_url: String,
}

impl RunConfig {
    /// Build the run configuration from parsed CLI arguments
    pub fn from_cli(cli: &Cli) -> Self {
        let output = cli
            .output
            .clone()
            .unwrap_or_else(|| default_output(&cli.infile));

        Self {
            infile: cli.infile.clone(),
            organism: cli.organism.clone(),
            output,
            method: cli.method.clone(),
            threshold: cli.threshold,
            underrepresented: cli.underrepresented,
            detail: 0,
            api_url: cli.api_url.clone(),
        }
    }
}

/// Default output path: the input path with [`OUTPUT_SUFFIX`] appended
fn default_output(infile: &Path) -> PathBuf {
    PathBuf::from(format!("{}{}", infile.display(), OUTPUT_SUFFIX))
}
