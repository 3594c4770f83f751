//! GSP CLI Library
//!
//! Command-line client for g:Profiler GOSt term-enrichment analysis.
//!
//! # Overview
//!
//! `gsp` runs a single forward pass:
//!
//! - **Input**: read gene identifiers from the first column of a
//!   tab-separated file (header skipped)
//! - **Enrichment**: one POST to the g:Profiler GOSt profile endpoint
//! - **Output**: write the result table as a tab-separated file
//! - **Plots**: one horizontal bar chart (SVG + PNG) per result source,
//!   bars scaled by -log10(p-value)

pub mod api;
pub mod config;
pub mod error;
pub mod input;
pub mod pipeline;
pub mod plot;
pub mod writer;

// Re-export commonly used types
pub use config::RunConfig;
pub use error::{CliError, Result};

use clap::Parser;
use std::path::PathBuf;

/// GSP - g:Profiler term-enrichment client
#[derive(Parser, Debug)]
#[command(name = "gsp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File with the list of genes to analyse (first column, tab-separated)
    pub infile: PathBuf,

    /// Organism code according to the g:Profiler list
    /// (e.g. hsapiens, mmusculus, ggallus, dmelanogaster)
    pub organism: String,

    /// Output file (defaults to <INFILE>.gprofiler)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// False discovery method: g_SCS, bonferroni or fdr
    #[arg(short, long, default_value = config::DEFAULT_METHOD)]
    pub method: String,

    /// p-value threshold
    #[arg(short, long, default_value_t = config::DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Return the under-represented terms instead of the over-represented ones
    #[arg(short, long)]
    pub underrepresented: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Base URL of the g:Profiler API
    #[arg(
        long,
        env = "GSP_API_URL",
        default_value = api::DEFAULT_API_URL,
        hide = true
    )]
    pub api_url: String,
}
