//! GSP CLI - Main entry point

use clap::Parser;
use gsp_cli::{Cli, RunConfig};
use gsp_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize logging based on verbose flag and environment
    let log_config = if cli.verbose {
        // Verbose mode: debug level on the console
        LogConfig::builder()
            .level(LogLevel::Debug)
            .output(LogOutput::Console)
            .log_file_prefix("gsp".to_string())
            .build()
    } else {
        LogConfig::builder()
            .level(LogLevel::Info)
            .output(LogOutput::Console)
            .log_file_prefix("gsp".to_string())
            .build()
    };

    // Initialize logging (ignore errors as the CLI should work without logging)
    let _ = init_logging(&log_config);

    // Build the run configuration and execute the pipeline
    let config = RunConfig::from_cli(&cli);

    if let Err(e) = gsp_cli::pipeline::run(&config).await {
        error!(error = %e, "Enrichment run failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
