//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `sitemap_validator` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use sitemap_validator::config::EXIT_FATAL;
use sitemap_validator::initialization::init_logger_with;
use sitemap_validator::{evaluate_exit_code, run_validation, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    // Keep the exit policy; run_validation takes the config by value
    let fail_on = config.fail_on.clone();
    let pct_threshold = config.fail_on_pct_threshold;

    // Resolve the sitemap tree and verify every leaf URL
    match run_validation(config).await {
        Ok(report) => {
            // Print user-friendly summary
            println!(
                "✅ Checked {} URL{} from {} sitemap{} ({} succeeded, {} failed, {} skipped) in {:.1}s",
                report.total_urls,
                if report.total_urls == 1 { "" } else { "s" },
                report.sitemaps_fetched,
                if report.sitemaps_fetched == 1 { "" } else { "s" },
                report.successful,
                report.failed,
                report.skipped,
                report.elapsed_seconds
            );
            // List each failed URL
            for url in &report.failed_urls {
                println!("   ❌ {url}");
            }
            // Map failures to an exit code under the --fail-on policy
            process::exit(evaluate_exit_code(&fail_on, pct_threshold, &report));
        }
        Err(e) => {
            eprintln!("sitemap_validator error: {:#}", e);
            process::exit(EXIT_FATAL);
        }
    }
}
