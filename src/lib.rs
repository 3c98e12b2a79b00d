//! sitemap_validator library: sitemap expansion and link verification
//!
//! This library fetches a site's `sitemap.xml`, recursively expands nested
//! sitemaps into a flat list of leaf URLs, and then fetches every leaf URL
//! concurrently to confirm it is reachable.
//!
//! # Example
//!
//! ```no_run
//! use sitemap_validator::{Config, run_validation};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     base_url: "https://example.com".to_string(),
//!     max_concurrency: 10,
//!     ..Default::default()
//! };
//!
//! let report = run_validation(config).await?;
//! println!("Checked {} URLs: {} succeeded, {} failed",
//!          report.total_urls, report.successful, report.failed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod config;
mod error_handling;
pub mod initialization;
pub mod sitemap;
mod utils;
pub mod verify;

// Re-export public API
pub use config::{Config, FailOn, LogFormat, LogLevel};
pub use error_handling::{ErrorType, InitializationError, ProcessingStats, SitemapError};
pub use run::{evaluate_exit_code, run_validation, ValidationReport};

// Internal run module (resolution followed by verification)
mod run {
    use anyhow::{bail, Context, Result};
    use log::info;
    use std::sync::Arc;
    use std::time::Instant;
    use tokio::sync::Semaphore;

    use crate::app::{print_error_statistics, print_timing_statistics, root_sitemap_url};
    use crate::config::{Config, FailOn, EXIT_NO_URLS, EXIT_POLICY_FAILURE, EXIT_SUCCESS};
    use crate::error_handling::ProcessingStats;
    use crate::initialization::init_client;
    use crate::sitemap::SitemapResolver;
    use crate::utils::TimingStats;
    use crate::verify::{verify_urls, FetchContext};

    /// Results of a validation run.
    #[derive(Debug, Clone)]
    pub struct ValidationReport {
        /// Root sitemap URL derived from the base URL
        pub root_sitemap: String,
        /// Number of sitemap documents fetched, root included
        pub sitemaps_fetched: usize,
        /// Number of leaf URLs found in the sitemap tree
        pub total_urls: usize,
        /// Number of leaf URLs fetched successfully
        pub successful: usize,
        /// Number of leaf URLs that failed
        pub failed: usize,
        /// Number of leaf URLs never requested because of `--fail-fast`
        pub skipped: usize,
        /// Failed leaf URLs, sorted
        pub failed_urls: Vec<String>,
        /// Elapsed time in seconds since the start of the run
        pub elapsed_seconds: f64,
    }

    /// Runs a full validation with the provided configuration.
    ///
    /// The root sitemap is resolved first; only once every nested sitemap has
    /// been expanded are the leaf URLs verified. A single start instant,
    /// captured before resolution, is shared by every progress line.
    ///
    /// # Errors
    ///
    /// Returns an error, before any leaf URL is fetched, if:
    /// - `max_concurrency` or `max_sitemaps` is zero
    /// - `max_concurrency` exceeds `Semaphore::MAX_PERMITS`
    /// - the base URL does not yield a valid http(s) sitemap URL
    /// - the HTTP client cannot be built
    /// - any sitemap in the tree cannot be fetched
    ///
    /// Failed leaf fetches are not errors; they are counted in the report.
    pub async fn run_validation(config: Config) -> Result<ValidationReport> {
        if config.max_concurrency == 0 {
            bail!("max_concurrency must be at least 1");
        }
        if config.max_concurrency > Semaphore::MAX_PERMITS {
            bail!(
                "max_concurrency must be at most {} (got {})",
                Semaphore::MAX_PERMITS,
                config.max_concurrency
            );
        }
        if config.max_sitemaps == 0 {
            bail!("max_sitemaps must be at least 1");
        }

        let start = Instant::now();
        let root_sitemap = root_sitemap_url(&config.base_url)?;
        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let error_stats = Arc::new(ProcessingStats::new());
        let timing_stats = Arc::new(TimingStats::new());

        info!("Resolving sitemap {}", root_sitemap);
        let resolution = SitemapResolver::new(Arc::clone(&client), Arc::clone(&error_stats))
            .dedupe(config.dedupe)
            .max_sitemaps(config.max_sitemaps)
            .resolve(&root_sitemap)
            .await
            .with_context(|| format!("Failed to resolve sitemap {root_sitemap}"))?;

        let ctx = Arc::new(FetchContext::new(
            client,
            Arc::clone(&error_stats),
            Arc::clone(&timing_stats),
            config.fail_fast,
        ));
        let verification = verify_urls(resolution.urls, ctx, config.max_concurrency, start).await;

        print_error_statistics(&error_stats);
        if config.show_timing {
            print_timing_statistics(&timing_stats);
        }

        Ok(ValidationReport {
            root_sitemap,
            sitemaps_fetched: resolution.sitemaps_fetched,
            total_urls: verification.total(),
            successful: verification.succeeded(),
            failed: verification.failed(),
            skipped: verification.skipped(),
            failed_urls: verification.failed_urls(),
            elapsed_seconds: verification.elapsed.as_secs_f64(),
        })
    }

    /// Maps a completed run to a process exit code under the `--fail-on` policy.
    ///
    /// Returns `EXIT_SUCCESS` (0), `EXIT_POLICY_FAILURE` (2), or `EXIT_NO_URLS`
    /// (3) when a percentage policy is requested but there was nothing to check.
    ///
    /// The failure percentage is `failed / total_urls`; skipped URLs are part of
    /// `total_urls`.
    pub fn evaluate_exit_code(fail_on: &FailOn, pct_threshold: u8, report: &ValidationReport) -> i32 {
        match fail_on {
            FailOn::Never => EXIT_SUCCESS,
            FailOn::AnyFailure => {
                if report.failed > 0 {
                    EXIT_POLICY_FAILURE
                } else {
                    EXIT_SUCCESS
                }
            }
            FailOn::PctGreaterThan => {
                if report.total_urls == 0 {
                    return EXIT_NO_URLS;
                }
                #[allow(clippy::cast_precision_loss)]
                let failure_pct = (report.failed as f64 / report.total_urls as f64) * 100.0;
                if failure_pct > f64::from(pct_threshold) {
                    EXIT_POLICY_FAILURE
                } else {
                    EXIT_SUCCESS
                }
            }
        }
    }
}
