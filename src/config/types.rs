//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_FAIL_ON_PCT_THRESHOLD, DEFAULT_MAX_CONCURRENCY, DEFAULT_MAX_SITEMAPS,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Exit code policy applied after verification.
///
/// Sitemap resolution failures always exit non-zero; this only decides how
/// failed leaf fetches map to the process exit code.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 once verification has run
    Never,
    /// Exit 2 if any leaf URL failed
    AnyFailure,
    /// Exit 2 if the failure percentage exceeds `--fail-on-pct-threshold`
    ///
    /// The percentage is taken over every resolved leaf URL, so URLs skipped by
    /// `--fail-fast` count in the denominator but never as failures.
    PctGreaterThan,
}

/// Validator configuration.
///
/// Parsed from the command line by the binary, or built programmatically by
/// library users starting from `Config::default()`.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// sitemap_validator https://example.com
///
/// # Lower concurrency, stricter timeout, fail the build on any broken link
/// sitemap_validator https://example.com --max-concurrency 5 --timeout-seconds 5 --fail-on any-failure
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sitemap_validator",
    about = "Expands a site's sitemap and checks that every listed URL can be fetched."
)]
pub struct Config {
    /// Base site URL; `/sitemap.xml` is appended as-is
    pub base_url: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Maximum concurrent leaf fetches (must be at least 1)
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Fetch each sitemap once and report each leaf URL once
    #[arg(long)]
    pub dedupe: bool,

    /// Maximum number of sitemap documents fetched before resolution is aborted
    #[arg(long, default_value_t = DEFAULT_MAX_SITEMAPS)]
    pub max_sitemaps: usize,

    /// Stop launching new fetches after the first failed leaf URL
    #[arg(long)]
    pub fail_fast: bool,

    /// Exit code policy for failed leaf URLs: never|any-failure|pct-greater-than
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,

    /// Failure percentage threshold used by `--fail-on pct-greater-than`
    #[arg(long, default_value_t = DEFAULT_FAIL_ON_PCT_THRESHOLD, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub fail_on_pct_threshold: u8,

    /// Show min/avg/max fetch latency at the end of the run
    #[arg(long)]
    pub show_timing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            dedupe: false,
            max_sitemaps: DEFAULT_MAX_SITEMAPS,
            fail_fast: false,
            fail_on: FailOn::Never,
            fail_on_pct_threshold: DEFAULT_FAIL_ON_PCT_THRESHOLD,
            show_timing: false,
        }
    }
}
