//! Configuration constants.
//!
//! This module defines the operational constants used throughout the application:
//! defaults for CLI options, logging cadence and URL limits.

/// Default maximum number of concurrent leaf fetches (semaphore limit)
pub const DEFAULT_MAX_CONCURRENCY: usize = 30;

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default upper bound on the number of sitemap documents fetched in one run.
///
/// Without deduplication a sitemap that lists itself would be expanded forever;
/// this cap turns that into a resolution error instead.
pub const DEFAULT_MAX_SITEMAPS: usize = 1000;

/// Default failure percentage for `--fail-on pct-greater-than`
pub const DEFAULT_FAIL_ON_PCT_THRESHOLD: u8 = 10;

/// Interval in seconds between progress lines while leaf URLs are verified
pub const LOGGING_INTERVAL: u64 = 5;

/// Path appended to the base site URL to form the root sitemap URL
pub const SITEMAP_PATH: &str = "/sitemap.xml";

/// Suffix a `<loc>` entry must end with to be treated as a nested sitemap
pub const SUB_SITEMAP_SUFFIX: &str = ".xml";

/// Substring a `<loc>` entry must contain to be treated as a nested sitemap
pub const SUB_SITEMAP_MARKER: &str = "sitemap";

/// Maximum URL length (2048 characters).
/// This matches common browser and server limits (e.g., IE, Apache, Nginx default limits).
pub const MAX_URL_LENGTH: usize = 2048;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Exit codes reported by the binary
/// Run completed and the exit policy passed
pub const EXIT_SUCCESS: i32 = 0;
/// Fatal error (invalid base URL, sitemap resolution failure, initialization)
pub const EXIT_FATAL: i32 = 1;
/// The `--fail-on` policy was violated by failed leaf fetches
pub const EXIT_POLICY_FAILURE: i32 = 2;
/// `--fail-on pct-greater-than` was requested but there were no leaf URLs
pub const EXIT_NO_URLS: i32 = 3;
