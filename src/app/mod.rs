//! Main application modules.
//!
//! This module provides utilities for root URL construction, progress logging,
//! shutdown handling, and statistics printing used by a validation run.

pub mod logging;
pub mod shutdown;
pub mod statistics;
pub mod url;

// Re-export public API
pub use logging::log_progress;
pub use shutdown::shutdown_gracefully;
pub use statistics::{print_error_statistics, print_timing_statistics};
pub use url::root_sitemap_url;
