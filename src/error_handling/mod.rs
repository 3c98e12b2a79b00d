//! Error handling and processing statistics.
//!
//! This module provides:
//! - Fatal error types (`InitializationError`, `SitemapError`)
//! - Per-URL failure categories (`ErrorType`) and their mapping from `reqwest` errors
//! - Processing statistics tracking (error and info counters)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::update_error_stats;
pub use stats::{InfoType, ProcessingStats};
pub use types::{ErrorType, InitializationError, SitemapError};
