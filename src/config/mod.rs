//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults, limits, exit codes)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, FailOn, LogFormat, LogLevel};
