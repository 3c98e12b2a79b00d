//! Utility functions.
//!
//! This module provides:
//! - CSS selector parsing utilities
//! - Latency metrics for fetched URLs

mod selector;
mod timing;

pub use selector::parse_selector_unsafe;
pub use timing::TimingStats;
