//! Sitemap resolution.
//!
//! This module turns a root sitemap URL into the flat list of leaf URLs it
//! references:
//! - `<loc>` extraction from sitemap documents
//! - Classification of entries as nested sitemaps or leaf URLs
//! - Worklist-driven expansion of nested sitemaps

mod classify;
mod parse;
mod resolve;

// Re-export public API
pub use classify::is_sub_sitemap;
pub use parse::extract_locations;
pub use resolve::{Resolution, SitemapResolver};
