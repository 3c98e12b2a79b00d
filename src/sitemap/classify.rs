//! Sub-sitemap classification.

use crate::config::{SUB_SITEMAP_MARKER, SUB_SITEMAP_SUFFIX};

/// Returns `true` if a `<loc>` entry points at another sitemap document.
///
/// An entry is a nested sitemap when it ends with `.xml` and contains
/// `sitemap` anywhere in the string. Both checks are case-sensitive, so
/// `https://x.com/SITEMAP.XML` is a leaf URL.
pub fn is_sub_sitemap(candidate: &str) -> bool {
    candidate.ends_with(SUB_SITEMAP_SUFFIX) && candidate.contains(SUB_SITEMAP_MARKER)
}
