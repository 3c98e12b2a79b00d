//! Root sitemap URL construction.

use crate::config::{MAX_URL_LENGTH, SITEMAP_PATH};
use crate::error_handling::SitemapError;

/// Builds the root sitemap URL for a base site URL.
///
/// `/sitemap.xml` is appended verbatim: no scheme is added and trailing
/// slashes are kept, so `https://x.com/` becomes `https://x.com//sitemap.xml`.
/// The result is only checked, never rewritten.
///
/// # Errors
///
/// Returns `SitemapError::InvalidUrl` if the result is longer than
/// `MAX_URL_LENGTH`, does not parse, or is not an http/https URL.
pub fn root_sitemap_url(base_url: &str) -> Result<String, SitemapError> {
    let candidate = format!("{base_url}{SITEMAP_PATH}");

    if candidate.len() > MAX_URL_LENGTH {
        return Err(invalid(&candidate, format!(
            "exceeds maximum length ({} > {})",
            candidate.len(),
            MAX_URL_LENGTH
        )));
    }

    let parsed = url::Url::parse(&candidate).map_err(|e| invalid(&candidate, e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(candidate),
        other => Err(invalid(&candidate, format!("unsupported scheme '{other}'"))),
    }
}

fn invalid(url: &str, reason: String) -> SitemapError {
    SitemapError::InvalidUrl {
        url: url.to_string(),
        reason,
    }
}
