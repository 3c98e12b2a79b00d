//! Recursive sitemap expansion.

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, info};

use crate::config::DEFAULT_MAX_SITEMAPS;
use crate::error_handling::{InfoType, ProcessingStats, SitemapError};

use super::classify::is_sub_sitemap;
use super::parse::extract_locations;

/// Leaf URLs produced by a completed resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Leaf URLs in the order they were classified
    pub urls: Vec<String>,
    /// Number of sitemap documents fetched, root included
    pub sitemaps_fetched: usize,
}

/// Expands a root sitemap into the flat list of leaf URLs it references.
///
/// Resolution is sequential: one sitemap request is in flight at a time. The
/// worklist is a LIFO stack seeded with the root document's `<loc>` entries;
/// each popped entry is either expanded (nested sitemap) or appended to the
/// result (leaf URL). Any failed sitemap fetch aborts the whole resolution.
pub struct SitemapResolver {
    client: Arc<reqwest::Client>,
    stats: Arc<ProcessingStats>,
    dedupe: bool,
    max_sitemaps: usize,
}

impl SitemapResolver {
    pub fn new(client: Arc<reqwest::Client>, stats: Arc<ProcessingStats>) -> Self {
        Self {
            client,
            stats,
            dedupe: false,
            max_sitemaps: DEFAULT_MAX_SITEMAPS,
        }
    }

    /// Fetch each nested sitemap once and drop repeated leaf URLs.
    pub fn dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = dedupe;
        self
    }

    /// Cap on the number of sitemap documents fetched, root included.
    pub fn max_sitemaps(mut self, max_sitemaps: usize) -> Self {
        self.max_sitemaps = max_sitemaps;
        self
    }

    /// Resolves `root_url` into its leaf URLs.
    ///
    /// # Errors
    ///
    /// Returns the first `SitemapError` hit while fetching the root or any
    /// nested sitemap, or `SitemapError::LimitExceeded` once more than
    /// `max_sitemaps` documents would be fetched. No partial result is returned.
    pub async fn resolve(&self, root_url: &str) -> Result<Resolution, SitemapError> {
        let mut sitemaps_fetched = 0usize;
        let mut seen_sitemaps: HashSet<String> = HashSet::new();
        let mut seen_urls: HashSet<String> = HashSet::new();

        if self.dedupe {
            seen_sitemaps.insert(root_url.to_string());
        }
        let mut worklist = self.fetch_counted(root_url, &mut sitemaps_fetched).await?;
        let mut urls = Vec::new();

        while let Some(candidate) = worklist.pop() {
            if is_sub_sitemap(&candidate) {
                if self.dedupe && !seen_sitemaps.insert(candidate.clone()) {
                    debug!("Skipping already expanded sitemap {candidate}");
                    self.stats.increment_info(InfoType::DuplicateSitemapSkipped);
                    continue;
                }
                let entries = self.fetch_counted(&candidate, &mut sitemaps_fetched).await?;
                self.stats.increment_info(InfoType::SubSitemapExpanded);
                worklist.extend(entries);
            } else {
                if self.dedupe && !seen_urls.insert(candidate.clone()) {
                    self.stats.increment_info(InfoType::DuplicateUrlSkipped);
                    continue;
                }
                urls.push(candidate);
            }
        }

        info!(
            "Resolved {} URL{} from {} sitemap{}",
            urls.len(),
            if urls.len() == 1 { "" } else { "s" },
            sitemaps_fetched,
            if sitemaps_fetched == 1 { "" } else { "s" }
        );

        Ok(Resolution {
            urls,
            sitemaps_fetched,
        })
    }

    async fn fetch_counted(
        &self,
        url: &str,
        sitemaps_fetched: &mut usize,
    ) -> Result<Vec<String>, SitemapError> {
        if *sitemaps_fetched >= self.max_sitemaps {
            return Err(SitemapError::LimitExceeded {
                limit: self.max_sitemaps,
                url: url.to_string(),
            });
        }
        *sitemaps_fetched += 1;
        self.fetch_locations(url).await
    }

    /// Fetches one sitemap document and returns its `<loc>` entries.
    async fn fetch_locations(&self, url: &str) -> Result<Vec<String>, SitemapError> {
        debug!("Fetching sitemap {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| SitemapError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SitemapError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| SitemapError::Fetch {
            url: url.to_string(),
            source,
        })?;

        let locations = extract_locations(&body);
        if locations.is_empty() {
            self.stats.increment_info(InfoType::EmptySitemap);
        }
        debug!("Sitemap {url} lists {} entries", locations.len());
        Ok(locations)
    }
}
