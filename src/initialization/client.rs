//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Builds the HTTP client shared by the resolver and every fetch task.
///
/// The client carries the configured User-Agent and per-request timeout and
/// follows redirects with reqwest's default policy (up to 10 hops). A single
/// instance is shared through `Arc` so all tasks reuse one connection pool.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the TLS backend or client
/// cannot be set up.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
