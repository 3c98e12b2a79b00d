//! Single leaf URL fetch.

use std::time::Instant;

use log::{info, warn};

use crate::error_handling::update_error_stats;

use super::types::{FetchOutcome, FetchStatus};
use super::FetchContext;

/// Fetches one leaf URL and reads its body.
///
/// Non-success statuses count as failures. On success the confirmation line
/// reports the time since `start`, the instant shared by every task of the run.
/// On failure the error is categorized into the shared statistics and, if the
/// run is fail-fast, the shared cancellation token is tripped.
pub(crate) async fn fetch_leaf(url: String, start: Instant, ctx: &FetchContext) -> FetchOutcome {
    let request_start = Instant::now();
    let result = async {
        let response = ctx.client.get(&url).send().await?.error_for_status()?;
        let status = response.status().as_u16();
        response.bytes().await?;
        Ok::<u16, reqwest::Error>(status)
    }
    .await;
    let request_duration = request_start.elapsed();
    let elapsed = start.elapsed();

    let status = match result {
        Ok(status) => {
            ctx.timing_stats.record(request_duration);
            info!("'{}' fetched in {:.3}s", url, elapsed.as_secs_f64());
            FetchStatus::Fetched { status }
        }
        Err(e) => {
            let category = update_error_stats(&ctx.error_stats, &e);
            warn!("Failed to fetch '{}' ({}): {}", url, category, e);
            if ctx.fail_fast {
                ctx.cancel.cancel();
            }
            FetchStatus::Failed {
                category,
                message: e.to_string(),
            }
        }
    };

    FetchOutcome {
        url,
        elapsed,
        request_duration: Some(request_duration),
        status,
    }
}
