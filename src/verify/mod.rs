//! Concurrent verification of leaf URLs.
//!
//! Every leaf URL gets its own tokio task. Tasks are launched only while a
//! semaphore permit is available, so at most `max_concurrency` requests are in
//! flight regardless of how many URLs the sitemap lists. The launch loop and
//! every task share one start `Instant`, passed in by value.

mod task;
mod types;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{info, warn};
use tokio_util::sync::CancellationToken;

use crate::app::{log_progress, shutdown_gracefully};
use crate::config::LOGGING_INTERVAL;
use crate::error_handling::{ErrorType, ProcessingStats};
use crate::initialization::init_semaphore;
use crate::utils::TimingStats;

pub use types::{FetchOutcome, FetchStatus, VerificationReport};

/// Shared state handed to every fetch task.
pub struct FetchContext {
    pub client: Arc<reqwest::Client>,
    pub error_stats: Arc<ProcessingStats>,
    pub timing_stats: Arc<TimingStats>,
    /// Cancel new launches after the first failure
    pub fail_fast: bool,
    /// Tripped by the first failed task when `fail_fast` is set
    pub cancel: CancellationToken,
}

impl FetchContext {
    pub fn new(
        client: Arc<reqwest::Client>,
        error_stats: Arc<ProcessingStats>,
        timing_stats: Arc<TimingStats>,
        fail_fast: bool,
    ) -> Self {
        Self {
            client,
            error_stats,
            timing_stats,
            fail_fast,
            cancel: CancellationToken::new(),
        }
    }
}

/// Fetches every URL concurrently and waits for all of them.
///
/// Returns one outcome per input URL. A failed fetch never aborts its
/// siblings; with `fail_fast` set, URLs not yet launched when the first
/// failure is seen are reported as `FetchStatus::Skipped`. A panicking task is
/// recorded as a failure of its URL.
pub async fn verify_urls(
    urls: Vec<String>,
    ctx: Arc<FetchContext>,
    max_concurrency: usize,
    start: Instant,
) -> VerificationReport {
    let total_urls = urls.len();
    info!(
        "Verifying {} URL{} (max concurrency: {})",
        total_urls,
        if total_urls == 1 { "" } else { "s" },
        max_concurrency
    );

    let semaphore = init_semaphore(max_concurrency);
    let completed_urls = Arc::new(AtomicUsize::new(0));
    let failed_urls = Arc::new(AtomicUsize::new(0));

    let cancel_logging = CancellationToken::new();
    let logging_task = {
        let cancel = cancel_logging.child_token();
        let completed = Arc::clone(&completed_urls);
        let failed = Arc::clone(&failed_urls);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(LOGGING_INTERVAL));
            // The first tick completes immediately
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        log_progress(start, &completed, &failed, total_urls);
                    }
                    _ = cancel.cancelled() => {
                        break;
                    }
                }
            }
        })
    };

    let mut tasks = FuturesUnordered::new();
    let mut outcomes = Vec::with_capacity(total_urls);
    let mut pending = urls.into_iter();

    while let Some(url) = pending.next() {
        let permit = tokio::select! {
            biased;
            _ = ctx.cancel.cancelled() => None,
            permit = Arc::clone(&semaphore).acquire_owned() => permit.ok(),
        };
        let Some(permit) = permit else {
            warn!("Stopping launches after a failed fetch; skipping remaining URLs");
            outcomes.push(skipped(url, start));
            outcomes.extend(pending.by_ref().map(|url| skipped(url, start)));
            break;
        };

        let task_ctx = Arc::clone(&ctx);
        let completed = Arc::clone(&completed_urls);
        let failed = Arc::clone(&failed_urls);
        let task_url = url.clone();
        let handle = tokio::spawn(async move {
            let _permit = permit;
            let outcome = task::fetch_leaf(task_url, start, &task_ctx).await;
            if outcome.is_success() {
                completed.fetch_add(1, Ordering::SeqCst);
            } else {
                failed.fetch_add(1, Ordering::SeqCst);
            }
            outcome
        });
        tasks.push(async move { (url, handle.await) });
    }

    while let Some((url, joined)) = tasks.next().await {
        match joined {
            Ok(outcome) => outcomes.push(outcome),
            Err(join_error) => {
                warn!("Fetch task for '{}' panicked: {:?}", url, join_error);
                failed_urls.fetch_add(1, Ordering::SeqCst);
                ctx.error_stats.increment_error(ErrorType::FetchTaskPanicked);
                outcomes.push(FetchOutcome {
                    url,
                    elapsed: start.elapsed(),
                    request_duration: None,
                    status: FetchStatus::Failed {
                        category: ErrorType::FetchTaskPanicked,
                        message: join_error.to_string(),
                    },
                });
            }
        }
    }

    shutdown_gracefully(cancel_logging, Some(logging_task)).await;

    let elapsed = start.elapsed();
    info!("Validation complete in: {:.3} sec.", elapsed.as_secs_f64());

    VerificationReport { outcomes, elapsed }
}

fn skipped(url: String, start: Instant) -> FetchOutcome {
    FetchOutcome {
        url,
        elapsed: start.elapsed(),
        request_duration: None,
        status: FetchStatus::Skipped,
    }
}
