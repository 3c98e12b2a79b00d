//! Fetch outcome and report types.

use std::time::Duration;

use crate::error_handling::ErrorType;

/// What happened to a single leaf URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    /// The URL answered with a success status and its body was read
    Fetched {
        /// HTTP status code of the final response
        status: u16,
    },
    /// The request failed or answered with an error status
    Failed {
        /// Failure category used in the end-of-run statistics
        category: ErrorType,
        /// Human-readable error
        message: String,
    },
    /// Never requested because `--fail-fast` stopped the run first
    Skipped,
}

/// Result of one fetch task.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub url: String,
    /// Time since the shared start of the run when the task finished
    pub elapsed: Duration,
    /// Duration of the request itself; `None` for skipped URLs
    pub request_duration: Option<Duration>,
    pub status: FetchStatus,
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.status, FetchStatus::Fetched { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.status, FetchStatus::Failed { .. })
    }
}

/// All fetch outcomes of a verification pass, in completion order.
#[derive(Debug, Clone, Default)]
pub struct VerificationReport {
    pub outcomes: Vec<FetchOutcome>,
    /// Time since the shared start of the run once every task had finished
    pub elapsed: Duration,
}

impl VerificationReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failure()).count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == FetchStatus::Skipped)
            .count()
    }

    /// URLs whose fetch failed, sorted for stable output.
    pub fn failed_urls(&self) -> Vec<String> {
        let mut urls: Vec<String> = self
            .outcomes
            .iter()
            .filter(|o| o.is_failure())
            .map(|o| o.url.clone())
            .collect();
        urls.sort();
        urls
    }
}
