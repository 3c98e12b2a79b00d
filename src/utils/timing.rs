//! Latency metrics for leaf URL fetches.
//!
//! Times are stored in microseconds and converted to milliseconds only for display.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Snapshot of aggregated request latencies, in microseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatencySummary {
    pub count: u64,
    pub min_us: u64,
    pub avg_us: u64,
    pub max_us: u64,
}

/// Aggregated request latency across all fetched URLs.
///
/// Lock-free so every fetch task can record into a shared instance.
#[derive(Debug)]
pub struct TimingStats {
    count: AtomicU64,
    sum_us: AtomicU64,
    min_us: AtomicU64,
    max_us: AtomicU64,
}

impl Default for TimingStats {
    fn default() -> Self {
        Self {
            count: AtomicU64::new(0),
            sum_us: AtomicU64::new(0),
            min_us: AtomicU64::new(u64::MAX),
            max_us: AtomicU64::new(0),
        }
    }
}

impl TimingStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the duration of one request.
    pub fn record(&self, duration: Duration) {
        let micros = duration_to_micros(duration);
        self.count.fetch_add(1, Ordering::Relaxed);
        self.sum_us.fetch_add(micros, Ordering::Relaxed);
        self.min_us.fetch_min(micros, Ordering::Relaxed);
        self.max_us.fetch_max(micros, Ordering::Relaxed);
    }

    pub fn summary(&self) -> LatencySummary {
        let count = self.count.load(Ordering::Relaxed);
        if count == 0 {
            return LatencySummary::default();
        }
        LatencySummary {
            count,
            min_us: self.min_us.load(Ordering::Relaxed),
            avg_us: self.sum_us.load(Ordering::Relaxed) / count,
            max_us: self.max_us.load(Ordering::Relaxed),
        }
    }

    /// Converts microseconds to milliseconds for display (rounds to nearest).
    fn micros_to_ms(micros: u64) -> u64 {
        micros.saturating_add(500) / 1000
    }

    /// Logs min/avg/max request latency.
    pub fn log_summary(&self) {
        let summary = self.summary();
        if summary.count == 0 {
            log::info!("No timing data collected");
            return;
        }

        log::info!("=== Fetch Latency ({} URLs) ===", summary.count);
        log::info!("  {:8} {:>6} ms", "min:", Self::micros_to_ms(summary.min_us));
        log::info!("  {:8} {:>6} ms", "avg:", Self::micros_to_ms(summary.avg_us));
        log::info!("  {:8} {:>6} ms", "max:", Self::micros_to_ms(summary.max_us));
    }
}

/// Converts a Duration to whole microseconds, saturating at `u64::MAX`.
pub fn duration_to_micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_to_micros() {
        assert_eq!(duration_to_micros(Duration::ZERO), 0);
        assert_eq!(duration_to_micros(Duration::from_millis(3)), 3_000);
        assert_eq!(duration_to_micros(Duration::from_nanos(999)), 0);
    }

    #[test]
    fn test_duration_to_micros_saturates() {
        assert_eq!(duration_to_micros(Duration::MAX), u64::MAX);
    }

    #[test]
    fn test_timing_stats_empty_summary() {
        let stats = TimingStats::new();
        assert_eq!(stats.summary(), LatencySummary::default());
    }

    #[test]
    fn test_timing_stats_min_avg_max() {
        let stats = TimingStats::new();
        stats.record(Duration::from_millis(10));
        stats.record(Duration::from_millis(30));
        stats.record(Duration::from_millis(20));

        let summary = stats.summary();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.min_us, 10_000);
        assert_eq!(summary.avg_us, 20_000);
        assert_eq!(summary.max_us, 30_000);
    }

    #[test]
    fn test_micros_to_ms_rounds_to_nearest() {
        assert_eq!(TimingStats::micros_to_ms(0), 0);
        assert_eq!(TimingStats::micros_to_ms(499), 0);
        assert_eq!(TimingStats::micros_to_ms(500), 1);
        assert_eq!(TimingStats::micros_to_ms(1_499), 1);
        assert_eq!(TimingStats::micros_to_ms(u64::MAX), u64::MAX / 1000);
    }
}
