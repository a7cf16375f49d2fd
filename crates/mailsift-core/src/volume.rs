//! Processed-volume tracking.
//!
//! The tracker is the only shared mutable state in the crate. Create one per
//! process and hand it to every engine via `Arc`; both counters are updated
//! under a single lock so concurrent batches never lose an update.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::{debug, warn};

/// Minutes a reader is assumed to save per processed thread.
pub const DEFAULT_MINUTES_PER_THREAD: f64 = 2.0;

/// Snapshot of the volume counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct VolumeStats {
    /// Threads processed since the tracker was created.
    pub processed_total: u64,
    /// Estimated minutes saved.
    pub time_saved_minutes: f64,
    /// Estimated hours saved, rounded to one decimal.
    pub time_saved_hours: f64,
}

#[derive(Debug, Default)]
struct Counters {
    processed: u64,
    minutes: f64,
}

/// Cumulative counter of processed threads and time saved.
///
/// Never resets; there is no upper bound.
#[derive(Debug)]
pub struct VolumeTracker {
    counters: Mutex<Counters>,
    minutes_per_thread: f64,
}

impl VolumeTracker {
    /// Creates a tracker with the default minutes-per-thread estimate.
    #[must_use]
    pub fn new() -> Self {
        Self::with_minutes_per_thread(DEFAULT_MINUTES_PER_THREAD)
    }

    /// Creates a tracker with a custom default estimate.
    #[must_use]
    pub fn with_minutes_per_thread(minutes_per_thread: f64) -> Self {
        Self {
            counters: Mutex::new(Counters::default()),
            minutes_per_thread: sanitize_minutes(minutes_per_thread),
        }
    }

    /// Records a batch using the default estimate.
    pub fn track(&self, count: u64) {
        self.track_batch(count, self.minutes_per_thread);
    }

    /// Records a batch of `count` threads, each saving `avg_minutes_per_item`.
    ///
    /// A negative or non-finite estimate counts as zero minutes.
    #[allow(clippy::cast_precision_loss)]
    pub fn track_batch(&self, count: u64, avg_minutes_per_item: f64) {
        let avg = sanitize_minutes(avg_minutes_per_item);
        let mut counters = self.lock();
        counters.processed = counters.processed.saturating_add(count);
        counters.minutes += count as f64 * avg;
        debug!(
            count,
            processed_total = counters.processed,
            "recorded processed volume"
        );
    }

    /// Returns the current counters.
    #[must_use]
    pub fn stats(&self) -> VolumeStats {
        let counters = self.lock();
        VolumeStats {
            processed_total: counters.processed,
            time_saved_minutes: counters.minutes,
            time_saved_hours: (counters.minutes / 60.0 * 10.0).round() / 10.0,
        }
    }

    /// Default minutes-per-thread estimate used by [`track`](Self::track).
    #[must_use]
    pub const fn minutes_per_thread(&self) -> f64 {
        self.minutes_per_thread
    }

    fn lock(&self) -> MutexGuard<'_, Counters> {
        // Counters are always left consistent, so a poisoned lock is still usable.
        self.counters.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for VolumeTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn sanitize_minutes(minutes: f64) -> f64 {
    if minutes.is_finite() && minutes >= 0.0 {
        minutes
    } else {
        warn!(minutes, "ignoring invalid minutes-per-thread estimate");
        0.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let stats = VolumeTracker::new().stats();
        assert_eq!(stats.processed_total, 0);
        assert_eq!(stats.time_saved_minutes, 0.0);
        assert_eq!(stats.time_saved_hours, 0.0);
    }

    #[test]
    fn test_track_uses_default_estimate() {
        let tracker = VolumeTracker::new();
        tracker.track(30);
        let stats = tracker.stats();
        assert_eq!(stats.processed_total, 30);
        assert_eq!(stats.time_saved_minutes, 60.0);
        assert_eq!(stats.time_saved_hours, 1.0);
    }

    #[test]
    fn test_custom_default_estimate() {
        let tracker = VolumeTracker::with_minutes_per_thread(3.5);
        assert_eq!(tracker.minutes_per_thread(), 3.5);
        tracker.track(2);
        assert_eq!(tracker.stats().time_saved_minutes, 7.0);

        assert_eq!(VolumeTracker::with_minutes_per_thread(-2.0).minutes_per_thread(), 0.0);
    }

    #[test]
    fn test_hours_rounded_to_one_decimal() {
        let tracker = VolumeTracker::new();
        tracker.track_batch(10, 2.0);
        // 20 minutes = 0.333.. hours
        assert_eq!(tracker.stats().time_saved_hours, 0.3);
    }

    #[test]
    fn test_accumulates_and_never_resets() {
        let tracker = VolumeTracker::new();
        tracker.track_batch(5, 1.0);
        tracker.track_batch(0, 1.0);
        tracker.track_batch(5, 3.0);
        let stats = tracker.stats();
        assert_eq!(stats.processed_total, 10);
        assert_eq!(stats.time_saved_minutes, 20.0);
    }

    #[test]
    fn test_invalid_estimate_counts_as_zero() {
        let tracker = VolumeTracker::new();
        tracker.track_batch(4, -1.0);
        tracker.track_batch(4, f64::NAN);
        let stats = tracker.stats();
        assert_eq!(stats.processed_total, 8);
        assert_eq!(stats.time_saved_minutes, 0.0);
    }

    #[test]
    fn test_concurrent_batches_do_not_lose_updates() {
        let tracker = Arc::new(VolumeTracker::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let tracker = Arc::clone(&tracker);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        tracker.track_batch(10, 2.0);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let stats = tracker.stats();
        assert_eq!(stats.processed_total, 8000);
        assert_eq!(stats.time_saved_minutes, 16000.0);
    }
}
