//! Batch report printed by `mailsift batch`.

use std::time::Duration;

use mailsift_core::{AnnotatedThread, BatchOutcome, VolumeStats};
use serde::Serialize;

/// Batch output: the ranked results plus timing and volume figures.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub processed_count: usize,
    /// Wall-clock seconds, two decimals.
    pub time_taken: f64,
    pub compression_rate: String,
    pub status: &'static str,
    pub results: Vec<AnnotatedThread>,
    pub volume: VolumeStats,
}

impl BatchReport {
    #[must_use]
    pub fn new(outcome: BatchOutcome, elapsed: Duration, volume: VolumeStats) -> Self {
        Self {
            processed_count: outcome.processed_count,
            time_taken: (elapsed.as_secs_f64() * 100.0).round() / 100.0,
            compression_rate: outcome.average_compression,
            status: "completed",
            results: outcome.results,
            volume,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_report_from_outcome() {
        let outcome = BatchOutcome {
            processed_count: 0,
            average_compression: "0%".to_string(),
            results: Vec::new(),
        };
        let report = BatchReport::new(outcome, Duration::from_millis(1234), VolumeStats::default());
        assert_eq!(report.time_taken, 1.23);
        assert_eq!(report.status, "completed");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["compression_rate"], "0%");
        assert_eq!(json["volume"]["processed_total"], 0);
    }
}
