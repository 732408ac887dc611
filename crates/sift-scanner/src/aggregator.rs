//! Result aggregation.

use sift_core::{FileOutcome, ScanReport};
use std::sync::Mutex;

/// The single synchronization point for report writes.
///
/// Every outcome, success or failure, is recorded here keyed by logical
/// path; recording the same path twice is idempotent last-write-wins. A
/// failed file still occupies a row, so a missing row is never confused
/// with "found nothing".
#[derive(Debug, Default)]
pub struct ResultAggregator {
    report: Mutex<ScanReport>,
}

impl ResultAggregator {
    /// Create an aggregator around an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for one logical path.
    pub fn record(&self, logical_path: impl Into<String>, outcome: FileOutcome) {
        self.report
            .lock()
            .expect("aggregator mutex is never poisoned")
            .record(logical_path, outcome);
    }

    /// Consume the aggregator and hand the report off read-only.
    #[must_use]
    pub fn finalize(self) -> ScanReport {
        self.report
            .into_inner()
            .expect("aggregator mutex is never poisoned")
    }
}
