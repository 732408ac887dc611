//! Detector error types.

use thiserror::Error;

/// Errors from a single detector's execution.
///
/// A detector error is isolated to its category unless it is a timeout,
/// which the orchestrator promotes to a per-file failure.
#[derive(Debug, Error)]
pub enum DetectorError {
    /// The named-entity extractor did not answer within its deadline
    #[error("NER invocation timed out after {0:?}")]
    NerTimeout(std::time::Duration),

    /// The named-entity extractor failed internally
    #[error("NER extraction failed: {0}")]
    NerFailed(String),
}

/// Result type alias for detector operations.
pub type DetectorResult<T> = std::result::Result<T, DetectorError>;
