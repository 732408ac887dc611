//! Scanner error types.

use thiserror::Error;

/// Run-fatal scanner errors.
///
/// Per-file and per-archive problems never surface here; they become
/// `Failure` rows in the report. This type is reserved for conditions that
/// invalidate the entire run.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root cannot be read at all
    #[error(transparent)]
    Root(#[from] sift_discovery::DiscoveryError),

    /// The decoder registry does not cover a supported content extension
    #[error("no decoder registered for supported extension '{extension}'")]
    MissingDecoder {
        /// The uncovered extension
        extension: &'static str,
    },

    /// The named-entity capability is entirely unavailable
    #[error("named-entity extraction capability is unavailable")]
    NerUnavailable,

    /// Scratch-directory or report I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report projection failed
    #[error("report projection failed: {0}")]
    Projection(#[from] serde_json::Error),
}

/// Result type alias using `ScanError`.
pub type Result<T> = std::result::Result<T, ScanError>;
