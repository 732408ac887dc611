//! Decoder error types.

use thiserror::Error;

/// Errors from turning a document into normalized text.
///
/// These are per-file conditions: the orchestrator converts them into
/// `FileOutcome::Failure` rows, they never abort a run.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// No decoder is registered for this extension
    #[error("no decoder registered for extension '{0}'")]
    UnsupportedExtension(String),

    /// The file's internal structure does not match its extension
    #[error("malformed {format} document: {reason}")]
    Malformed {
        /// Format that was expected
        format: &'static str,
        /// What went wrong inside the format library
        reason: String,
    },

    /// The file exceeds the configured size cap
    #[error("file too large: {size} bytes (cap {cap})")]
    TooLarge {
        /// Actual size on disk
        size: u64,
        /// Configured cap
        cap: u64,
    },

    /// The file could not be read at all
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for decode operations.
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
