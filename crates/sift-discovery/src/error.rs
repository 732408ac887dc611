//! Discovery and extraction error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from walking a directory tree.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The walk root itself could not be read
    #[error("cannot read walk root {root}: {reason}")]
    RootUnreadable {
        /// Root that failed
        root: PathBuf,
        /// Underlying cause
        reason: String,
    },
}

/// Errors from expanding an archive.
///
/// These are per-archive conditions: the orchestrator converts them into a
/// `Failure` row keyed by the archive's own logical path.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The archive is corrupt or not actually an archive
    #[error("malformed archive: {0}")]
    Malformed(String),

    /// An entry's resolved path would escape the extraction root
    #[error("unsafe entry path in archive: {0}")]
    UnsafePath(String),

    /// Archive nesting exceeded the configured bound
    #[error("archive nesting exceeds depth limit of {0}")]
    DepthExceeded(usize),

    /// Expansion did not finish within its deadline
    #[error("archive extraction timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// The archive or an extraction target could not be read/written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
