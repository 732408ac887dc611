//! Core error types for the sift scanner.
//!
//! This module defines the central error type used across all subsystems.
//! Each subsystem error is represented as a variant for clear error propagation.
//! Per-file failures are *not* errors: they travel as `FileOutcome::Failure`
//! values through the aggregator and never unwind.

use thiserror::Error;

/// Central error type for run-fatal sift operations.
///
/// Each variant represents an error from a specific subsystem. Only
/// conditions that invalidate the whole run surface through this type;
/// anything scoped to a single file is converted into a report row instead.
#[derive(Error, Debug)]
pub enum SiftError {
    /// Configuration errors (file loading, parsing, validation)
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Decoder registry errors (missing coverage for a supported extension)
    #[error("decoder error: {0}")]
    Decoder(String),

    /// Scan root unreadable or not a directory
    #[error("scan root unreadable: {0}")]
    RootUnreadable(String),

    /// Required collaborator unavailable (e.g. NER capability)
    #[error("collaborator unavailable: {0}")]
    CollaboratorUnavailable(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine config directory path
    #[error("could not determine config directory (XDG base directories not available)")]
    NoConfigDir,

    /// Failed to parse TOML
    #[error("failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// I/O error reading/writing config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Result type alias using `SiftError`.
pub type Result<T> = std::result::Result<T, SiftError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
