//! Sift Core - Foundation crate for the sift sensitive-data scanner.
//!
//! This crate provides the shared data model, error handling, and
//! configuration that all other sift crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared report model (`DetectionCategory`, `MatchSet`,
//!   `FileOutcome`, `ScanReport`, `DiscoveredEntry`)
//!
//! # Example
//!
//! ```rust
//! use sift_core::{DetectionCategory, MatchSet, ScanConfig};
//!
//! let config = ScanConfig::default();
//! let mut matches = MatchSet::new();
//! matches.insert(DetectionCategory::Email, "jane@example.com");
//! assert!(!matches.is_empty());
//! assert_eq!(config.max_archive_depth, 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::ScanConfig;
pub use error::{ConfigError, ConfigResult, Result, SiftError};
pub use types::{
    DetectionCategory, DiscoveredEntry, EntryKind, FailureKind, FileOutcome, MatchSet, ScanReport,
};
