//! Sift Scanner - Scan orchestration.
//!
//! This crate ties the pipeline together: discovery of content files and
//! archives, per-file decode + detect with bounded concurrency, recursive
//! re-discovery through nested archives, and aggregation of every outcome
//! into one [`sift_core::ScanReport`].
//!
//! # Example
//!
//! ```rust,ignore
//! use sift_scanner::{JsonProjector, ReportProjector, ScanOrchestrator};
//! use sift_core::ScanConfig;
//! use sift_decode::DecoderRegistry;
//! use sift_detect::{DetectionEngine, HeuristicNameExtractor};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let config = ScanConfig::load_with_env()?;
//! let engine = DetectionEngine::new(
//!     Arc::new(HeuristicNameExtractor::default()),
//!     Duration::from_secs(config.ner_timeout_secs),
//! );
//! let orchestrator = ScanOrchestrator::new(
//!     Arc::new(DecoderRegistry::standard()),
//!     Arc::new(engine),
//!     config,
//! )?;
//!
//! let report = orchestrator.run("/corpus/inbox".as_ref()).await?;
//! let json = JsonProjector::pretty().project(&report)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod aggregator;
pub mod error;
pub mod orchestrator;
pub mod projector;

pub use aggregator::ResultAggregator;
pub use error::{Result, ScanError};
pub use orchestrator::ScanOrchestrator;
pub use projector::{JsonProjector, ReportProjector};
