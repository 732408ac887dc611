//! Sift Detect - Sensitive-data detection engine.
//!
//! Classifies normalized text against a fixed taxonomy of detectors:
//! pattern matchers (email, credit card, Medicare, Centrelink CRN),
//! checksum-validated Tax File Numbers, canonicalizing Australian phone
//! detection, and a pluggable named-entity extractor for person names.
//!
//! Detectors run independently and never reconcile overlapping claims;
//! a span may legitimately surface under more than one category.
//!
//! # Example
//!
//! ```rust
//! use sift_detect::{DetectionEngine, HeuristicNameExtractor};
//! use sift_core::DetectionCategory;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let engine = DetectionEngine::new(
//!     Arc::new(HeuristicNameExtractor::default()),
//!     Duration::from_secs(30),
//! );
//! let matches = engine.detect("Reach Jane on jane@example.com").await.unwrap();
//! assert_eq!(matches.values(DetectionCategory::Email), vec!["jane@example.com"]);
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod engine;
pub mod error;
pub mod ner;
pub mod patterns;
pub mod phone;
pub mod tfn;

pub use engine::DetectionEngine;
pub use error::{DetectorError, DetectorResult};
pub use ner::{HeuristicNameExtractor, NameExtractor};
