//! Sift Discovery - Finding content inside directory trees and archives.
//!
//! The [`Discoverer`] walks a root directory depth-first and classifies
//! every file by extension; the [`ArchiveExpander`] unpacks recognized
//! archives into run-scoped scratch directories so the walker can be
//! re-entered over their contents. Neither component ever writes into the
//! tree under scan.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod archive;
pub mod error;
pub mod walker;

pub use archive::ArchiveExpander;
pub use error::{DiscoveryError, ExtractionError};
pub use walker::{classify, Discoverer, SUPPORTED_EXTENSIONS};
