//! Sift Decode - Per-format text extraction.
//!
//! Turns supported document formats into normalized UTF-8 text behind the
//! [`TextDecoder`] trait, with a [`DecoderRegistry`] mapping file extensions
//! to decoder instances. The detection engine consumes only the normalized
//! text; nothing format-specific leaks past this crate.
//!
//! Decoding is deliberately forgiving about *text encodings* (a `.txt` file
//! in some legacy codepage is decoded lossily, never rejected) and strict
//! about *structure* (a `.docx` that is not a zip is a `DecodeError`).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod docx;
pub mod error;
pub mod pdf;
pub mod registry;
pub mod text;
pub mod xlsx;

pub use error::{DecodeError, DecodeResult};
pub use registry::{DecoderRegistry, TextDecoder};
