//! # Serializer Options Bench
//!
//! Measures what it costs to build JSON serializer options on every call
//! compared with building them once and reusing them, by round-tripping a
//! fixed record through encode and decode in a tight loop.
//!
//! ## Features
//!
//! - **Model Module**: The fixture record, its nested sub-record, `DateOnly` and `Decimal`
//! - **Serializer Module**: Options-driven JSON encoding and decoding with pluggable converters
//! - **Runner Module**: The per-call and cached round-trip loops driven by the benchmark harness
//!
//! ## Example
//!
//! ```rust
//! use serializer_options_bench::model::{fixture, Record};
//! use serializer_options_bench::serializer::{Serializer, SerializerOptions};
//!
//! let options = SerializerOptions::shared();
//! let bytes = Serializer::serialize(fixture(), options)?;
//! let decoded: Record = Serializer::deserialize(&bytes, options)?;
//! assert_eq!(&decoded, fixture());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![warn(clippy::all)]

// Re-export core error types
pub use error::{Error, Result};

// Core modules
pub mod error;
pub mod model;
pub mod runner;
pub mod serializer;

// Utility modules
mod utils;

pub use utils::init_tracing;

// Re-export commonly used types
pub mod prelude {
    //! Common types and traits for convenient importing

    pub use crate::error::{Error, ParseError, Result, SerializerError};
    pub use crate::model::{fixture, DateOnly, Decimal, Nested, Record};
    pub use crate::runner::{OptionsStrategy, RoundTrip, RoundTripConfig};
    pub use crate::serializer::{DateOnlyConverter, Serializer, SerializerOptions};
}

// Version information
/// The version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of this crate
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
