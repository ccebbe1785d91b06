//! Serializer module for data serialization and deserialization
//!
//! This module encodes records to JSON and decodes them back, driven at run
//! time by [`SerializerOptions`]: property naming, indentation, trailing-comma
//! tolerance, null omission and registered field converters.

pub mod contract;
pub mod converter;
pub mod options;
#[allow(clippy::module_inception)]
pub mod serializer;
pub mod serializer_utils;

// Re-export main types for convenience
pub use contract::{Contextual, ContractSeed, DecodeContext, FieldWriter, JsonContract};
pub use converter::{Converter, DateOnlyConverter, JsonConverter};
pub use options::{IgnoreCondition, NamingPolicy, SerializerOptions};
pub use serializer::Serializer;
pub use serializer_utils::SerializerUtils;

/// Serialization constants
pub mod constants {
    //! Constants used throughout the serializer module

    /// Maximum accepted input size when decoding
    pub const MAX_SERIALIZED_SIZE: usize = 10 * 1024 * 1024; // 10MB

    /// Initial capacity of the encode buffer
    pub const DEFAULT_BUFFER_SIZE: usize = 1024;

    /// Indentation unit for indented output
    pub const INDENT: &[u8] = b"  ";
}
