//! Error types for the serializer options benchmark
//!
//! This module provides a unified error handling system using `thiserror` for
//! all components of the crate.

use thiserror::Error;

/// The main error type for the crate
#[derive(Error, Debug)]
pub enum Error {
    /// Serialization/deserialization errors
    #[error("Serializer error: {0}")]
    Serializer(#[from] SerializerError),

    /// Date parsing errors raised outside of a decode
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        /// What was rejected
        message: String,
    },
}

/// Serializer-specific error types
#[derive(Error, Debug)]
pub enum SerializerError {
    /// Serialization failed
    #[error("Serialization failed: {reason}")]
    SerializationFailed {
        /// Message from the JSON writer
        reason: String,
    },

    /// Deserialization failed
    #[error("Deserialization failed: {reason}")]
    DeserializationFailed {
        /// Message from the JSON reader
        reason: String,
    },

    /// A date-only property could not be decoded by its converter
    #[error("Invalid date-only value: {0}")]
    InvalidDate(#[from] ParseError),

    /// Buffer overflow/underflow
    #[error("Buffer error: {reason}")]
    BufferError {
        /// Size that was rejected and the limit
        reason: String,
    },
}

/// Errors raised when text or components do not form a valid date-only or
/// decimal value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The text does not match the expected pattern
    #[error("'{input}' does not match date pattern '{format}'")]
    InvalidDate {
        /// Text that was read
        input: String,
        /// Pattern it was read with
        format: String,
    },

    /// The components do not name a real calendar date
    #[error("Invalid calendar date: year {year}, month {month}, day {day}")]
    InvalidComponents {
        /// Year component
        year: i32,
        /// Month component
        month: u32,
        /// Day component
        day: u32,
    },

    /// The date exists but falls outside 0001-01-01..=9999-12-31
    #[error("Date {date} is outside the supported range 0001-01-01..=9999-12-31")]
    OutOfRange {
        /// The date as written
        date: String,
    },

    /// The text is not a decimal number a [`Decimal`](crate::model::Decimal) can hold
    #[error("'{input}' is not a decimal number within the supported precision")]
    InvalidDecimal {
        /// Text that was read
        input: String,
    },
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

/// Convenience type alias for Serializer Results
pub type SerializerResult<T> = std::result::Result<T, SerializerError>;

/// Convenience type alias for value parsing Results
pub type ParseResult<T> = std::result::Result<T, ParseError>;
