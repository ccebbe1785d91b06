//! Field converters that can be registered with [`SerializerOptions`]
//!
//! A converter owns the textual form of one value type. When a converter for
//! a type is registered, the serializer hands every property of that type to
//! it instead of writing the value as a generic structured object.
//!
//! [`SerializerOptions`]: super::options::SerializerOptions

use crate::error::{Error, ParseError, ParseResult, Result};
use crate::model::date_only::{DateOnly, DEFAULT_DATE_FORMAT};
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use std::fmt::Write;

/// Date a custom pattern must write and read back unchanged; day and month
/// differ so swapped fields are caught
const SAMPLE_DATE: DateOnly = DateOnly::from_ymd_const(2022, 3, 14);

/// Paired encode/decode functions for a single value type
pub trait JsonConverter {
    /// The type this converter handles
    type Value;

    /// Render a value as the string stored in the JSON document
    fn write(&self, value: &Self::Value) -> String;

    /// Parse the string stored in the JSON document
    fn read(&self, text: &str) -> ParseResult<Self::Value>;
}

/// Converter for [`DateOnly`] properties
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateOnlyConverter {
    format: String,
}

impl DateOnlyConverter {
    /// Converter using the `%Y-%m-%d` pattern
    pub fn new() -> Self {
        Self {
            format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    /// Converter using a chrono strftime pattern, or the default when `None`.
    ///
    /// The pattern must only name date fields and must read back what it
    /// writes; anything else is a configuration error.
    pub fn with_format(format: Option<&str>) -> Result<Self> {
        let Some(format) = format else {
            return Ok(Self::new());
        };

        let unsupported = |reason: &str| Error::Configuration {
            message: format!("unsupported date-only pattern '{}': {}", format, reason),
        };

        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(unsupported("not a valid strftime pattern"));
        }

        let converter = Self {
            format: format.to_string(),
        };

        // chrono reports fields a date does not have (hours, offsets) only
        // when the value is rendered
        let mut sample = String::new();
        write!(sample, "{}", SAMPLE_DATE.as_naive().format(format))
            .map_err(|_| unsupported("names a field a date-only value does not have"))?;

        if converter.read(&sample).ok() != Some(SAMPLE_DATE) {
            return Err(unsupported("cannot read back the dates it writes"));
        }

        Ok(converter)
    }

    /// The pattern used for both directions
    pub fn format(&self) -> &str {
        &self.format
    }
}

impl Default for DateOnlyConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonConverter for DateOnlyConverter {
    type Value = DateOnly;

    fn write(&self, value: &DateOnly) -> String {
        value.as_naive().format(&self.format).to_string()
    }

    fn read(&self, text: &str) -> ParseResult<DateOnly> {
        let date = NaiveDate::parse_from_str(text, &self.format).map_err(|_| {
            ParseError::InvalidDate {
                input: text.to_string(),
                format: self.format.clone(),
            }
        })?;
        DateOnly::try_from(date)
    }
}

/// A converter registered with the serializer options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Converter {
    /// Handles [`DateOnly`] properties
    DateOnly(DateOnlyConverter),
}

impl From<DateOnlyConverter> for Converter {
    fn from(converter: DateOnlyConverter) -> Self {
        Converter::DateOnly(converter)
    }
}
