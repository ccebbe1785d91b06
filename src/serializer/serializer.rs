//! Main serializer implementation

use super::constants::{DEFAULT_BUFFER_SIZE, INDENT, MAX_SERIALIZED_SIZE};
use super::contract::{Contextual, ContractSeed, DecodeContext, JsonContract};
use super::options::SerializerOptions;
use super::serializer_utils::SerializerUtils;
use crate::error::{SerializerError, SerializerResult};
use serde::de::DeserializeSeed;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::borrow::Cow;

/// Encodes and decodes [`JsonContract`] values as JSON text
pub struct Serializer;

impl Serializer {
    /// Serialize a value to UTF-8 JSON bytes
    pub fn serialize<T: JsonContract>(
        value: &T,
        options: &SerializerOptions,
    ) -> SerializerResult<Vec<u8>> {
        let mut buffer = Vec::with_capacity(DEFAULT_BUFFER_SIZE);
        let contextual = Contextual::new(value, options);

        let written = if options.write_indented {
            let formatter = PrettyFormatter::with_indent(INDENT);
            let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
            contextual.serialize(&mut serializer)
        } else {
            let mut serializer = serde_json::Serializer::new(&mut buffer);
            contextual.serialize(&mut serializer)
        };

        written.map_err(|err| SerializerError::SerializationFailed {
            reason: err.to_string(),
        })?;

        tracing::trace!(type_name = T::NAME, bytes = buffer.len(), "serialized");
        Ok(buffer)
    }

    /// Serialize a value to a JSON string
    pub fn serialize_to_string<T: JsonContract>(
        value: &T,
        options: &SerializerOptions,
    ) -> SerializerResult<String> {
        let bytes = Self::serialize(value, options)?;
        String::from_utf8(bytes).map_err(|err| SerializerError::SerializationFailed {
            reason: err.to_string(),
        })
    }

    /// Deserialize a value from UTF-8 JSON bytes
    pub fn deserialize<T: JsonContract>(
        bytes: &[u8],
        options: &SerializerOptions,
    ) -> SerializerResult<T> {
        if bytes.len() > MAX_SERIALIZED_SIZE {
            return Err(SerializerError::BufferError {
                reason: format!(
                    "Data size {} exceeds maximum {}",
                    bytes.len(),
                    MAX_SERIALIZED_SIZE
                ),
            });
        }

        let input = if options.allow_trailing_commas {
            SerializerUtils::strip_trailing_commas(bytes)
        } else {
            Cow::Borrowed(bytes)
        };

        let ctx = DecodeContext::new(options);
        let mut deserializer = serde_json::Deserializer::from_slice(&input);
        let decoded = ContractSeed::<T>::new(&ctx)
            .deserialize(&mut deserializer)
            .and_then(|value| deserializer.end().map(|()| value));

        decoded.map_err(|err| match ctx.take_parse_error() {
            Some(parse_error) => SerializerError::InvalidDate(parse_error),
            None => SerializerError::DeserializationFailed {
                reason: err.to_string(),
            },
        })
    }

    /// Deserialize a value from a JSON string
    pub fn deserialize_str<T: JsonContract>(
        text: &str,
        options: &SerializerOptions,
    ) -> SerializerResult<T> {
        Self::deserialize(text.as_bytes(), options)
    }
}
