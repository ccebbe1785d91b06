//! Options governing how records are encoded and decoded
//!
//! [`SerializerOptions`] can be built fresh for every call with
//! [`SerializerOptions::round_trip`] or read from the process-wide instance
//! returned by [`SerializerOptions::shared`]. Both carry the same settings.

use super::converter::{Converter, DateOnlyConverter};
use super::serializer_utils::SerializerUtils;
use std::borrow::Cow;
use std::sync::OnceLock;

/// How declared property names are transformed on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamingPolicy {
    /// Names are written exactly as declared
    #[default]
    Preserve,
    /// `AnotherId` becomes `anotherId`
    CamelCase,
    /// `AnotherId` becomes `another_id`
    SnakeCase,
}

impl NamingPolicy {
    /// Wire name for a declared property name
    pub fn convert(&self, name: &'static str) -> Cow<'static, str> {
        match self {
            NamingPolicy::Preserve => Cow::Borrowed(name),
            NamingPolicy::CamelCase => Cow::Owned(SerializerUtils::to_camel_case(name)),
            NamingPolicy::SnakeCase => Cow::Owned(SerializerUtils::to_snake_case(name)),
        }
    }
}

/// Which properties are left out when encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IgnoreCondition {
    /// Every property is written; absent values as `null`
    #[default]
    Never,
    /// Properties holding an absent value are omitted
    WhenWritingNull,
    /// Properties equal to their type's default are omitted
    WhenWritingDefault,
}

/// Settings for [`Serializer`](super::Serializer)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SerializerOptions {
    /// Property name transformation
    pub naming_policy: NamingPolicy,
    /// Pretty-print with two-space indentation
    pub write_indented: bool,
    /// Tolerate a comma before a closing `}` or `]` when decoding
    pub allow_trailing_commas: bool,
    /// Property omission when encoding
    pub ignore_condition: IgnoreCondition,
    /// Match property names ignoring ASCII case when decoding
    pub case_insensitive_names: bool,
    /// Registered field converters
    pub converters: Vec<Converter>,
}

static SHARED_OPTIONS: OnceLock<SerializerOptions> = OnceLock::new();

impl SerializerOptions {
    /// Build the round-trip configuration.
    ///
    /// Every call allocates a new instance.
    pub fn round_trip() -> Self {
        Self::default()
            .with_naming_policy(NamingPolicy::Preserve)
            .with_indented(true)
            .with_trailing_commas(true)
            .with_ignore_condition(IgnoreCondition::WhenWritingNull)
            .with_converter(DateOnlyConverter::new())
    }

    /// The round-trip configuration, built once on first use
    pub fn shared() -> &'static SerializerOptions {
        SHARED_OPTIONS.get_or_init(|| {
            tracing::debug!("building shared serializer options");
            Self::round_trip()
        })
    }

    /// Set the naming policy
    pub fn with_naming_policy(mut self, policy: NamingPolicy) -> Self {
        self.naming_policy = policy;
        self
    }

    /// Enable or disable indented output
    pub fn with_indented(mut self, indented: bool) -> Self {
        self.write_indented = indented;
        self
    }

    /// Enable or disable trailing-comma tolerance
    pub fn with_trailing_commas(mut self, allow: bool) -> Self {
        self.allow_trailing_commas = allow;
        self
    }

    /// Set the omission policy
    pub fn with_ignore_condition(mut self, condition: IgnoreCondition) -> Self {
        self.ignore_condition = condition;
        self
    }

    /// Enable or disable case-insensitive property matching
    pub fn with_case_insensitive_names(mut self, enabled: bool) -> Self {
        self.case_insensitive_names = enabled;
        self
    }

    /// Register a converter
    pub fn with_converter(mut self, converter: impl Into<Converter>) -> Self {
        self.converters.push(converter.into());
        self
    }

    /// The date-only converter in effect; the last one registered wins
    pub fn date_only_converter(&self) -> Option<&DateOnlyConverter> {
        self.converters.iter().rev().find_map(|converter| match converter {
            Converter::DateOnly(date_only) => Some(date_only),
        })
    }

    /// Wire name for a declared property name
    pub fn property_name(&self, name: &'static str) -> Cow<'static, str> {
        self.naming_policy.convert(name)
    }

    /// Whether a wire key refers to a declared property name
    pub fn matches_property(&self, key: &str, name: &'static str) -> bool {
        let wire = self.property_name(name);
        if self.case_insensitive_names {
            wire.eq_ignore_ascii_case(key)
        } else {
            wire == key
        }
    }

    /// Whether an optional property should be written
    pub fn writes_optional<T>(&self, value: &Option<T>) -> bool {
        match self.ignore_condition {
            IgnoreCondition::Never => true,
            IgnoreCondition::WhenWritingNull | IgnoreCondition::WhenWritingDefault => {
                value.is_some()
            }
        }
    }

    /// Whether a non-optional property should be written
    pub fn writes_value<T: PartialEq + Default>(&self, value: &T) -> bool {
        match self.ignore_condition {
            IgnoreCondition::WhenWritingDefault => *value != T::default(),
            IgnoreCondition::Never | IgnoreCondition::WhenWritingNull => true,
        }
    }
}
