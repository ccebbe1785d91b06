//! Options-aware serde glue
//!
//! serde derives cannot see runtime settings, so record types describe their
//! properties through [`JsonContract`] and the serializer drives them with the
//! active [`SerializerOptions`]: [`Contextual`] on the way out, [`ContractSeed`]
//! on the way in.

use super::converter::JsonConverter;
use super::options::SerializerOptions;
use crate::error::ParseError;
use crate::model::date_only::DateOnly;
use serde::de::{self, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, Unexpected, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;

/// Property names of the structured date-only form
const DATE_PARTS: &[&str] = &["Year", "Month", "Day"];

/// A type whose properties can be written and read under [`SerializerOptions`]
pub trait JsonContract: Default {
    /// Type name used in error messages
    const NAME: &'static str;

    /// Declared property names, in wire order
    const FIELDS: &'static [&'static str];

    /// Write every property that the options do not omit
    fn write_fields<M: SerializeMap>(
        &self,
        map: &mut M,
        options: &SerializerOptions,
    ) -> Result<(), M::Error>;

    /// Read the value of one declared property into `self`
    fn read_field<'de, A: MapAccess<'de>>(
        &mut self,
        field: &'static str,
        map: &mut A,
        ctx: &DecodeContext<'_>,
    ) -> Result<(), A::Error>;
}

/// State shared by every seed of one decode
pub struct DecodeContext<'a> {
    options: &'a SerializerOptions,
    parse_error: RefCell<Option<ParseError>>,
}

impl<'a> DecodeContext<'a> {
    /// Create a context for one decode
    pub fn new(options: &'a SerializerOptions) -> Self {
        Self {
            options,
            parse_error: RefCell::new(None),
        }
    }

    /// The options in effect
    pub fn options(&self) -> &'a SerializerOptions {
        self.options
    }

    /// Keep the first converter failure so it can be reported as-is
    pub fn record_parse_error(&self, error: ParseError) {
        let mut slot = self.parse_error.borrow_mut();
        if slot.is_none() {
            *slot = Some(error);
        }
    }

    /// Take the recorded converter failure, if any
    pub fn take_parse_error(&self) -> Option<ParseError> {
        self.parse_error.borrow_mut().take()
    }

    fn parse_failure<E: de::Error>(&self, error: ParseError) -> E {
        tracing::warn!(%error, "date-only property rejected");
        let serde_error = E::custom(&error);
        self.record_parse_error(error);
        serde_error
    }
}

/// Serializes a [`JsonContract`] value under a set of options
pub struct Contextual<'a, T> {
    value: &'a T,
    options: &'a SerializerOptions,
}

impl<'a, T> Contextual<'a, T> {
    /// Wrap a value for encoding
    pub fn new(value: &'a T, options: &'a SerializerOptions) -> Self {
        Self { value, options }
    }
}

impl<T: JsonContract> Serialize for Contextual<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        self.value.write_fields(&mut map, self.options)?;
        map.end()
    }
}

/// Writes properties of a [`JsonContract`] honouring naming and omission rules
pub struct FieldWriter<'a, M> {
    map: &'a mut M,
    options: &'a SerializerOptions,
}

impl<'a, M: SerializeMap> FieldWriter<'a, M> {
    /// Wrap an open map
    pub fn new(map: &'a mut M, options: &'a SerializerOptions) -> Self {
        Self { map, options }
    }

    fn entry<V: Serialize + ?Sized>(
        &mut self,
        name: &'static str,
        value: &V,
    ) -> Result<(), M::Error> {
        self.map
            .serialize_entry(&*self.options.property_name(name), value)
    }

    /// Write a plain value
    pub fn value<T>(&mut self, name: &'static str, value: &T) -> Result<(), M::Error>
    where
        T: Serialize + PartialEq + Default,
    {
        if self.options.writes_value(value) {
            self.entry(name, value)?;
        }
        Ok(())
    }

    /// Write a date-only value through the registered converter
    pub fn date(&mut self, name: &'static str, value: &DateOnly) -> Result<(), M::Error> {
        if self.options.writes_value(value) {
            self.entry(name, &DateOnlyValue::new(value, self.options))?;
        }
        Ok(())
    }

    /// Write an optional date-only value; `None` is `null` unless omitted
    pub fn optional_date(
        &mut self,
        name: &'static str,
        value: &Option<DateOnly>,
    ) -> Result<(), M::Error> {
        if !self.options.writes_optional(value) {
            return Ok(());
        }
        match value {
            Some(date) => self.entry(name, &DateOnlyValue::new(date, self.options)),
            None => self.entry(name, &None::<()>),
        }
    }

    /// Write a nested contract as an object
    pub fn object<T>(&mut self, name: &'static str, value: &T) -> Result<(), M::Error>
    where
        T: JsonContract + PartialEq,
    {
        if self.options.writes_value(value) {
            self.entry(name, &Contextual::new(value, self.options))?;
        }
        Ok(())
    }
}

/// A date-only value as written under a set of options
struct DateOnlyValue<'a> {
    date: &'a DateOnly,
    options: &'a SerializerOptions,
}

impl<'a> DateOnlyValue<'a> {
    fn new(date: &'a DateOnly, options: &'a SerializerOptions) -> Self {
        Self { date, options }
    }
}

impl Serialize for DateOnlyValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Some(converter) = self.options.date_only_converter() {
            return serializer.serialize_str(&converter.write(self.date));
        }

        let mut map = serializer.serialize_map(Some(DATE_PARTS.len()))?;
        map.serialize_entry(&*self.options.property_name("Year"), &self.date.year())?;
        map.serialize_entry(&*self.options.property_name("Month"), &self.date.month())?;
        map.serialize_entry(&*self.options.property_name("Day"), &self.date.day())?;
        map.end()
    }
}

/// Resolves a wire key to one of the declared property names
#[derive(Clone, Copy)]
struct FieldSeed<'a> {
    ctx: &'a DecodeContext<'a>,
    fields: &'static [&'static str],
}

impl<'de> DeserializeSeed<'de> for FieldSeed<'_> {
    type Value = Option<&'static str>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_str(self)
    }
}

impl<'de> Visitor<'de> for FieldSeed<'_> {
    type Value = Option<&'static str>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a property name")
    }

    fn visit_str<E: de::Error>(self, key: &str) -> Result<Self::Value, E> {
        let options = self.ctx.options();
        Ok(self
            .fields
            .iter()
            .copied()
            .find(|&field| options.matches_property(key, field)))
    }
}

/// Decodes a [`JsonContract`] value under a set of options
pub struct ContractSeed<'a, T> {
    ctx: &'a DecodeContext<'a>,
    marker: PhantomData<fn() -> T>,
}

impl<'a, T> ContractSeed<'a, T> {
    /// Create a seed bound to a decode context
    pub fn new(ctx: &'a DecodeContext<'a>) -> Self {
        Self {
            ctx,
            marker: PhantomData,
        }
    }
}

impl<'de, T: JsonContract> DeserializeSeed<'de> for ContractSeed<'_, T> {
    type Value = T;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<T, D::Error> {
        deserializer.deserialize_map(self)
    }
}

impl<'de, T: JsonContract> Visitor<'de> for ContractSeed<'_, T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "struct {}", T::NAME)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<T, A::Error> {
        let mut value = T::default();
        let keys = FieldSeed {
            ctx: self.ctx,
            fields: T::FIELDS,
        };

        while let Some(field) = map.next_key_seed(keys)? {
            match field {
                Some(name) => value.read_field(name, &mut map, self.ctx)?,
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(value)
    }
}

/// Decodes a date-only property, as a string when a converter is registered
/// and as a `{Year, Month, Day}` object otherwise
pub struct DateOnlySeed<'a> {
    ctx: &'a DecodeContext<'a>,
}

impl<'a> DateOnlySeed<'a> {
    /// Create a seed bound to a decode context
    pub fn new(ctx: &'a DecodeContext<'a>) -> Self {
        Self { ctx }
    }
}

impl<'de> DeserializeSeed<'de> for DateOnlySeed<'_> {
    type Value = DateOnly;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<DateOnly, D::Error> {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for DateOnlySeed<'_> {
    type Value = DateOnly;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self.ctx.options().date_only_converter() {
            Some(converter) => {
                write!(formatter, "a date string in the form '{}'", converter.format())
            }
            None => formatter.write_str("a date object with Year, Month and Day"),
        }
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<DateOnly, E> {
        let Some(converter) = self.ctx.options().date_only_converter() else {
            return Err(E::invalid_type(Unexpected::Str(text), &self));
        };
        converter
            .read(text)
            .map_err(|error| self.ctx.parse_failure(error))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<DateOnly, A::Error> {
        if self.ctx.options().date_only_converter().is_some() {
            return Err(de::Error::invalid_type(Unexpected::Map, &self));
        }

        let (mut year, mut month, mut day) = (None, None, None);
        while let Some(field) = map.next_key_seed(FieldSeed {
            ctx: self.ctx,
            fields: DATE_PARTS,
        })? {
            match field {
                Some("Year") => year = Some(map.next_value::<i32>()?),
                Some("Month") => month = Some(map.next_value::<u32>()?),
                Some("Day") => day = Some(map.next_value::<u32>()?),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        let year = year.ok_or_else(|| de::Error::missing_field("Year"))?;
        let month = month.ok_or_else(|| de::Error::missing_field("Month"))?;
        let day = day.ok_or_else(|| de::Error::missing_field("Day"))?;

        DateOnly::from_ymd(year, month, day).map_err(|error| self.ctx.parse_failure(error))
    }
}

/// Decodes an optional date-only property; `null` is `None`
pub struct OptionalDateOnlySeed<'a> {
    ctx: &'a DecodeContext<'a>,
}

impl<'a> OptionalDateOnlySeed<'a> {
    /// Create a seed bound to a decode context
    pub fn new(ctx: &'a DecodeContext<'a>) -> Self {
        Self { ctx }
    }
}

impl<'de> DeserializeSeed<'de> for OptionalDateOnlySeed<'_> {
    type Value = Option<DateOnly>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_option(self)
    }
}

impl<'de> Visitor<'de> for OptionalDateOnlySeed<'_> {
    type Value = Option<DateOnly>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an optional date")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        DateOnlySeed::new(self.ctx).deserialize(deserializer).map(Some)
    }
}
