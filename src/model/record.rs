//! The benchmark record and its nested sub-record

use super::date_only::DateOnly;
use super::decimal::Decimal;
use crate::serializer::contract::{
    ContractSeed, DateOnlySeed, DecodeContext, FieldWriter, JsonContract, OptionalDateOnlySeed,
};
use crate::serializer::options::SerializerOptions;
use chrono::NaiveDateTime;
use serde::de::{IgnoredAny, MapAccess};
use serde::ser::SerializeMap;

/// Record used as the round-trip input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    /// Primary identifier
    pub id: String,
    /// Secondary identifier
    pub another_id: String,
    /// Display name
    pub name: String,
    /// Fixed-point amount
    pub decimal_value: Decimal,
    /// Contact person
    pub contact_name: String,
    /// Contact e-mail address
    pub contact_email: String,
    /// Alternative name
    pub another_name: String,
    /// First address line
    pub address1: String,
    /// Second address line
    pub address2: String,
    /// Third address line
    pub address3: String,
    /// City
    pub city: String,
    /// Country
    pub country: String,
    /// Postal code
    pub post_code: String,
    /// First integer value
    pub integer_val1: i32,
    /// Second integer value
    pub integer_val2: i32,
    /// Opening date
    pub opened: DateOnly,
    /// Closing date, absent while open
    pub closed: Option<DateOnly>,
    /// Owned sub-record
    pub another_class: Nested,
}

/// Sub-record owned by a [`Record`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Nested {
    /// Free text
    pub nested1: String,
    /// Full timestamp without zone
    pub nested_date: NaiveDateTime,
}

impl JsonContract for Record {
    const NAME: &'static str = "Record";

    const FIELDS: &'static [&'static str] = &[
        "Id",
        "AnotherId",
        "Name",
        "DecimalValue",
        "ContactName",
        "ContactEmail",
        "AnotherName",
        "Address1",
        "Address2",
        "Address3",
        "City",
        "Country",
        "PostCode",
        "IntegerVal1",
        "IntegerVal2",
        "Opened",
        "Closed",
        "AnotherClass",
    ];

    fn write_fields<M: SerializeMap>(
        &self,
        map: &mut M,
        options: &SerializerOptions,
    ) -> Result<(), M::Error> {
        let mut fields = FieldWriter::new(map, options);
        fields.value("Id", &self.id)?;
        fields.value("AnotherId", &self.another_id)?;
        fields.value("Name", &self.name)?;
        fields.value("DecimalValue", &self.decimal_value)?;
        fields.value("ContactName", &self.contact_name)?;
        fields.value("ContactEmail", &self.contact_email)?;
        fields.value("AnotherName", &self.another_name)?;
        fields.value("Address1", &self.address1)?;
        fields.value("Address2", &self.address2)?;
        fields.value("Address3", &self.address3)?;
        fields.value("City", &self.city)?;
        fields.value("Country", &self.country)?;
        fields.value("PostCode", &self.post_code)?;
        fields.value("IntegerVal1", &self.integer_val1)?;
        fields.value("IntegerVal2", &self.integer_val2)?;
        fields.date("Opened", &self.opened)?;
        fields.optional_date("Closed", &self.closed)?;
        fields.object("AnotherClass", &self.another_class)
    }

    fn read_field<'de, A: MapAccess<'de>>(
        &mut self,
        field: &'static str,
        map: &mut A,
        ctx: &DecodeContext<'_>,
    ) -> Result<(), A::Error> {
        match field {
            "Id" => self.id = map.next_value()?,
            "AnotherId" => self.another_id = map.next_value()?,
            "Name" => self.name = map.next_value()?,
            "DecimalValue" => self.decimal_value = map.next_value()?,
            "ContactName" => self.contact_name = map.next_value()?,
            "ContactEmail" => self.contact_email = map.next_value()?,
            "AnotherName" => self.another_name = map.next_value()?,
            "Address1" => self.address1 = map.next_value()?,
            "Address2" => self.address2 = map.next_value()?,
            "Address3" => self.address3 = map.next_value()?,
            "City" => self.city = map.next_value()?,
            "Country" => self.country = map.next_value()?,
            "PostCode" => self.post_code = map.next_value()?,
            "IntegerVal1" => self.integer_val1 = map.next_value()?,
            "IntegerVal2" => self.integer_val2 = map.next_value()?,
            "Opened" => self.opened = map.next_value_seed(DateOnlySeed::new(ctx))?,
            "Closed" => self.closed = map.next_value_seed(OptionalDateOnlySeed::new(ctx))?,
            "AnotherClass" => {
                self.another_class = map.next_value_seed(ContractSeed::new(ctx))?
            }
            _ => {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(())
    }
}

impl JsonContract for Nested {
    const NAME: &'static str = "Nested";

    const FIELDS: &'static [&'static str] = &["Nested1", "NestedDate"];

    fn write_fields<M: SerializeMap>(
        &self,
        map: &mut M,
        options: &SerializerOptions,
    ) -> Result<(), M::Error> {
        let mut fields = FieldWriter::new(map, options);
        fields.value("Nested1", &self.nested1)?;
        fields.value("NestedDate", &self.nested_date)
    }

    fn read_field<'de, A: MapAccess<'de>>(
        &mut self,
        field: &'static str,
        map: &mut A,
        _ctx: &DecodeContext<'_>,
    ) -> Result<(), A::Error> {
        match field {
            "Nested1" => self.nested1 = map.next_value()?,
            "NestedDate" => self.nested_date = map.next_value()?,
            _ => {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(())
    }
}
