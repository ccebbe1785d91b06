//! The literal record every round-trip iteration encodes

use super::date_only::DateOnly;
use super::decimal::Decimal;
use super::record::{Nested, Record};
use chrono::{NaiveDateTime, NaiveTime};
use std::sync::OnceLock;

const FIXTURE_DATE: DateOnly = DateOnly::from_ymd_const(2022, 1, 1);

static FIXTURE: OnceLock<Record> = OnceLock::new();

/// The benchmark fixture, built on first use and shared for the rest of the
/// process
pub fn fixture() -> &'static Record {
    FIXTURE.get_or_init(build_fixture)
}

fn build_fixture() -> Record {
    Record {
        id: "Id1".to_string(),
        another_id: "Id2".to_string(),
        name: "Name".to_string(),
        decimal_value: Decimal::ZERO,
        contact_name: "ContactName".to_string(),
        contact_email: "a@b.com".to_string(),
        another_name: "AnotherName".to_string(),
        address1: "Address1".to_string(),
        address2: "Address2".to_string(),
        address3: "Address3".to_string(),
        city: "Portsmouth".to_string(),
        country: "fdfdsaf".to_string(),
        post_code: "AB12CD".to_string(),
        integer_val1: 420,
        integer_val2: 20,
        opened: FIXTURE_DATE,
        closed: Some(FIXTURE_DATE),
        another_class: Nested {
            nested1: "NestedStringData".to_string(),
            nested_date: NaiveDateTime::new(FIXTURE_DATE.as_naive(), NaiveTime::MIN),
        },
    }
}
