//! Exact encoded form of the fixture

use super::assert_json_equal;
use serializer_options_bench::prelude::*;
use serializer_options_bench::serializer::{IgnoreCondition, NamingPolicy};

const FIXTURE_INDENTED: &str = r#"{
  "Id": "Id1",
  "AnotherId": "Id2",
  "Name": "Name",
  "DecimalValue": 0,
  "ContactName": "ContactName",
  "ContactEmail": "a@b.com",
  "AnotherName": "AnotherName",
  "Address1": "Address1",
  "Address2": "Address2",
  "Address3": "Address3",
  "City": "Portsmouth",
  "Country": "fdfdsaf",
  "PostCode": "AB12CD",
  "IntegerVal1": 420,
  "IntegerVal2": 20,
  "Opened": "2022-01-01",
  "Closed": "2022-01-01",
  "AnotherClass": {
    "Nested1": "NestedStringData",
    "NestedDate": "2022-01-01T00:00:00"
  }
}"#;

#[test]
fn test_fixture_indented_output() {
    let bytes = Serializer::serialize(fixture(), SerializerOptions::shared())
        .expect("Failed to serialize fixture");
    assert_json_equal(&bytes, FIXTURE_INDENTED, "indented fixture");
}

#[test]
fn test_fixture_decodes_from_pinned_text() {
    let decoded: Record = Serializer::deserialize_str(FIXTURE_INDENTED, SerializerOptions::shared())
        .expect("Failed to deserialize pinned fixture");
    assert_eq!(&decoded, fixture());
}

#[test]
fn test_closed_absent_has_no_key() {
    let record = Record {
        closed: None,
        ..fixture().clone()
    };
    let text = Serializer::serialize_to_string(&record, SerializerOptions::shared())
        .expect("Failed to serialize record");

    let expected = FIXTURE_INDENTED.replace("  \"Closed\": \"2022-01-01\",\n", "");
    assert_json_equal(text.as_bytes(), &expected, "closed omitted");
}

#[test]
fn test_closed_written_as_null_when_not_ignored() {
    let record = Record {
        closed: None,
        ..fixture().clone()
    };
    let options = SerializerOptions::round_trip().with_ignore_condition(IgnoreCondition::Never);
    let text = Serializer::serialize_to_string(&record, &options)
        .expect("Failed to serialize record");

    let expected = FIXTURE_INDENTED.replace("\"Closed\": \"2022-01-01\"", "\"Closed\": null");
    assert_json_equal(text.as_bytes(), &expected, "closed null");
}

#[test]
fn test_structured_dates_without_converter() {
    let options = SerializerOptions::default().with_naming_policy(NamingPolicy::Preserve);
    let text = Serializer::serialize_to_string(fixture(), &options)
        .expect("Failed to serialize fixture");

    assert!(text.contains(r#""Opened":{"Year":2022,"Month":1,"Day":1}"#));
    assert!(text.contains(r#""Closed":{"Year":2022,"Month":1,"Day":1}"#));

    let decoded: Record = Serializer::deserialize_str(&text, &options)
        .expect("Failed to deserialize");
    assert_eq!(&decoded, fixture());
}

#[test]
fn test_custom_date_pattern() {
    let converter = DateOnlyConverter::with_format(Some("%d/%m/%Y")).expect("valid pattern");
    let options = SerializerOptions::round_trip().with_converter(converter);
    let text = Serializer::serialize_to_string(fixture(), &options)
        .expect("Failed to serialize fixture");

    assert!(text.contains(r#""Opened": "01/01/2022""#));
    let decoded: Record = Serializer::deserialize_str(&text, &options)
        .expect("Failed to deserialize");
    assert_eq!(&decoded, fixture());
}

#[test]
fn test_malformed_date_fails_without_partial_result() {
    let text = FIXTURE_INDENTED.replace("\"Opened\": \"2022-01-01\"", "\"Opened\": \"2022/13/40\"");
    let result = Serializer::deserialize_str::<Record>(&text, SerializerOptions::shared());

    match result {
        Err(SerializerError::InvalidDate(ParseError::InvalidDate { input, format })) => {
            assert_eq!(input, "2022/13/40");
            assert_eq!(format, "%Y-%m-%d");
        }
        Err(other) => panic!("unexpected error: {}", other),
        Ok(record) => panic!("decoded a record despite malformed date: {:?}", record),
    }
}

#[test]
fn test_decimal_written_as_number() {
    let record = Record {
        decimal_value: "1250.50".parse().expect("valid decimal"),
        ..fixture().clone()
    };
    let text = Serializer::serialize_to_string(&record, SerializerOptions::shared())
        .expect("Failed to serialize record");

    let expected = FIXTURE_INDENTED.replace("\"DecimalValue\": 0,", "\"DecimalValue\": 1250.50,");
    assert_json_equal(text.as_bytes(), &expected, "decimal value");

    let decoded: Record = Serializer::deserialize_str(&text, SerializerOptions::shared())
        .expect("Failed to deserialize");
    assert_eq!(decoded, record);
}
