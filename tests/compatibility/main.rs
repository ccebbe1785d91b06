//! Wire-format compatibility tests
//!
//! These tests pin the exact JSON text produced for the fixture and check
//! that both options strategies agree byte for byte.

mod options_equivalence;
mod wire_format;

/// Compare two JSON documents with a readable failure message
pub fn assert_json_equal(actual: &[u8], expected: &str, context: &str) {
    let actual = std::str::from_utf8(actual).expect("encoded output is UTF-8");
    if actual != expected {
        panic!(
            "JSON differs in {}\nExpected:\n{}\nActual:\n{}",
            context, expected, actual
        );
    }
}
