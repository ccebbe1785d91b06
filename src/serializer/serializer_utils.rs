//! Utility functions for serialization operations
//!
//! This module provides the text-level helpers the serializer relies on:
//! property-name casing transforms and trailing-comma normalisation of JSON
//! input.

use std::borrow::Cow;

/// Utility functions for serialization operations
pub struct SerializerUtils;

impl SerializerUtils {
    /// Convert a PascalCase property name to camelCase.
    ///
    /// A leading run of capitals is lowered as a whole, except for the last
    /// capital of the run when it starts the next word (`URLValue` becomes
    /// `urlValue`).
    pub fn to_camel_case(name: &str) -> String {
        let chars: Vec<char> = name.chars().collect();
        let mut out = String::with_capacity(name.len());

        for (i, &c) in chars.iter().enumerate() {
            if !c.is_uppercase() {
                out.extend(chars[i..].iter());
                return out;
            }
            let next_is_lower = chars.get(i + 1).map_or(false, |n| n.is_lowercase());
            if i > 0 && next_is_lower {
                out.extend(chars[i..].iter());
                return out;
            }
            out.extend(c.to_lowercase());
        }

        out
    }

    /// Convert a PascalCase property name to snake_case.
    ///
    /// Digits stay attached to the word before them (`IntegerVal1` becomes
    /// `integer_val1`).
    pub fn to_snake_case(name: &str) -> String {
        let chars: Vec<char> = name.chars().collect();
        let mut out = String::with_capacity(name.len() + 4);

        for (i, &c) in chars.iter().enumerate() {
            if c.is_uppercase() {
                if i > 0 {
                    let prev = chars[i - 1];
                    let next_is_lower = chars.get(i + 1).map_or(false, |n| n.is_lowercase());
                    let boundary = prev.is_lowercase()
                        || prev.is_ascii_digit()
                        || (prev.is_uppercase() && next_is_lower);
                    if boundary {
                        out.push('_');
                    }
                }
                out.extend(c.to_lowercase());
            } else {
                out.push(c);
            }
        }

        out
    }

    /// Remove commas that directly precede a closing `}` or `]`.
    ///
    /// Only a comma that follows an element is removed: `{,}` and `[1,,]` are
    /// left as they are so the parser rejects them. Commas inside string
    /// literals are left alone. Input without trailing commas is returned
    /// borrowed.
    pub fn strip_trailing_commas(input: &[u8]) -> Cow<'_, [u8]> {
        let mut output: Option<Vec<u8>> = None;
        let mut in_string = false;
        let mut escaped = false;
        let mut last_significant: Option<u8> = None;

        for (i, &byte) in input.iter().enumerate() {
            if in_string {
                if escaped {
                    escaped = false;
                } else if byte == b'\\' {
                    escaped = true;
                } else if byte == b'"' {
                    in_string = false;
                    last_significant = Some(byte);
                }
            } else if byte == b'"' {
                in_string = true;
            } else if byte == b','
                && Self::ends_element(last_significant)
                && Self::closes_after(&input[i + 1..])
            {
                output.get_or_insert_with(|| input[..i].to_vec());
                continue;
            } else if !byte.is_ascii_whitespace() {
                last_significant = Some(byte);
            }

            if let Some(out) = output.as_mut() {
                out.push(byte);
            }
        }

        match output {
            Some(out) => Cow::Owned(out),
            None => Cow::Borrowed(input),
        }
    }

    fn ends_element(last_significant: Option<u8>) -> bool {
        !matches!(last_significant, None | Some(b'{' | b'[' | b',' | b':'))
    }

    fn closes_after(rest: &[u8]) -> bool {
        rest.iter()
            .find(|b| !b.is_ascii_whitespace())
            .map_or(false, |&b| b == b'}' || b == b']')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(SerializerUtils::to_camel_case("Id"), "id");
        assert_eq!(SerializerUtils::to_camel_case("AnotherId"), "anotherId");
        assert_eq!(SerializerUtils::to_camel_case("IntegerVal1"), "integerVal1");
        assert_eq!(SerializerUtils::to_camel_case("URLValue"), "urlValue");
        assert_eq!(SerializerUtils::to_camel_case("ID"), "id");
        assert_eq!(SerializerUtils::to_camel_case("already"), "already");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(SerializerUtils::to_snake_case("Id"), "id");
        assert_eq!(SerializerUtils::to_snake_case("AnotherId"), "another_id");
        assert_eq!(SerializerUtils::to_snake_case("IntegerVal1"), "integer_val1");
        assert_eq!(SerializerUtils::to_snake_case("Address2"), "address2");
        assert_eq!(SerializerUtils::to_snake_case("NestedDate"), "nested_date");
        assert_eq!(SerializerUtils::to_snake_case("URLValue"), "url_value");
    }

    #[test]
    fn test_strip_trailing_commas() {
        let input = br#"{"a": [1, 2,], "b": {"c": 3, },}"#;
        let stripped = SerializerUtils::strip_trailing_commas(input);
        assert_eq!(&*stripped, br#"{"a": [1, 2], "b": {"c": 3 }}"#);
    }

    #[test]
    fn test_strip_trailing_commas_needs_an_element() {
        for input in ["{,}", "[,]", ",]", r#"{"a":,}"#] {
            let stripped = SerializerUtils::strip_trailing_commas(input.as_bytes());
            assert_eq!(&*stripped, input.as_bytes(), "rewrote {}", input);
        }

        let stripped = SerializerUtils::strip_trailing_commas(b"[1,,]");
        assert_eq!(&*stripped, b"[1,,]");
        let stripped = SerializerUtils::strip_trailing_commas(b"{\"a\": {,},}");
        assert_eq!(&*stripped, b"{\"a\": {,}}");
        let stripped = SerializerUtils::strip_trailing_commas(b"{\"a\": \"x\",}");
        assert_eq!(&*stripped, b"{\"a\": \"x\"}");
    }

    #[test]
    fn test_strip_trailing_commas_ignores_strings() {
        let input = br#"{"a": ",}", "b": "\",]"}"#;
        let stripped = SerializerUtils::strip_trailing_commas(input);
        assert!(matches!(stripped, Cow::Borrowed(_)));
        assert_eq!(&*stripped, &input[..]);
    }

    #[test]
    fn test_strip_trailing_commas_across_newlines() {
        let input = b"{\n  \"a\": 1,\n}";
        let stripped = SerializerUtils::strip_trailing_commas(input);
        assert_eq!(&*stripped, b"{\n  \"a\": 1\n}");
    }
}
