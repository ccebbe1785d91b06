//! Fixed-point decimal number
//!
//! Values are stored as an integer mantissa and a count of fractional digits,
//! so `1.50` keeps its trailing zero when it is written back out.

use crate::error::{ParseError, ParseResult};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{self, Serialize, Serializer};
use serde_json::value::RawValue;
use std::fmt;
use std::str::FromStr;

/// A decimal number with up to 28 fractional digits and a 96-bit mantissa
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Decimal {
    mantissa: i128,
    scale: u32,
}

impl Decimal {
    /// Most fractional digits a value may carry
    pub const MAX_SCALE: u32 = 28;

    /// Largest magnitude of the mantissa (2^96 - 1)
    pub const MAX_MANTISSA: i128 = (1 << 96) - 1;

    /// Zero with no fractional digits
    pub const ZERO: Decimal = Decimal {
        mantissa: 0,
        scale: 0,
    };

    /// Build `mantissa * 10^-scale`
    pub fn new(mantissa: i128, scale: u32) -> ParseResult<Self> {
        if scale > Self::MAX_SCALE || mantissa.unsigned_abs() > Self::MAX_MANTISSA as u128 {
            return Err(ParseError::InvalidDecimal {
                input: format!("{}e-{}", mantissa, scale),
            });
        }
        Ok(Self { mantissa, scale })
    }

    /// The unscaled integer value
    pub fn mantissa(&self) -> i128 {
        self.mantissa
    }

    /// Number of fractional digits
    pub fn scale(&self) -> u32 {
        self.scale
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.mantissa.unsigned_abs().to_string();
        let scale = self.scale as usize;
        if self.mantissa < 0 {
            f.write_str("-")?;
        }
        if scale == 0 {
            return f.write_str(&digits);
        }

        let padded = format!("{:0>width$}", digits, width = scale + 1);
        let (whole, fraction) = padded.split_at(padded.len() - scale);
        write!(f, "{}.{}", whole, fraction)
    }
}

/// Parses JSON number syntax: optional `-`, digits, optional fraction and
/// optional exponent
impl FromStr for Decimal {
    type Err = ParseError;

    fn from_str(text: &str) -> ParseResult<Self> {
        let invalid = || ParseError::InvalidDecimal {
            input: text.to_string(),
        };

        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (number, exponent) = match body.find(|c: char| c == 'e' || c == 'E') {
            Some(at) => {
                let exponent = body[at + 1..].parse::<i64>().map_err(|_| invalid())?;
                (&body[..at], exponent)
            }
            None => (body, 0),
        };
        let (whole, fraction) = match number.split_once('.') {
            Some((whole, fraction)) if !fraction.is_empty() => (whole, fraction),
            Some(_) => return Err(invalid()),
            None => (number, ""),
        };
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
            return Err(invalid());
        }

        let mut mantissa: i128 = 0;
        for digit in whole.bytes().chain(fraction.bytes()) {
            mantissa = mantissa
                .checked_mul(10)
                .and_then(|m| m.checked_add(i128::from(digit - b'0')))
                .ok_or_else(invalid)?;
        }

        let mut scale = (fraction.len() as i64)
            .checked_sub(exponent)
            .ok_or_else(invalid)?;
        if scale < 0 {
            let shift = u32::try_from(scale.unsigned_abs()).map_err(|_| invalid())?;
            mantissa = 10_i128
                .checked_pow(shift)
                .and_then(|factor| mantissa.checked_mul(factor))
                .ok_or_else(invalid)?;
            scale = 0;
        }
        let scale = u32::try_from(scale).map_err(|_| invalid())?;

        if negative {
            mantissa = -mantissa;
        }
        Self::new(mantissa, scale).map_err(|_| invalid())
    }
}

/// Written as a bare JSON number, never as a string or a float
impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = RawValue::from_string(self.to_string())
            .map_err(<S::Error as ser::Error>::custom)?;
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        raw.get()
            .parse::<Decimal>()
            .map_err(<D::Error as de::Error>::custom)
    }
}
