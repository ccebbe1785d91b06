//! Calendar date without a time of day or time zone

use crate::error::{ParseError, ParseResult};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Pattern used when no other is configured (`yyyy-MM-dd`)
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date with no time-of-day and no time zone.
///
/// Values are restricted to `0001-01-01..=9999-12-31` so that the default
/// textual form always has a four-digit year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateOnly(NaiveDate);

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid date-only constant"),
    }
}

impl DateOnly {
    /// Earliest representable date (0001-01-01)
    pub const MIN: DateOnly = DateOnly(ymd(1, 1, 1));

    /// Latest representable date (9999-12-31)
    pub const MAX: DateOnly = DateOnly(ymd(9999, 12, 31));

    /// Build a date from its components
    pub fn from_ymd(year: i32, month: u32, day: u32) -> ParseResult<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(ParseError::InvalidComponents { year, month, day })?;
        Self::try_from(date)
    }

    /// Build a date from literal components known to be valid at compile time
    pub(crate) const fn from_ymd_const(year: i32, month: u32, day: u32) -> Self {
        DateOnly(ymd(year, month, day))
    }

    /// Year component
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month component (1-12)
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day-of-month component (1-31)
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The underlying chrono date
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl Default for DateOnly {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<NaiveDate> for DateOnly {
    type Error = ParseError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        if date < Self::MIN.0 || date > Self::MAX.0 {
            return Err(ParseError::OutOfRange {
                date: date.to_string(),
            });
        }
        Ok(DateOnly(date))
    }
}

impl From<DateOnly> for NaiveDate {
    fn from(date: DateOnly) -> Self {
        date.0
    }
}

impl fmt::Display for DateOnly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DEFAULT_DATE_FORMAT))
    }
}

impl FromStr for DateOnly {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(s, DEFAULT_DATE_FORMAT).map_err(|_| {
            ParseError::InvalidDate {
                input: s.to_string(),
                format: DEFAULT_DATE_FORMAT.to_string(),
            }
        })?;
        Self::try_from(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_only_components() {
        let date = DateOnly::from_ymd(2022, 1, 1).unwrap();
        assert_eq!(date.year(), 2022);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 1);
    }

    #[test]
    fn test_date_only_invalid_components() {
        assert_eq!(
            DateOnly::from_ymd(2022, 13, 40),
            Err(ParseError::InvalidComponents {
                year: 2022,
                month: 13,
                day: 40
            })
        );
        assert!(DateOnly::from_ymd(2023, 2, 29).is_err());
        assert!(DateOnly::from_ymd(2024, 2, 29).is_ok());
    }

    #[test]
    fn test_date_only_range() {
        assert!(DateOnly::from_ymd(0, 12, 31).is_err());
        assert!(DateOnly::from_ymd(10000, 1, 1).is_err());
        assert_eq!(DateOnly::from_ymd(1, 1, 1).unwrap(), DateOnly::MIN);
        assert_eq!(DateOnly::from_ymd(9999, 12, 31).unwrap(), DateOnly::MAX);
    }

    #[test]
    fn test_date_only_display_pads() {
        assert_eq!(DateOnly::MIN.to_string(), "0001-01-01");
        assert_eq!(DateOnly::from_ymd(987, 6, 5).unwrap().to_string(), "0987-06-05");
    }

    #[test]
    fn test_from_str_trait() {
        let date: DateOnly = "2022-01-01".parse().unwrap();
        assert_eq!(date, DateOnly::from_ymd(2022, 1, 1).unwrap());
        assert!("2022/13/40".parse::<DateOnly>().is_err());
    }

    #[test]
    fn test_default_is_min() {
        assert_eq!(DateOnly::default(), DateOnly::MIN);
    }
}
