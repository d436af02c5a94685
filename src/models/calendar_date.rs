//! Calendar date model.
//!
//! This module contains [`CalendarDate`], a timezone-free `(year, month, day)`
//! value that can only be built from strict `YYYY-MM-DD` text.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EngineError, EngineResult};

/// ISO date format used for parsing and display.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date with no time-of-day or timezone component.
///
/// All business-day arithmetic runs on this type, so no local-time conversion
/// can shift a date by one day once it has been parsed.
///
/// # Example
///
/// ```
/// use business_days::models::CalendarDate;
///
/// let date = CalendarDate::parse("2025-09-05").unwrap();
/// assert_eq!(date.year(), 2025);
/// assert_eq!(date.month(), 9);
/// assert_eq!(date.day(), 5);
/// assert_eq!(date.to_string(), "2025-09-05");
///
/// assert!(CalendarDate::parse("2025-9-5").is_err());
/// assert!(CalendarDate::parse("2025-02-30").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Parses a strict `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDate`] when the text does not have the
    /// exact shape `DDDD-DD-DD`, or when it names a day that does not exist
    /// (for example `2025-02-29`).
    pub fn parse(text: &str) -> EngineResult<Self> {
        if !has_iso_shape(text) {
            return Err(EngineError::InvalidDate {
                input: text.to_string(),
                reason: "expected YYYY-MM-DD".to_string(),
            });
        }

        // Shape is checked, so every slice below is ASCII digits.
        let year: i32 = text[0..4].parse().unwrap_or_default();
        let month: u32 = text[5..7].parse().unwrap_or_default();
        let day: u32 = text[8..10].parse().unwrap_or_default();

        Self::from_ymd(year, month, day).ok_or_else(|| EngineError::InvalidDate {
            input: text.to_string(),
            reason: "no such calendar day".to_string(),
        })
    }

    /// Creates a date from its components, or `None` if the day does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// The month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// The day-of-month component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the underlying `chrono` date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// The following calendar day, or `None` at the end of chrono's range.
    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }
}

fn has_iso_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for CalendarDate {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_DATE_FORMAT))
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
