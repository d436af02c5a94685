//! Holiday map model.
//!
//! This module contains [`HolidayMap`], the flat `ISO date -> holiday name`
//! mapping produced by the holiday extractors and consumed by the calculator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::CalendarDate;

/// A mapping from ISO date strings (`YYYY-MM-DD`) to holiday names.
///
/// Keys are kept sorted, which for ISO dates is chronological order. A date
/// that is not a key is not a holiday; an empty map means no holidays are
/// known.
///
/// # Example
///
/// ```
/// use business_days::models::{CalendarDate, HolidayMap};
///
/// let mut holidays = HolidayMap::new();
/// holidays.insert("2025-12-25", "Christmas Day");
///
/// let christmas = CalendarDate::parse("2025-12-25").unwrap();
/// assert!(holidays.is_holiday(christmas));
/// assert_eq!(holidays.get("2025-12-25"), Some("Christmas Day"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayMap(BTreeMap<String, String>);

impl HolidayMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from an arbitrary JSON value.
    ///
    /// Only an object whose values are all strings is accepted. Any other
    /// shape returns `None`, which callers treat as "no holidays".
    pub fn from_json(value: &Value) -> Option<Self> {
        let Value::Object(entries) = value else {
            return None;
        };

        entries
            .iter()
            .map(|(date, name)| name.as_str().map(|n| (date.clone(), n.to_string())))
            .collect::<Option<BTreeMap<_, _>>>()
            .map(Self)
    }

    /// Returns true if the date's ISO string is a key of this map.
    pub fn is_holiday(&self, date: CalendarDate) -> bool {
        self.0.contains_key(&date.to_string())
    }

    /// Looks up the holiday name for an ISO date string.
    pub fn get(&self, date: &str) -> Option<&str> {
        self.0.get(date).map(String::as_str)
    }

    /// Adds or replaces an entry.
    pub fn insert(&mut self, date: impl Into<String>, name: impl Into<String>) {
        self.0.insert(date.into(), name.into());
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in date order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(d, n)| (d.as_str(), n.as_str()))
    }

    /// Returns the entries whose key falls in the given year.
    pub fn for_year(&self, year: i32) -> Self {
        let prefix = format!("{:04}-", year);
        self.0
            .iter()
            .filter(|(date, _)| date.starts_with(&prefix))
            .map(|(d, n)| (d.clone(), n.clone()))
            .collect()
    }
}

impl FromIterator<(String, String)> for HolidayMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
