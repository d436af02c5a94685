//! Day detection logic.
//!
//! This module provides utilities for determining the day type (weekday,
//! Saturday, Sunday) of a calendar date. Weekends are never business days.

use chrono::Datelike;

use crate::models::CalendarDate;

/// Represents the type of day for business-day counting.
///
/// # Example
///
/// ```
/// use business_days::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// assert!(day_type.is_weekend());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl DayType {
    /// Returns true for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        !matches!(self, DayType::Weekday)
    }
}

/// Returns the weekday number of a date, with 0 for Sunday and 6 for Saturday.
///
/// # Example
///
/// ```
/// use business_days::calculation::weekday_index;
/// use business_days::models::CalendarDate;
///
/// // 2025-09-07 is a Sunday, 2025-09-13 a Saturday
/// assert_eq!(weekday_index(CalendarDate::parse("2025-09-07").unwrap()), 0);
/// assert_eq!(weekday_index(CalendarDate::parse("2025-09-13").unwrap()), 6);
/// ```
pub fn weekday_index(date: CalendarDate) -> u32 {
    date.as_naive().weekday().num_days_from_sunday()
}

/// Determines the day type for a given date from its [`weekday_index`].
///
/// # Example
///
/// ```
/// use business_days::calculation::{get_day_type, DayType};
/// use business_days::models::CalendarDate;
///
/// // 2025-09-20 is a Saturday
/// let saturday = CalendarDate::parse("2025-09-20").unwrap();
/// assert_eq!(get_day_type(saturday), DayType::Saturday);
///
/// // 2025-09-01 is a Monday
/// let monday = CalendarDate::parse("2025-09-01").unwrap();
/// assert_eq!(get_day_type(monday), DayType::Weekday);
/// ```
pub fn get_day_type(date: CalendarDate) -> DayType {
    match weekday_index(date) {
        0 => DayType::Sunday,
        6 => DayType::Saturday,
        _ => DayType::Weekday,
    }
}
