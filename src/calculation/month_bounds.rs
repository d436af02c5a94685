//! First and last calendar day of a month.

use crate::models::CalendarDate;

/// Returns the first calendar day of the date's month.
pub fn start_of_month(date: CalendarDate) -> CalendarDate {
    // Day 1 exists in every month.
    CalendarDate::from_ymd(date.year(), date.month(), 1).unwrap_or(date)
}

/// Returns the last calendar day of the date's month.
///
/// Computed as the day before the first day of the following month, which
/// picks up 28, 29, 30 or 31 without a lookup table.
///
/// # Example
///
/// ```
/// use business_days::calculation::end_of_month;
/// use business_days::models::CalendarDate;
///
/// let leap = CalendarDate::parse("2024-02-10").unwrap();
/// assert_eq!(end_of_month(leap).to_string(), "2024-02-29");
///
/// let december = CalendarDate::parse("2025-12-03").unwrap();
/// assert_eq!(end_of_month(december).to_string(), "2025-12-31");
/// ```
pub fn end_of_month(date: CalendarDate) -> CalendarDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    CalendarDate::from_ymd(year, month, 1)
        .and_then(|first| first.as_naive().pred_opt())
        .map(CalendarDate::from)
        .unwrap_or(date)
}
