//! Business-day counting.
//!
//! A business day is a calendar day that is neither a Saturday nor a Sunday
//! and is not listed in the applicable [`HolidayMap`]. Weekend exclusion takes
//! precedence, so a holiday falling on a weekend has no additional effect.

use std::iter;

use tracing::debug;

use crate::error::EngineResult;
use crate::models::{BusinessDayReport, CalendarDate, HolidayMap};

use super::day_detection::get_day_type;
use super::month_bounds::{end_of_month, start_of_month};

/// Counts business days from `start` to `end`, both inclusive.
///
/// Returns 0 when `start` is after `end`.
///
/// # Example
///
/// ```
/// use business_days::calculation::count_business_days;
/// use business_days::models::{CalendarDate, HolidayMap};
///
/// let start = CalendarDate::parse("2025-09-01").unwrap(); // Monday
/// let end = CalendarDate::parse("2025-09-07").unwrap(); // Sunday
/// assert_eq!(count_business_days(start, end, None), 5);
///
/// let mut holidays = HolidayMap::new();
/// holidays.insert("2025-09-03", "Test Holiday");
/// assert_eq!(count_business_days(start, end, Some(&holidays)), 4);
/// ```
pub fn count_business_days(
    start: CalendarDate,
    end: CalendarDate,
    holidays: Option<&HolidayMap>,
) -> u32 {
    let days = iter::successors(Some(start), CalendarDate::succ).take_while(|d| *d <= end);

    let mut count = 0;
    for day in days {
        if get_day_type(day).is_weekend() {
            continue;
        }
        if holidays.is_some_and(|h| h.is_holiday(day)) {
            continue;
        }
        count += 1;
    }
    count
}

/// Computes the business-day report for a reference date given as text.
///
/// The date must be strict `YYYY-MM-DD`. The calculator never substitutes
/// "today"; resolving a missing date is the caller's job.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidDate`] for malformed or
/// nonexistent dates. No other input can make this function fail.
///
/// # Example
///
/// ```
/// use business_days::calculation::compute;
///
/// // 2025-09-20 is a Saturday; Mon 1 to Fri 19 is 15 business days.
/// let report = compute("2025-09-20", None).unwrap();
/// assert_eq!(report.business_days_to_today, 15);
/// assert_eq!(report.business_days_total, 22);
///
/// assert!(compute("not-a-date", None).is_err());
/// ```
pub fn compute(
    reference_date_text: &str,
    holidays: Option<HolidayMap>,
) -> EngineResult<BusinessDayReport> {
    let today = CalendarDate::parse(reference_date_text)?;
    Ok(compute_for_date(today, holidays))
}

/// Computes the business-day report for an already-parsed reference date.
pub fn compute_for_date(today: CalendarDate, holidays: Option<HolidayMap>) -> BusinessDayReport {
    let first = start_of_month(today);
    let last = end_of_month(today);

    let business_days_to_today = count_business_days(first, today, holidays.as_ref());
    let business_days_total = count_business_days(first, last, holidays.as_ref());

    debug!(
        today = %today,
        holidays = holidays.as_ref().map_or(0, HolidayMap::len),
        business_days_to_today,
        business_days_total,
        "Computed business days"
    );

    BusinessDayReport {
        start_of_month: first,
        today,
        holidays,
        business_days_to_today,
        business_days_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    fn holidays(entries: &[(&str, &str)]) -> HolidayMap {
        let mut map = HolidayMap::new();
        for (d, n) in entries {
            map.insert(*d, *n);
        }
        map
    }

    #[test]
    fn test_bd_001_weekday_reference_date() {
        // Mon 1st to Fri 5th
        let report = compute("2025-09-05", None).unwrap();
        assert_eq!(report.business_days_to_today, 5);
    }

    #[test]
    fn test_bd_002_saturday_reference_date() {
        // Mon 1st to Fri 19th; the 20th is a Saturday
        let report = compute("2025-09-20", None).unwrap();
        assert_eq!(report.business_days_to_today, 15);
    }

    #[test]
    fn test_bd_003_weekday_holiday_excluded() {
        let map = holidays(&[("2025-09-03", "Test Holiday")]);
        let report = compute("2025-09-05", Some(map)).unwrap();
        assert_eq!(report.business_days_to_today, 4);
    }

    #[test]
    fn test_bd_004_weekend_holiday_has_no_effect() {
        let map = holidays(&[("2025-09-20", "Weekend Holiday")]);
        let report = compute("2025-09-20", Some(map)).unwrap();
        assert_eq!(report.business_days_to_today, 15);
        assert_eq!(report.business_days_total, 22);
    }

    #[test]
    fn test_bd_005_dates_echo_reference() {
        let report = compute("2025-09-05", None).unwrap();
        assert_eq!(report.start_of_month, date("2025-09-01"));
        assert_eq!(report.today, date("2025-09-05"));
    }

    #[test]
    fn test_bd_006_invalid_date_fails_fast() {
        match compute("not-a-date", None) {
            Err(EngineError::InvalidDate { input, .. }) => assert_eq!(input, "not-a-date"),
            other => panic!("Expected InvalidDate error, got {:?}", other),
        }
    }

    #[test]
    fn test_holidays_pass_through_unchanged() {
        let map = holidays(&[("2025-12-25", "Christmas Day")]);
        let report = compute("2025-09-05", Some(map.clone())).unwrap();
        assert_eq!(report.holidays, Some(map));

        let report = compute("2025-09-05", None).unwrap();
        assert_eq!(report.holidays, None);
    }

    #[test]
    fn test_holiday_outside_month_does_not_change_counts() {
        let map = holidays(&[("2025-12-25", "Christmas Day")]);
        let with = compute("2025-09-05", Some(map)).unwrap();
        let without = compute("2025-09-05", None).unwrap();
        assert_eq!(with.business_days_to_today, without.business_days_to_today);
        assert_eq!(with.business_days_total, without.business_days_total);
    }

    #[test]
    fn test_holiday_after_reference_only_changes_total() {
        // Melbourne Cup, Tuesday 4 November 2025
        let map = holidays(&[("2025-11-04", "Melbourne Cup")]);
        let report = compute("2025-11-03", Some(map)).unwrap();
        assert_eq!(report.business_days_to_today, 1);
        assert_eq!(report.business_days_total, 19);
    }

    #[test]
    fn test_december_with_christmas_and_boxing_day() {
        let map = holidays(&[
            ("2025-12-25", "Christmas Day"),
            ("2025-12-26", "Boxing Day"),
        ]);
        let report = compute("2025-12-31", Some(map)).unwrap();
        assert_eq!(report.business_days_to_today, 21);
        assert_eq!(report.business_days_total, 21);
    }

    #[test]
    fn test_first_of_month_on_weekend_counts_zero() {
        // 2025-11-01 is a Saturday
        let report = compute("2025-11-01", None).unwrap();
        assert_eq!(report.business_days_to_today, 0);
        assert_eq!(report.business_days_total, 20);
    }

    #[test]
    fn test_leap_february_total() {
        // February 2024 has 29 days and starts on a Thursday
        let report = compute("2024-02-29", None).unwrap();
        assert_eq!(report.business_days_total, 21);
        assert_eq!(report.business_days_to_today, 21);
    }

    #[test]
    fn test_count_with_start_after_end_is_zero() {
        assert_eq!(
            count_business_days(date("2025-09-10"), date("2025-09-01"), None),
            0
        );
    }

    #[test]
    fn test_count_single_day() {
        assert_eq!(
            count_business_days(date("2025-09-01"), date("2025-09-01"), None),
            1
        );
        assert_eq!(
            count_business_days(date("2025-09-06"), date("2025-09-06"), None),
            0
        );
    }

    #[test]
    fn test_compute_is_idempotent() {
        let map = holidays(&[("2025-09-03", "Test Holiday")]);
        let first = compute("2025-09-17", Some(map.clone())).unwrap();
        let second = compute("2025-09-17", Some(map)).unwrap();
        assert_eq!(first, second);
    }
}
