//! Civil "today" in the Australia/Melbourne calendar.
//!
//! The calculator always takes an explicit date. When an HTTP request omits
//! one, the API resolves it here. Victoria observes AEST (UTC+10) and, from
//! the first Sunday in October to the first Sunday in April, AEDT (UTC+11).
//! Both transitions happen at 16:00 UTC on the preceding Saturday.
//!
//! These are the rules in force since 2008 and are applied to every year.
//! A legislative change to Victorian daylight saving needs a change to
//! [`melbourne_offset_hours`].

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};

use crate::models::CalendarDate;

const AEST_HOURS: i64 = 10;
const AEDT_HOURS: i64 = 11;

/// Returns the UTC offset in hours observed in Melbourne at `now`.
///
/// # Example
///
/// ```
/// use business_days::clock::melbourne_offset_hours;
/// use chrono::{TimeZone, Utc};
///
/// let winter = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
/// assert_eq!(melbourne_offset_hours(winter), 10);
///
/// let summer = Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap();
/// assert_eq!(melbourne_offset_hours(summer), 11);
/// ```
pub fn melbourne_offset_hours(now: DateTime<Utc>) -> i64 {
    let utc = now.naive_utc();
    let year = utc.year();

    let before_dst_end = transition_instant(year, 4).is_some_and(|end| utc < end);
    let after_dst_start = transition_instant(year, 10).is_some_and(|start| utc >= start);

    if before_dst_end || after_dst_start {
        AEDT_HOURS
    } else {
        AEST_HOURS
    }
}

/// Returns the Melbourne civil date at `now`.
pub fn melbourne_today(now: DateTime<Utc>) -> CalendarDate {
    let local = now.naive_utc() + Duration::hours(melbourne_offset_hours(now));
    CalendarDate::from(local.date())
}

/// 16:00 UTC on the Saturday before the first Sunday of `month`.
fn transition_instant(year: i32, month: u32) -> Option<NaiveDateTime> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let to_sunday = (7 - first.weekday().num_days_from_sunday()) % 7;
    let saturday_before = first + Duration::days(i64::from(to_sunday) - 1);
    saturday_before.and_hms_opt(16, 0, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_standard_time_date() {
        assert_eq!(melbourne_today(utc(2025, 7, 1, 0, 0)).to_string(), "2025-07-01");
        // 14:30 UTC is 00:30 the next day at UTC+10
        assert_eq!(
            melbourne_today(utc(2025, 6, 30, 14, 30)).to_string(),
            "2025-07-01"
        );
        assert_eq!(
            melbourne_today(utc(2025, 6, 30, 13, 30)).to_string(),
            "2025-06-30"
        );
    }

    #[test]
    fn test_daylight_time_new_year() {
        // 13:30 UTC on 31 Dec is 00:30 on 1 Jan at UTC+11
        assert_eq!(
            melbourne_today(utc(2025, 12, 31, 13, 30)).to_string(),
            "2026-01-01"
        );
        assert_eq!(
            melbourne_today(utc(2025, 12, 31, 12, 30)).to_string(),
            "2025-12-31"
        );
    }

    #[test]
    fn test_dst_starts_first_sunday_of_october() {
        // 2025-10-05 is the first Sunday of October
        assert_eq!(melbourne_offset_hours(utc(2025, 10, 4, 15, 59)), 10);
        assert_eq!(melbourne_offset_hours(utc(2025, 10, 4, 16, 0)), 11);
    }

    #[test]
    fn test_dst_ends_first_sunday_of_april() {
        // 2025-04-06 is the first Sunday of April
        assert_eq!(melbourne_offset_hours(utc(2025, 4, 5, 15, 59)), 11);
        assert_eq!(melbourne_offset_hours(utc(2025, 4, 5, 16, 0)), 10);
    }

    #[test]
    fn test_transition_when_month_starts_on_sunday() {
        // 2023-10-01 was a Sunday, so DST began that day
        assert_eq!(melbourne_offset_hours(utc(2023, 9, 30, 15, 59)), 10);
        assert_eq!(melbourne_offset_hours(utc(2023, 9, 30, 16, 0)), 11);
    }

    #[test]
    fn test_rules_in_force_since_2008() {
        // 2008-04-06 and 2008-10-05 were the first Sundays of April and October
        assert_eq!(melbourne_offset_hours(utc(2008, 4, 5, 15, 59)), 11);
        assert_eq!(melbourne_offset_hours(utc(2008, 4, 5, 16, 0)), 10);
        assert_eq!(melbourne_offset_hours(utc(2008, 10, 4, 15, 59)), 10);
        assert_eq!(melbourne_offset_hours(utc(2008, 10, 4, 16, 0)), 11);

        // 2030-04-07 and 2030-10-06
        assert_eq!(melbourne_offset_hours(utc(2030, 4, 6, 15, 59)), 11);
        assert_eq!(melbourne_offset_hours(utc(2030, 4, 6, 16, 0)), 10);
        assert_eq!(melbourne_offset_hours(utc(2030, 10, 5, 15, 59)), 10);
        assert_eq!(melbourne_offset_hours(utc(2030, 10, 5, 16, 0)), 11);
    }
}
