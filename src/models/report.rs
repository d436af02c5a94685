//! Business-day report model.

use serde::{Deserialize, Serialize};

use super::{CalendarDate, HolidayMap};

/// The result of a business-day calculation for one reference date.
///
/// Serialises with camelCase field names. `holidays` is the exact map the
/// calculator was given and is omitted when none was supplied.
///
/// # Example
///
/// ```
/// use business_days::calculation::compute;
///
/// let report = compute("2025-09-05", None).unwrap();
/// let json = serde_json::to_value(&report).unwrap();
///
/// assert_eq!(json["startOfMonth"], "2025-09-01");
/// assert_eq!(json["today"], "2025-09-05");
/// assert_eq!(json["businessDaysToToday"], 5);
/// assert!(json.get("holidays").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDayReport {
    /// The first calendar day of the reference date's month.
    pub start_of_month: CalendarDate,
    /// The reference date, exactly as parsed.
    pub today: CalendarDate,
    /// The holiday map passed to the calculator, unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holidays: Option<HolidayMap>,
    /// Business days from the first of the month through `today` inclusive.
    pub business_days_to_today: u32,
    /// Business days in the whole month containing `today`.
    pub business_days_total: u32,
}
