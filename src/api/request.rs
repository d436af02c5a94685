//! Request types for the business-day API.
//!
//! Dates arrive as raw text so the calculator can reject malformed input
//! with its own error instead of a generic deserialization failure.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query string for `GET /api/business-days`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BusinessDaysQuery {
    /// Reference date as `YYYY-MM-DD`; today in Melbourne when absent or empty.
    #[serde(default)]
    pub date: Option<String>,
    /// Jurisdiction whose holidays apply (e.g. "victoria", "nsw").
    #[serde(default)]
    pub jurisdiction: Option<String>,
}

/// Request body for `POST /api/business-days`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BusinessDaysRequest {
    /// Reference date as `YYYY-MM-DD`; today in Melbourne when absent or empty.
    #[serde(default)]
    pub date: Option<String>,
    /// Holiday map. Anything other than an object of strings means no holidays.
    #[serde(default)]
    pub holidays: Value,
}

/// Query string for `GET /api/public-holidays`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublicHolidaysQuery {
    /// Year to look up; the current Melbourne year when absent.
    #[serde(default)]
    pub year: Option<i32>,
}

/// Treats an empty date string the same as a missing one.
pub(crate) fn non_empty(date: Option<String>) -> Option<String> {
    date.filter(|d| !d.trim().is_empty())
}
