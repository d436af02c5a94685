//! Core data models for the business-day engine.
//!
//! This module contains the value types shared by the calculator, the
//! holiday extractors and the HTTP API.

mod calendar_date;
mod holiday_map;
mod report;

pub use calendar_date::{CalendarDate, ISO_DATE_FORMAT};
pub use holiday_map::HolidayMap;
pub use report::BusinessDayReport;
