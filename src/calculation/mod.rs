//! Calculation logic for the business-day engine.
//!
//! This module contains the day detection used to exclude weekends, the
//! month boundary helpers, and the holiday-aware business-day counter.

mod business_days;
mod day_detection;
mod month_bounds;

pub use business_days::{compute, compute_for_date, count_business_days};
pub use day_detection::{DayType, get_day_type, weekday_index};
pub use month_bounds::{end_of_month, start_of_month};
