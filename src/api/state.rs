//! Application state for the business-day API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::clock::melbourne_today;
use crate::config::ConfigLoader;
use crate::holidays::{HolidayService, HolidaySource};
use crate::models::CalendarDate;

/// Shared application state.
///
/// Holds the holiday service and the clock used to resolve "today" when a
/// request does not name a date.
#[derive(Clone)]
pub struct AppState {
    /// Holiday lookups.
    holidays: HolidayService,
    /// Current instant; replaceable in tests.
    now: fn() -> DateTime<Utc>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ConfigLoader, source: Arc<dyn HolidaySource>) -> Self {
        Self {
            holidays: HolidayService::new(config, source),
            now: Utc::now,
        }
    }

    /// Replaces the clock used to resolve "today".
    pub fn with_clock(mut self, now: fn() -> DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Returns the holiday service.
    pub fn holidays(&self) -> &HolidayService {
        &self.holidays
    }

    /// Today's date in the Melbourne civil calendar.
    pub fn today(&self) -> CalendarDate {
        melbourne_today((self.now)())
    }
}
