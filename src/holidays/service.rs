//! Resolving holiday maps for a jurisdiction and year.

use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;
use tracing::{info, warn};

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::HolidayMap;

use super::{HolidaySource, Jurisdiction};

/// Lowest year accepted in requests.
const MIN_YEAR: i32 = 1000;
/// Highest year accepted in requests.
const MAX_YEAR: i32 = 9999;

/// Rejects years that cannot be written as four digits.
pub fn validate_year(year: i32) -> EngineResult<i32> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(EngineError::InvalidYear { year })
    }
}

/// Fetches holiday documents and runs the matching extractor.
///
/// Cloning is cheap; the configuration and source are shared.
#[derive(Clone)]
pub struct HolidayService {
    config: Arc<ConfigLoader>,
    source: Arc<dyn HolidaySource>,
}

impl HolidayService {
    /// Creates a service over the given configuration and document source.
    pub fn new(config: ConfigLoader, source: Arc<dyn HolidaySource>) -> Self {
        Self {
            config: Arc::new(config),
            source,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Fetches the document for `year` and returns every holiday it lists.
    ///
    /// Some pages list several years; nothing is filtered here.
    pub async fn fetch_holidays(
        &self,
        jurisdiction: Jurisdiction,
        year: i32,
    ) -> EngineResult<HolidayMap> {
        let year = validate_year(year)?;
        let url = self.config.source_url(jurisdiction, year)?;

        let started = Instant::now();
        let document = self.source.fetch_document(&url).await?;
        let holidays = jurisdiction.extractor().extract(&document).inspect_err(|e| {
            warn!(jurisdiction = %jurisdiction, url = %url, error = %e, "Holiday extraction failed");
        })?;

        info!(
            jurisdiction = %jurisdiction,
            year,
            holidays = holidays.len(),
            duration_ms = started.elapsed().as_millis(),
            "Fetched holiday table"
        );

        Ok(holidays)
    }

    /// Returns the holidays of `jurisdiction` that fall in `year`.
    pub async fn holidays_for(
        &self,
        jurisdiction: Jurisdiction,
        year: i32,
    ) -> EngineResult<HolidayMap> {
        Ok(self.fetch_holidays(jurisdiction, year).await?.for_year(year))
    }

    /// Fetches every configured jurisdiction concurrently.
    ///
    /// One failing jurisdiction does not affect the others; each result is
    /// returned alongside its jurisdiction, in configuration order.
    pub async fn holidays_for_all(
        &self,
        year: i32,
    ) -> Vec<(Jurisdiction, EngineResult<HolidayMap>)> {
        let lookups = self.config.jurisdictions().map(|jurisdiction| async move {
            (jurisdiction, self.holidays_for(jurisdiction, year).await)
        });

        join_all(lookups).await
    }
}
