//! New South Wales public holiday extractor.
//!
//! The NSW page lists several years side by side: the `<thead>` carries one
//! `<th>YYYY</th>` per year and every body row is `name | date per year`.
//! A row named `Additional Day` is the observed substitute for the holiday in
//! the row above it.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::HolidayMap;

use super::markup::{cells, iso_key, rows};
use super::{HolidayExtractor, Jurisdiction};

const ADDITIONAL_DAY: &str = "Additional Day";
const NOT_APPLICABLE: &str = "Not applicable";

static TABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<table[^>]*>.*?<thead[^>]*>(.*?)</thead>.*?<tbody[^>]*>(.*?)</tbody>.*?</table>")
        .expect("valid table pattern")
});
static YEAR_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<th[^>]*>\s*(\d{4})\s*</th>").expect("valid year header pattern")
});
static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d").expect("valid digits pattern"));

/// Extracts holidays from the NSW government holiday page.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewSouthWalesExtractor;

impl NewSouthWalesExtractor {
    fn structural_error(message: &str) -> EngineError {
        EngineError::HolidayTableNotFound {
            jurisdiction: Jurisdiction::NewSouthWales.to_string(),
            message: message.to_string(),
        }
    }
}

impl HolidayExtractor for NewSouthWalesExtractor {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::NewSouthWales
    }

    fn extract(&self, document: &str) -> EngineResult<HolidayMap> {
        let table = TABLE
            .captures(document)
            .ok_or_else(|| Self::structural_error("could not find public holidays table"))?;
        let head = table.get(1).map_or("", |m| m.as_str());
        let body = table.get(2).map_or("", |m| m.as_str());

        let years: Vec<i32> = YEAR_HEADER
            .captures_iter(head)
            .filter_map(|c| c.get(1).and_then(|m| m.as_str().parse().ok()))
            .collect();
        if years.is_empty() {
            return Err(Self::structural_error("could not find years in table header"));
        }

        let rows = rows(body);
        if rows.is_empty() {
            return Err(Self::structural_error("could not find any rows in the table"));
        }

        let mut holidays = HolidayMap::new();
        let mut previous_name = String::new();

        for row in rows {
            let cells = cells(row);
            if cells.len() < years.len() + 1 {
                debug!(cells = cells.len(), "Skipping short row");
                continue;
            }

            let cleaned = DIGITS.replace_all(&cells[0], "").trim().to_string();
            let is_additional_day = cleaned == ADDITIONAL_DAY;
            let name = if is_additional_day {
                format!("{} (Observed)", previous_name)
            } else {
                cleaned.clone()
            };

            for (year, date_text) in years.iter().zip(&cells[1..]) {
                if date_text == NOT_APPLICABLE {
                    continue;
                }
                match iso_key(*year, date_text) {
                    Some(key) => holidays.insert(key, name.clone()),
                    None => debug!(name = %name, date = %date_text, "Skipping unreadable date"),
                }
            }

            if !is_additional_day {
                previous_name = cleaned;
            }
        }

        Ok(holidays)
    }
}
