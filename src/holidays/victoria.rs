//! Victorian public holiday extractor.
//!
//! The Victorian page publishes one year per document. The year comes from
//! the heading `Public holidays in Victoria for YYYY` and the holidays from
//! the table whose `summary` attribute starts with the same phrase. Each row
//! is `name | day-name day month`.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::HolidayMap;

use super::markup::{cells, iso_key, rows, strip_trailing_footnote};
use super::{HolidayExtractor, Jurisdiction};

static YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Public holidays in Victoria for (\d{4})").expect("valid year pattern")
});
static TABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<table[^>]*summary="Public holidays in Victoria for[^>]*>.*?</table>"#)
        .expect("valid table pattern")
});

/// Extracts holidays from the Victorian government holiday page.
#[derive(Debug, Clone, Copy, Default)]
pub struct VictoriaExtractor;

impl VictoriaExtractor {
    fn structural_error(message: &str) -> EngineError {
        EngineError::HolidayTableNotFound {
            jurisdiction: Jurisdiction::Victoria.to_string(),
            message: message.to_string(),
        }
    }
}

impl HolidayExtractor for VictoriaExtractor {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::Victoria
    }

    fn extract(&self, document: &str) -> EngineResult<HolidayMap> {
        let year: i32 = YEAR
            .captures(document)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .ok_or_else(|| Self::structural_error("could not find year in document"))?;

        let table = TABLE
            .find(document)
            .ok_or_else(|| Self::structural_error("could not find public holidays table"))?;

        let rows = rows(table.as_str());
        if rows.is_empty() {
            return Err(Self::structural_error("could not find any rows in the table"));
        }

        let mut holidays = HolidayMap::new();

        // First row is the header.
        for row in rows.iter().skip(1) {
            let cells = cells(row);
            if cells.len() < 2 {
                continue;
            }

            let name = strip_trailing_footnote(&cells[0]);
            let date_text = strip_trailing_footnote(&cells[1]);

            // AFL Grand Final eve is published before the date is fixed.
            if date_text.to_lowercase().contains("subject to") {
                debug!(name = %name, "Skipping holiday without a fixed date");
                continue;
            }

            match iso_key(year, &date_text) {
                Some(key) => holidays.insert(key, name),
                None => debug!(name = %name, date = %date_text, "Skipping unreadable date"),
            }
        }

        Ok(holidays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <h1>Victorian public holidays 2025</h1>
        <h2>Public holidays in Victoria for 2025</h2>
        <table class="table" summary="Public holidays in Victoria for 2025">
          <tr><th>Holiday</th><th>Date</th></tr>
          <tr><td>New Year's Day</td><td>Wednesday 1 January</td></tr>
          <tr><td>Australia Day</td><td>Monday 27 January<sup>2</sup></td></tr>
          <tr><td><p>Friday before the AFL Grand Final<sup>4</sup></p></td>
              <td>Subject to AFL schedule</td></tr>
          <tr><td>Melbourne Cup<sup>1</sup></td><td>Tuesday 4 November</td></tr>
          <tr><td>Christmas Day</td><td>Thursday 25 December</td></tr>
        </table>
    "#;

    #[test]
    fn test_extracts_holidays_with_year_from_heading() {
        let holidays = VictoriaExtractor.extract(PAGE).unwrap();

        assert_eq!(holidays.len(), 4);
        assert_eq!(holidays.get("2025-01-01"), Some("New Year's Day"));
        assert_eq!(holidays.get("2025-01-27"), Some("Australia Day"));
        assert_eq!(holidays.get("2025-11-04"), Some("Melbourne Cup"));
        assert_eq!(holidays.get("2025-12-25"), Some("Christmas Day"));
    }

    #[test]
    fn test_skips_grand_final_subject_to_schedule() {
        let holidays = VictoriaExtractor.extract(PAGE).unwrap();
        assert!(
            holidays
                .iter()
                .all(|(_, name)| !name.contains("Grand Final"))
        );
    }

    #[test]
    fn test_missing_year_is_structural_error() {
        let result = VictoriaExtractor.extract("<table summary=\"Public holidays in Victoria for\"></table>");
        match result {
            Err(EngineError::HolidayTableNotFound { jurisdiction, message }) => {
                assert_eq!(jurisdiction, "victoria");
                assert!(message.contains("year"));
            }
            other => panic!("Expected HolidayTableNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_table_is_structural_error() {
        let result = VictoriaExtractor.extract("<h2>Public holidays in Victoria for 2025</h2>");
        match result {
            Err(EngineError::HolidayTableNotFound { message, .. }) => {
                assert!(message.contains("table"));
            }
            other => panic!("Expected HolidayTableNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_table_without_rows_is_structural_error() {
        let page = r#"<h2>Public holidays in Victoria for 2025</h2>
            <table summary="Public holidays in Victoria for 2025"></table>"#;
        match VictoriaExtractor.extract(page) {
            Err(EngineError::HolidayTableNotFound { message, .. }) => {
                assert!(message.contains("rows"));
            }
            other => panic!("Expected HolidayTableNotFound error, got {:?}", other),
        }
    }
}
