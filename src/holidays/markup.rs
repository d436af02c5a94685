//! Markup helpers shared by the holiday extractors.
//!
//! Rows and cells are located with regexes, since each extractor only has to
//! understand one published table layout. Cell text goes through `scraper`
//! so entities are decoded by a real HTML parser.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use crate::models::CalendarDate;

static ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<tr[^>]*>(.*?)</tr>").expect("valid row pattern"));
static CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<td[^>]*>(.*?)</td>").expect("valid cell pattern"));
static SUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<sup[^>]*>.*?</sup>").expect("valid sup pattern"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));
static TRAILING_FOOTNOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z)])\d+$").expect("valid footnote pattern"));

/// Returns the inner markup of every `<tr>` in `section`.
pub fn rows(section: &str) -> Vec<&str> {
    ROW.captures_iter(section)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect()
}

/// Returns the cleaned text of every `<td>` in `row`.
pub fn cells(row: &str) -> Vec<String> {
    CELL.captures_iter(row)
        .filter_map(|c| c.get(1).map(|m| cell_text(m.as_str())))
        .collect()
}

/// Converts a fragment of markup to plain text.
///
/// `<sup>` footnote markers are dropped before parsing. The HTML parser
/// decodes every entity exactly once; typographic apostrophes become ASCII
/// and whitespace is collapsed.
pub fn cell_text(raw: &str) -> String {
    let without_sup = SUP.replace_all(raw, "");
    let fragment = Html::parse_fragment(&without_sup);
    let text = fragment
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('\u{2019}', "'");
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// Removes a footnote number glued to the end of a word, e.g. `Christmas Day1`.
pub fn strip_trailing_footnote(text: &str) -> String {
    TRAILING_FOOTNOTE.replace(text, "$1").trim().to_string()
}

/// Maps an English month name (full or three-letter) to its number.
pub fn month_number(name: &str) -> Option<u32> {
    let lower = name.trim_end_matches(['.', ',']).to_ascii_lowercase();
    let month = match lower.as_str() {
        "january" | "jan" => 1,
        "february" | "feb" => 2,
        "march" | "mar" => 3,
        "april" | "apr" => 4,
        "may" => 5,
        "june" | "jun" => 6,
        "july" | "jul" => 7,
        "august" | "aug" => 8,
        "september" | "sep" | "sept" => 9,
        "october" | "oct" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// Parses text like `Friday 26 December` into an ISO key for `year`.
///
/// The first word is the day name and is ignored. Returns `None` when the
/// day or month cannot be read or the date does not exist.
pub fn iso_key(year: i32, text: &str) -> Option<String> {
    let mut words = text.split_whitespace().skip(1);
    let day: u32 = words.next()?.trim_end_matches(',').parse().ok()?;
    let month = month_number(words.next()?)?;

    CalendarDate::from_ymd(year, month, day).map(|d| d.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text_strips_tags_and_sup() {
        assert_eq!(
            cell_text("<p><strong>Christmas Day</strong><sup>1</sup></p>"),
            "Christmas Day"
        );
    }

    #[test]
    fn test_cell_text_decodes_entities_and_collapses_whitespace() {
        assert_eq!(
            cell_text("King&#39;s\n   Birthday&nbsp;"),
            "King's Birthday"
        );
    }

    #[test]
    fn test_cell_text_decodes_numeric_and_named_entities() {
        assert_eq!(cell_text("King&#8217;s Birthday"), "King's Birthday");
        assert_eq!(cell_text("King&rsquo;s Birthday"), "King's Birthday");
        assert_eq!(cell_text("Easter&ndash;Monday"), "Easter\u{2013}Monday");
        assert_eq!(cell_text("Tuesday&#160;4&nbsp;November"), "Tuesday 4 November");
    }

    #[test]
    fn test_cell_text_decodes_only_once() {
        assert_eq!(cell_text("Tom &amp;#39; Jerry"), "Tom &#39; Jerry");
        assert_eq!(cell_text("Tom &amp; Jerry"), "Tom & Jerry");
    }

    #[test]
    fn test_strip_trailing_footnote() {
        assert_eq!(strip_trailing_footnote("Christmas Day1"), "Christmas Day");
        assert_eq!(strip_trailing_footnote("Friday 26 December3"), "Friday 26 December");
        assert_eq!(strip_trailing_footnote("Monday 2 June"), "Monday 2 June");
    }

    #[test]
    fn test_month_number() {
        assert_eq!(month_number("January"), Some(1));
        assert_eq!(month_number("december"), Some(12));
        assert_eq!(month_number("Sept"), Some(9));
        assert_eq!(month_number("Smarch"), None);
    }

    #[test]
    fn test_iso_key_zero_pads() {
        assert_eq!(iso_key(2025, "Wednesday 1 January"), Some("2025-01-01".to_string()));
        assert_eq!(iso_key(2025, "Friday 26 December"), Some("2025-12-26".to_string()));
    }

    #[test]
    fn test_iso_key_rejects_unreadable_text() {
        assert_eq!(iso_key(2025, "Not applicable"), None);
        assert_eq!(iso_key(2025, "Friday"), None);
        assert_eq!(iso_key(2025, "Friday 31 June"), None);
    }

    #[test]
    fn test_rows_and_cells() {
        let table = "<table><tr><td>A</td><td>B</td></tr><tr class=\"x\"><td>C</td></tr></table>";
        let rows = rows(table);
        assert_eq!(rows.len(), 2);
        assert_eq!(cells(rows[0]), vec!["A", "B"]);
        assert_eq!(cells(rows[1]), vec!["C"]);
    }
}
