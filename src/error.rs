//! Error types for the business-day engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the calculator, the holiday extractors and the service
//! layer can report.

use thiserror::Error;

/// The main error type for the business-day engine.
///
/// Only [`EngineError::InvalidDate`] can come out of the calculator itself.
/// The remaining variants belong to the holiday pipeline and the service
/// configuration.
///
/// # Example
///
/// ```
/// use business_days::error::EngineError;
///
/// let error = EngineError::InvalidDate {
///     input: "not-a-date".to_string(),
///     reason: "expected YYYY-MM-DD".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid date 'not-a-date': expected YYYY-MM-DD");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date string was malformed or named a day that does not exist.
    #[error("Invalid date '{input}': {reason}")]
    InvalidDate {
        /// The text that failed to parse.
        input: String,
        /// Why the text was rejected.
        reason: String,
    },

    /// A requested year was outside the supported four-digit range.
    #[error("Invalid year: {year}")]
    InvalidYear {
        /// The rejected year.
        year: i32,
    },

    /// The jurisdiction identifier is not known or not configured.
    #[error("Unknown jurisdiction: {name}")]
    UnknownJurisdiction {
        /// The identifier that was requested.
        name: String,
    },

    /// The holiday document did not contain the expected table structure.
    #[error("Holiday table not found for {jurisdiction}: {message}")]
    HolidayTableNotFound {
        /// The jurisdiction whose extractor failed.
        jurisdiction: String,
        /// Which part of the structure was missing.
        message: String,
    },

    /// Fetching an upstream holiday document failed.
    #[error("Failed to fetch '{url}': {message}")]
    UpstreamFetch {
        /// The URL that was requested.
        url: String,
        /// A description of the failure.
        message: String,
    },

    /// The HTTP client for upstream fetches could not be built.
    #[error("HTTP client error: {message}")]
    HttpClient {
        /// A description of the failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_displays_input_and_reason() {
        let error = EngineError::InvalidDate {
            input: "2025-13-01".to_string(),
            reason: "no such calendar day".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date '2025-13-01': no such calendar day"
        );
    }

    #[test]
    fn test_invalid_year_displays_year() {
        let error = EngineError::InvalidYear { year: 99999 };
        assert_eq!(error.to_string(), "Invalid year: 99999");
    }

    #[test]
    fn test_unknown_jurisdiction_displays_name() {
        let error = EngineError::UnknownJurisdiction {
            name: "tasmania".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown jurisdiction: tasmania");
    }

    #[test]
    fn test_holiday_table_not_found_displays_jurisdiction_and_message() {
        let error = EngineError::HolidayTableNotFound {
            jurisdiction: "victoria".to_string(),
            message: "could not find year".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Holiday table not found for victoria: could not find year"
        );
    }

    #[test]
    fn test_upstream_fetch_displays_url_and_message() {
        let error = EngineError::UpstreamFetch {
            url: "https://example.com/holidays".to_string(),
            message: "HTTP 503".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to fetch 'https://example.com/holidays': HTTP 503"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/service.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/service.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_date() -> EngineResult<()> {
            Err(EngineError::InvalidDate {
                input: "x".to_string(),
                reason: "expected YYYY-MM-DD".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_date()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
