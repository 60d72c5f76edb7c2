//! Error types for the attendance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that aborts processing of a document, loading of a
//! policy, or access to the summary store.

use thiserror::Error;

/// The main error type for the attendance engine.
///
/// Per-record problems (a date line without a weekday, a day without a time
/// pair) are never errors; they are skipped or recorded as zero-duration
/// days. Only document-level, configuration and store failures surface here.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// A policy value was present but unusable.
    #[error("Invalid policy field '{field}': {message}")]
    InvalidPolicy {
        /// The offending policy field.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// The document contained no text at all.
    #[error("Document is empty")]
    EmptyDocument,

    /// The document contained no recognisable attendance rows.
    #[error("No attendance records found ({candidates} date lines examined)")]
    NoAttendanceRecords {
        /// How many date-anchored lines were examined.
        candidates: usize,
    },

    /// A clock token had the `HH:MM` shape but is not a time of day.
    #[error("Invalid clock time '{token}' on {date}")]
    InvalidTimeToken {
        /// The date of the row containing the token.
        date: String,
        /// The offending token.
        token: String,
    },

    /// No saved summary exists with the given identifier.
    #[error("Summary not found: {id}")]
    SummaryNotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// The summary store failed to read or write.
    #[error("Summary store error: {message}")]
    StoreError {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/policy.yaml"
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
    fn test_invalid_policy_displays_field_and_message() {
        let error = EngineError::InvalidPolicy {
            field: "standard_shift.saturday".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid policy field 'standard_shift.saturday': must be greater than zero"
        );
    }

    #[test]
    fn test_no_attendance_records_displays_candidate_count() {
        let error = EngineError::NoAttendanceRecords { candidates: 3 };
        assert_eq!(
            error.to_string(),
            "No attendance records found (3 date lines examined)"
        );
    }

    #[test]
    fn test_invalid_time_token_displays_date_and_token() {
        let error = EngineError::InvalidTimeToken {
            date: "15/03/2025".to_string(),
            token: "25:70".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid clock time '25:70' on 15/03/2025");
    }

    #[test]
    fn test_summary_not_found_displays_id() {
        let error = EngineError::SummaryNotFound {
            id: "abc".to_string(),
        };
        assert_eq!(error.to_string(), "Summary not found: abc");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_empty_document() -> EngineResult<()> {
            Err(EngineError::EmptyDocument)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_empty_document()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
