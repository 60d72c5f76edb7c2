//! Weekday label detection.
//!
//! This module finds the three-letter weekday label in a candidate row and
//! flags rows whose label disagrees with the calendar weekday of their date.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::models::{AuditWarning, DayRecord, WeekdayLabel};

/// Warning code raised when a row's weekday label contradicts its date.
pub const WEEKDAY_MISMATCH_CODE: &str = "WEEKDAY_MISMATCH";

static WEEKDAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Mon|Tue|Wed|Thu|Fri|Sat|Sun").expect("valid weekday regex"));

/// Returns the first weekday label anywhere in the window.
///
/// The match is a plain substring match, so `Monthly` yields `Mon`.
/// Rows without a label are noise and should be discarded.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::detect_weekday;
/// use attendance_engine::models::WeekdayLabel;
///
/// assert_eq!(detect_weekday("20/03/2025 Sat 09:00 15:00"), Some(WeekdayLabel::Sat));
/// assert_eq!(detect_weekday("20/03/2025 09:00 15:00"), None);
/// ```
pub fn detect_weekday(window: &str) -> Option<WeekdayLabel> {
    WEEKDAY_RE
        .find(window)
        .and_then(|m| m.as_str().parse::<WeekdayLabel>().ok())
}

/// Checks a record's label against the calendar weekday of its date.
///
/// The label stays authoritative for policy; this only reports the
/// disagreement. Dates that are not real calendar dates are not checked.
pub fn check_weekday_label(record: &DayRecord) -> Option<AuditWarning> {
    let date = NaiveDate::parse_from_str(&record.date, "%d/%m/%Y").ok()?;
    let actual = date.weekday();
    if actual == record.weekday.to_weekday() {
        return None;
    }

    Some(AuditWarning {
        code: WEEKDAY_MISMATCH_CODE.to_string(),
        message: format!(
            "{} is labelled {} but falls on {}; the label was used for the standard shift",
            record.date, record.weekday, actual
        ),
        severity: "medium".to_string(),
    })
}
