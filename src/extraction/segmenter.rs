//! Date-anchored segmentation of report text.
//!
//! Attendance tables in extracted report text rarely keep a row on one
//! line: the date, weekday and clock times are often split over several
//! lines. Each line containing a `DD/MM/YYYY` date therefore becomes a
//! [`Candidate`] whose window joins that line with the lines after it.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Number of lines, starting at the date line, joined into a context window.
pub const CONTEXT_WINDOW_LINES: usize = 10;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{2}/[0-9]{2}/[0-9]{4}").expect("valid date regex"));

/// A date-anchored slice of the document awaiting interpretation.
///
/// # Example
///
/// ```
/// use attendance_engine::extraction::segment_document;
///
/// let candidates = segment_document("header\n15/03/2025\nMon\n09:00 19:00");
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].date, "15/03/2025");
/// assert_eq!(candidates[0].window, "15/03/2025 Mon 09:00 19:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The first date found on the anchor line, verbatim.
    pub date: String,
    /// The anchor line and up to nine following lines, space-joined.
    pub window: String,
    /// Zero-based index of the anchor line.
    pub line_index: usize,
}

/// Splits document text into lines and segments them.
pub fn segment_document(text: &str) -> Vec<Candidate> {
    let lines: Vec<&str> = text.lines().collect();
    segment_lines(&lines)
}

/// Emits one candidate per line that contains a date, in line order.
///
/// Lines without a date are only ever part of another line's window.
pub fn segment_lines(lines: &[&str]) -> Vec<Candidate> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(index, line)| {
            DATE_RE.find(line).map(|date| Candidate {
                date: date.as_str().to_string(),
                window: context_window(lines, index),
                line_index: index,
            })
        })
        .collect()
}

/// Joins `lines[start..]`, at most [`CONTEXT_WINDOW_LINES`] of them, with single spaces.
///
/// The window shortens silently near the end of the document.
pub fn context_window(lines: &[&str], start: usize) -> String {
    let end = (start + CONTEXT_WINDOW_LINES).min(lines.len());
    lines.get(start..end).map(|l| l.join(" ")).unwrap_or_default()
}
