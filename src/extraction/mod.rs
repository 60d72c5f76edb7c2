//! Text segmentation for time-clock report exports.
//!
//! This module turns linearised report text into date-anchored candidate
//! rows, each carrying a bounded window of following lines, and scrapes the
//! employee header fields from labelled lines.

mod header;
mod segmenter;

pub use header::{DEPARTMENT_LABEL, EMPLOYEE_CODE_LABEL, EMPLOYEE_NAME_LABEL, extract_employee_header};
pub use segmenter::{CONTEXT_WINDOW_LINES, Candidate, context_window, segment_document, segment_lines};
