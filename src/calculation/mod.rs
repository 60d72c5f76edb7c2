//! Interpretation and aggregation logic for the attendance engine.
//!
//! This module contains the per-row interpreter (weekday detection, absence
//! detection, clock-pair extraction, standard-shift lookup and overtime) and
//! the aggregator that de-duplicates rows and rolls them up into monthly
//! totals and earned leave. [`process_document`] runs the whole pipeline.

mod absence;
mod aggregation;
mod format;
mod interpreter;
mod overtime;
mod pipeline;
mod time_pair;
mod weekday_detection;

pub use absence::{ABSENCE_CHECK_CHARS, ABSENCE_MARKER, is_absent};
pub use aggregation::{deduplicate_by_date, earned_leave_days, summarize};
pub use format::format_duration;
pub use interpreter::interpret_candidate;
pub use overtime::{daily_overtime, standard_shift, weekday_standard};
pub use pipeline::process_document;
pub use time_pair::{extract_time_pair, find_time_tokens};
pub use weekday_detection::{WEEKDAY_MISMATCH_CODE, check_weekday_label, detect_weekday};
