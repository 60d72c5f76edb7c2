//! Plain-text rendering of attendance results.
//!
//! This module lays out the daily attendance table for one report and the
//! fixed four-column summary table over saved rows. Display sentinels
//! (`-`, `N/A`) are introduced here and nowhere earlier.

mod table;

pub use table::{
    ABSENT_TIME, SUMMARY_HEADERS, format_clock, render_daily_table, render_employee_details,
    render_monthly_summary, render_summary_table,
};
