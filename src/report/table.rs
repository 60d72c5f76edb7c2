//! Fixed-layout text tables.

use std::fmt::Write;

use chrono::NaiveTime;

use crate::calculation::format_duration;
use crate::models::{AttendanceReport, SummaryRow, WORK_NATURE_LABEL};

/// Shown in place of a clock time on days without one.
pub const ABSENT_TIME: &str = "-";

/// Column headings of the summary table.
pub const SUMMARY_HEADERS: [&str; 4] = [
    "CoE Faculty Name",
    "Extra working hours",
    "Work Nature",
    "Remarks",
];

const DAILY_HEADERS: [&str; 7] = ["Date", "Day", "In", "Out", "Work", "Extra", "Status"];

const RULE_WIDTH: usize = 70;

/// Formats a clock time as `HH:MM`, or [`ABSENT_TIME`].
pub fn format_clock(time: Option<NaiveTime>) -> String {
    time.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| ABSENT_TIME.to_string())
}

/// Renders the employee details block.
pub fn render_employee_details(report: &AttendanceReport) -> String {
    let mut out = section("EMPLOYEE DETAILS");
    let _ = writeln!(out, "Name : {}", report.employee.display_name());
    let _ = writeln!(out, "Code : {}", report.employee.display_code());
    let _ = writeln!(out, "Dept : {}", report.employee.display_department());
    out
}

/// Renders one row per day: date, day, in, out, work, extra and status.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::process_document;
/// use attendance_engine::config::ShiftPolicy;
/// use attendance_engine::models::Gender;
/// use attendance_engine::report::render_daily_table;
///
/// let report = process_document("10/03/2025 Mon 09:00 19:00", Gender::Male, &ShiftPolicy::builtin())
///     .unwrap();
/// let table = render_daily_table(&report);
/// assert!(table.contains("10/03/2025"));
/// assert!(table.contains("00:50"));
/// ```
pub fn render_daily_table(report: &AttendanceReport) -> String {
    let rows: Vec<Vec<String>> = report
        .records
        .iter()
        .map(|r| {
            vec![
                r.date.clone(),
                r.weekday.to_string(),
                format_clock(r.clock_in()),
                format_clock(r.clock_out()),
                format_duration(r.worked_seconds),
                format_duration(r.overtime_seconds),
                r.status.to_string(),
            ]
        })
        .collect();

    let mut out = section("DAILY ATTENDANCE");
    out.push_str(&layout(&DAILY_HEADERS, &rows));
    out
}

/// Renders total extra hours, absents and earned leave.
pub fn render_monthly_summary(report: &AttendanceReport) -> String {
    let summary = &report.summary;
    let mut out = section("MONTHLY SUMMARY");
    let _ = writeln!(
        out,
        "Total Extra Hours : {} ({} h)",
        format_duration(summary.total_overtime_seconds),
        summary.total_overtime_hours()
    );
    let _ = writeln!(out, "Total Absents     : {}", summary.absent_count);
    let _ = writeln!(out, "Earned Leave Days : {}", summary.earned_leave_days);
    out
}

/// Lays saved rows into the four-column summary table.
///
/// Columns: `Name - Code`, extra hours, the fixed work-nature label, and
/// earned days or `-`.
///
/// # Example
///
/// ```
/// use attendance_engine::models::SummaryRow;
/// use attendance_engine::report::render_summary_table;
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let row = SummaryRow {
///     id: Uuid::new_v4(),
///     name: "Asha Rao".to_string(),
///     code: "E042".to_string(),
///     extra_time: "10:30".to_string(),
///     earned_days: 1,
///     absents: 0,
///     saved_at: Utc::now(),
/// };
/// let table = render_summary_table(&[row]);
/// assert!(table.contains("Asha Rao - E042"));
/// assert!(table.contains("CoE Work"));
/// ```
pub fn render_summary_table(rows: &[SummaryRow]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                row.faculty_label(),
                row.extra_time.clone(),
                WORK_NATURE_LABEL.to_string(),
                row.remark(),
            ]
        })
        .collect();

    layout(&SUMMARY_HEADERS, &cells)
}

fn section(title: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{rule}\n{title}\n{rule}\n")
}

/// Left-aligned columns sized to their widest cell, separated by two spaces.
fn layout(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers.iter().copied(), &widths);
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, separator.iter().map(String::as_str), &widths);
    for row in rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
