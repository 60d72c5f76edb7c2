//! Persisted summary rows.
//!
//! A [`SummaryRow`] is the flattened form of an [`AttendanceReport`] that the
//! summary store keeps and the printable report lays out. String sentinels
//! (`N/A`) appear here and nowhere earlier in the pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::format_duration;

use super::AttendanceReport;

/// Fixed work-nature label printed in the summary table.
pub const WORK_NATURE_LABEL: &str = "CoE Work";

/// One saved monthly summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Opaque identifier assigned when the row is created.
    pub id: Uuid,
    /// Employee name, `N/A` when missing.
    pub name: String,
    /// Employee code, `N/A` when missing.
    pub code: String,
    /// Total overtime as `HH:MM`.
    pub extra_time: String,
    /// Earned leave days.
    pub earned_days: i64,
    /// Absent day count.
    pub absents: usize,
    /// When the row was saved.
    pub saved_at: DateTime<Utc>,
}

impl SummaryRow {
    /// Flattens a report into a row stamped with `saved_at`.
    pub fn from_report(report: &AttendanceReport, saved_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: report.employee.display_name().to_string(),
            code: report.employee.display_code().to_string(),
            extra_time: format_duration(report.summary.total_overtime_seconds),
            earned_days: report.summary.earned_leave_days,
            absents: report.summary.absent_count,
            saved_at,
        }
    }

    /// The `Name - Code` label used in the first report column.
    pub fn faculty_label(&self) -> String {
        format!("{} - {}", self.name, self.code)
    }

    /// Earned days as a remark, `-` when none were earned.
    pub fn remark(&self) -> String {
        if self.earned_days > 0 {
            self.earned_days.to_string()
        } else {
            "-".to_string()
        }
    }
}
