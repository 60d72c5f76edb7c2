//! Attendance report models.
//!
//! This module contains the [`AttendanceReport`] returned for a processed
//! document, the derived [`MonthlySummary`], and [`AuditWarning`]s raised
//! while interpreting rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DayRecord, EmployeeHeader, Gender};

/// Totals derived from the de-duplicated day records and the active policy.
///
/// # Example
///
/// ```
/// use attendance_engine::models::MonthlySummary;
/// use rust_decimal::Decimal;
///
/// let summary = MonthlySummary {
///     total_overtime_seconds: 5_400,
///     absent_count: 2,
///     earned_leave_days: 0,
/// };
/// assert_eq!(summary.total_overtime_hours(), Decimal::new(150, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Sum of every record's overtime in seconds.
    pub total_overtime_seconds: i64,
    /// Number of records with absent status.
    pub absent_count: usize,
    /// Whole standard-shift equivalents of accumulated overtime.
    pub earned_leave_days: i64,
}

impl MonthlySummary {
    /// Total overtime in decimal hours, rounded to two places.
    pub fn total_overtime_hours(&self) -> Decimal {
        (Decimal::new(self.total_overtime_seconds, 0) / Decimal::new(3600, 0)).round_dp(2)
    }
}

/// A warning generated while interpreting a document.
///
/// Warnings never stop processing but should be reviewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete result of processing one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceReport {
    /// Header fields scraped from the document.
    pub employee: EmployeeHeader,
    /// The gender selector the run was processed with.
    pub gender: Gender,
    /// One record per distinct date, in encounter order.
    pub records: Vec<DayRecord>,
    /// Totals over `records`.
    pub summary: MonthlySummary,
    /// Warnings raised while interpreting rows.
    #[serde(default)]
    pub warnings: Vec<AuditWarning>,
}
