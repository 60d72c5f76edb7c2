//! Roll-up of day records into monthly totals.
//!
//! This module de-duplicates interpreted rows by date and reduces them to a
//! [`MonthlySummary`]: total overtime, absent days and earned leave.

use std::collections::HashSet;

use crate::config::{EarnedLeaveRule, ShiftPolicy};
use crate::models::{DayRecord, DayStatus, Gender, MonthlySummary};

use super::overtime::weekday_standard;

/// Keeps the first record seen for each date, preserving encounter order.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::deduplicate_by_date;
/// use attendance_engine::models::{DayRecord, DayStatus, WeekdayLabel};
///
/// let day = |date: &str, status| DayRecord {
///     date: date.to_string(),
///     weekday: WeekdayLabel::Mon,
///     clock: None,
///     worked_seconds: 0,
///     overtime_seconds: 0,
///     status,
/// };
/// let records = vec![
///     day("03/03/2025", DayStatus::Absent),
///     day("04/03/2025", DayStatus::OffOrHoliday),
///     day("03/03/2025", DayStatus::OffOrHoliday),
/// ];
/// let unique = deduplicate_by_date(records);
/// assert_eq!(unique.len(), 2);
/// assert_eq!(unique[0].status, DayStatus::Absent);
/// ```
pub fn deduplicate_by_date(records: Vec<DayRecord>) -> Vec<DayRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(record.date.clone()))
        .collect()
}

/// Reduces de-duplicated records to the monthly summary.
pub fn summarize(records: &[DayRecord], gender: Gender, policy: &ShiftPolicy) -> MonthlySummary {
    let total_overtime_seconds: i64 = records.iter().map(|r| r.overtime_seconds).sum();
    let absent_count = records
        .iter()
        .filter(|r| r.status == DayStatus::Absent)
        .count();

    MonthlySummary {
        total_overtime_seconds,
        absent_count,
        earned_leave_days: earned_leave_days(total_overtime_seconds, gender, policy),
    }
}

/// Whole weekday-standard equivalents of accumulated overtime.
///
/// The divisor is always the gender's weekday standard, never Saturday's.
/// Under [`EarnedLeaveRule::WithGrace`] the grace is added before dividing.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::earned_leave_days;
/// use attendance_engine::config::{EarnedLeaveRule, ShiftPolicy};
/// use attendance_engine::models::Gender;
///
/// let plain = ShiftPolicy::builtin();
/// let grace = ShiftPolicy::builtin()
///     .with_earned_leave(EarnedLeaveRule::WithGrace { grace_seconds: 1200 });
///
/// // 29_100s is 1_200s short of the 30_300s female standard
/// assert_eq!(earned_leave_days(29_100, Gender::Female, &plain), 0);
/// assert_eq!(earned_leave_days(29_100, Gender::Female, &grace), 1);
/// ```
pub fn earned_leave_days(total_overtime_seconds: i64, gender: Gender, policy: &ShiftPolicy) -> i64 {
    let divisor = weekday_standard(policy, gender).num_seconds();
    if divisor <= 0 {
        return 0;
    }

    let credited = match policy.earned_leave {
        EarnedLeaveRule::Plain => total_overtime_seconds,
        EarnedLeaveRule::WithGrace { grace_seconds } => {
            total_overtime_seconds.saturating_add(grace_seconds)
        }
    };

    credited.max(0).div_euclid(divisor)
}
