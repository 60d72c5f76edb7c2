//! End-to-end processing of one document.

use tracing::{info, warn};

use crate::config::ShiftPolicy;
use crate::error::{EngineError, EngineResult};
use crate::extraction::{extract_employee_header, segment_lines};
use crate::models::{AttendanceReport, Gender};

use super::aggregation::{deduplicate_by_date, summarize};
use super::interpreter::interpret_candidate;
use super::weekday_detection::check_weekday_label;

/// Segments, interprets and aggregates one document's text.
///
/// Processing is all-or-nothing per document: rows without a weekday label
/// are skipped, but an empty document, a document with no usable rows, or an
/// unparsable clock time fails the whole call.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::process_document;
/// use attendance_engine::config::ShiftPolicy;
/// use attendance_engine::models::Gender;
///
/// let text = "Employee Name : Asha Rao\n\
///             09/03/2025 Sun AB\n\
///             10/03/2025 Mon 09:00 19:00";
/// let report = process_document(text, Gender::Male, &ShiftPolicy::builtin()).unwrap();
///
/// assert_eq!(report.employee.name.as_deref(), Some("Asha Rao"));
/// assert_eq!(report.records.len(), 2);
/// assert_eq!(report.summary.total_overtime_seconds, 3_000);
/// assert_eq!(report.summary.absent_count, 1);
/// ```
pub fn process_document(
    text: &str,
    gender: Gender,
    policy: &ShiftPolicy,
) -> EngineResult<AttendanceReport> {
    if text.trim().is_empty() {
        return Err(EngineError::EmptyDocument);
    }

    let lines: Vec<&str> = text.lines().collect();
    let employee = extract_employee_header(&lines);
    let candidates = segment_lines(&lines);

    let mut interpreted = Vec::with_capacity(candidates.len());
    for candidate in &candidates {
        if let Some(record) = interpret_candidate(candidate, gender, policy)? {
            interpreted.push(record);
        }
    }
    let discarded = candidates.len() - interpreted.len();

    let records = deduplicate_by_date(interpreted);
    if records.is_empty() {
        return Err(EngineError::NoAttendanceRecords {
            candidates: candidates.len(),
        });
    }

    let warnings: Vec<_> = records.iter().filter_map(check_weekday_label).collect();
    for warning in &warnings {
        warn!(code = %warning.code, "{}", warning.message);
    }

    let summary = summarize(&records, gender, policy);

    info!(
        employee = employee.display_name(),
        gender = %gender,
        lines = lines.len(),
        candidates = candidates.len(),
        discarded,
        records = records.len(),
        total_overtime_seconds = summary.total_overtime_seconds,
        absent_count = summary.absent_count,
        earned_leave_days = summary.earned_leave_days,
        "Processed attendance document"
    );

    Ok(AttendanceReport {
        employee,
        gender,
        records,
        summary,
        warnings,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::config::EarnedLeaveRule;
    use crate::models::{DayStatus, WeekdayLabel};
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum RowKind {
        Present(u32, u32, u32, u32),
        Absent,
        Off,
    }

    fn row_strategy() -> impl Strategy<Value = (u32, usize, RowKind)> {
        let kind = prop_oneof![
            4 => (0u32..24, 0u32..60, 0u32..24, 0u32..60)
                .prop_map(|(h1, m1, h2, m2)| RowKind::Present(h1, m1, h2, m2)),
            1 => Just(RowKind::Absent),
            1 => Just(RowKind::Off),
        ];
        (1u32..=28, 0usize..7, kind)
    }

    fn render(rows: &[(u32, usize, RowKind)]) -> String {
        rows.iter()
            .map(|(day, weekday, kind)| {
                let prefix = format!("{:02}/03/2025 {}", day, WeekdayLabel::ALL[*weekday]);
                match kind {
                    RowKind::Present(h1, m1, h2, m2) => format!(
                        "{} P {:02}:{:02} {:02}:{:02} GENERAL SHIFT",
                        prefix, h1, m1, h2, m2
                    ),
                    RowKind::Absent => format!("{} AB", prefix),
                    RowKind::Off => format!("{} WO", prefix),
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn gender_strategy() -> impl Strategy<Value = Gender> {
        prop_oneof![Just(Gender::Male), Just(Gender::Female)]
    }

    proptest! {
        /// Property: identical input yields identical output
        #[test]
        fn processing_is_idempotent(
            rows in prop::collection::vec(row_strategy(), 1..40),
            gender in gender_strategy(),
        ) {
            let text = render(&rows);
            let policy = ShiftPolicy::builtin();
            let first = process_document(&text, gender, &policy).unwrap();
            let second = process_document(&text, gender, &policy).unwrap();
            prop_assert_eq!(first, second);
        }

        /// Property: one record per date, in first-encounter order
        #[test]
        fn dates_are_unique_in_encounter_order(
            rows in prop::collection::vec(row_strategy(), 1..40),
        ) {
            let report = process_document(&render(&rows), Gender::Male, &ShiftPolicy::builtin()).unwrap();

            let mut expected: Vec<String> = Vec::new();
            for (day, _, _) in &rows {
                let date = format!("{:02}/03/2025", day);
                if !expected.contains(&date) {
                    expected.push(date);
                }
            }
            let dates: Vec<String> = report.records.iter().map(|r| r.date.clone()).collect();
            prop_assert_eq!(dates, expected);
        }

        /// Property: durations are never negative and clocks are ordered
        #[test]
        fn durations_are_non_negative_and_ordered(
            rows in prop::collection::vec(row_strategy(), 1..40),
            gender in gender_strategy(),
        ) {
            let report = process_document(&render(&rows), gender, &ShiftPolicy::builtin()).unwrap();
            for record in &report.records {
                prop_assert!(record.worked_seconds >= 0);
                prop_assert!(record.overtime_seconds >= 0);
                prop_assert!(record.overtime_seconds <= record.worked_seconds);
                if let Some(clock) = record.clock {
                    prop_assert!(clock.clock_in() <= clock.clock_out());
                    prop_assert_eq!(clock.worked().num_seconds(), record.worked_seconds);
                }
            }
        }

        /// Property: status agrees with the presence of a clock pair
        #[test]
        fn status_partitions_records(
            rows in prop::collection::vec(row_strategy(), 1..40),
        ) {
            let report = process_document(&render(&rows), Gender::Female, &ShiftPolicy::builtin()).unwrap();
            for record in &report.records {
                match record.status {
                    DayStatus::Present => prop_assert!(record.clock.is_some()),
                    DayStatus::Absent | DayStatus::OffOrHoliday => {
                        prop_assert!(record.clock.is_none());
                        prop_assert_eq!(record.worked_seconds, 0);
                    }
                }
            }
        }

        /// Property: summary totals are sums over the surviving records
        #[test]
        fn summary_matches_records(
            rows in prop::collection::vec(row_strategy(), 1..40),
            gender in gender_strategy(),
            grace in any::<bool>(),
        ) {
            let policy = if grace {
                ShiftPolicy::builtin().with_earned_leave(EarnedLeaveRule::WithGrace { grace_seconds: 1200 })
            } else {
                ShiftPolicy::builtin()
            };
            let report = process_document(&render(&rows), gender, &policy).unwrap();

            let total: i64 = report.records.iter().map(|r| r.overtime_seconds).sum();
            let absents = report
                .records
                .iter()
                .filter(|r| r.status == DayStatus::Absent)
                .count();
            prop_assert_eq!(report.summary.total_overtime_seconds, total);
            prop_assert_eq!(report.summary.absent_count, absents);

            let standard = match gender {
                Gender::Male => 33_000,
                Gender::Female => 30_300,
            };
            let bonus = if grace { 1200 } else { 0 };
            prop_assert_eq!(report.summary.earned_leave_days, (total + bonus) / standard);
        }
    }
}
