//! Interpretation of a single candidate row.

use chrono::Duration;
use tracing::debug;

use crate::config::ShiftPolicy;
use crate::error::EngineResult;
use crate::extraction::Candidate;
use crate::models::{DayRecord, DayStatus, Gender};

use super::absence::is_absent;
use super::overtime::{daily_overtime, standard_shift};
use super::time_pair::extract_time_pair;
use super::weekday_detection::detect_weekday;

/// Turns a candidate into a [`DayRecord`].
///
/// # Returns
///
/// - `Ok(None)` when the window has no weekday label; the row is noise.
/// - `Ok(Some(record))` otherwise. Absent rows and rows without a time pair
///   carry no clock and zero durations.
/// - `Err(InvalidTimeToken)` when a non-absent row has an unparsable clock.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::interpret_candidate;
/// use attendance_engine::config::ShiftPolicy;
/// use attendance_engine::extraction::segment_document;
/// use attendance_engine::models::{DayStatus, Gender};
///
/// let candidate = &segment_document("15/03/2025 Mon 09:00 19:00")[0];
/// let record = interpret_candidate(candidate, Gender::Male, &ShiftPolicy::builtin())
///     .unwrap()
///     .unwrap();
/// assert_eq!(record.status, DayStatus::Present);
/// assert_eq!(record.worked_seconds, 36_000);
/// assert_eq!(record.overtime_seconds, 3_000);
/// ```
pub fn interpret_candidate(
    candidate: &Candidate,
    gender: Gender,
    policy: &ShiftPolicy,
) -> EngineResult<Option<DayRecord>> {
    let Some(weekday) = detect_weekday(&candidate.window) else {
        debug!(
            date = %candidate.date,
            line = candidate.line_index,
            "Discarding date line without weekday label"
        );
        return Ok(None);
    };

    let absent = is_absent(&candidate.window);
    let clock = if absent {
        None
    } else {
        extract_time_pair(&candidate.window, &candidate.date)?
    };

    let (worked, overtime) = match clock {
        Some(pair) => {
            let worked = pair.worked();
            let standard = standard_shift(policy, gender, weekday);
            (worked, daily_overtime(worked, standard))
        }
        None => (Duration::zero(), Duration::zero()),
    };

    let status = if absent {
        DayStatus::Absent
    } else if clock.is_some() {
        DayStatus::Present
    } else {
        DayStatus::OffOrHoliday
    };

    Ok(Some(DayRecord {
        date: candidate.date.clone(),
        weekday,
        clock,
        worked_seconds: worked.num_seconds(),
        overtime_seconds: overtime.num_seconds(),
        status,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::extraction::segment_document;
    use crate::models::WeekdayLabel;

    fn interpret(text: &str, gender: Gender) -> EngineResult<Option<DayRecord>> {
        let candidates = segment_document(text);
        interpret_candidate(&candidates[0], gender, &ShiftPolicy::builtin())
    }

    // ==========================================================================
    // INT-001: male weekday, ten hours worked
    // ==========================================================================
    #[test]
    fn test_int_001_male_weekday_overtime() {
        let record = interpret("15/03/2025 Mon 09:00 19:00", Gender::Male)
            .unwrap()
            .unwrap();

        assert_eq!(record.date, "15/03/2025");
        assert_eq!(record.weekday, WeekdayLabel::Mon);
        assert_eq!(record.worked(), Duration::hours(10));
        assert_eq!(record.overtime(), Duration::minutes(50));
        assert_eq!(record.status, DayStatus::Present);
    }

    // ==========================================================================
    // INT-002: Saturday under the Saturday standard
    // ==========================================================================
    #[test]
    fn test_int_002_saturday_under_standard() {
        let record = interpret("20/03/2025 Sat 09:00 15:00", Gender::Male)
            .unwrap()
            .unwrap();

        assert_eq!(record.worked(), Duration::hours(6));
        assert_eq!(record.overtime(), Duration::zero());
        assert_eq!(record.status, DayStatus::Present);
    }

    // ==========================================================================
    // INT-003: absence marker
    // ==========================================================================
    #[test]
    fn test_int_003_absent_day() {
        let record = interpret("21/03/2025 Sun AB", Gender::Male)
            .unwrap()
            .unwrap();

        assert_eq!(record.status, DayStatus::Absent);
        assert_eq!(record.clock, None);
        assert_eq!(record.worked_seconds, 0);
        assert_eq!(record.overtime_seconds, 0);
    }

    // ==========================================================================
    // INT-004: absence wins over a time pair
    // ==========================================================================
    #[test]
    fn test_int_004_absence_ignores_times() {
        let record = interpret("10/03/2025 Mon AB 09:00 19:00", Gender::Male)
            .unwrap()
            .unwrap();

        assert_eq!(record.status, DayStatus::Absent);
        assert_eq!(record.clock, None);
        assert_eq!(record.overtime_seconds, 0);
    }

    // ==========================================================================
    // INT-005: rest day without times
    // ==========================================================================
    #[test]
    fn test_int_005_off_day() {
        let record = interpret("16/03/2025\nSun\nWO", Gender::Female)
            .unwrap()
            .unwrap();

        assert_eq!(record.status, DayStatus::OffOrHoliday);
        assert_eq!(record.clock, None);
        assert_eq!(record.worked_seconds, 0);
    }

    // ==========================================================================
    // INT-006: no weekday label discards the row
    // ==========================================================================
    #[test]
    fn test_int_006_missing_weekday_discards() {
        assert_eq!(
            interpret("Printed on 15/03/2025 at 09:00 19:00", Gender::Male).unwrap(),
            None
        );
    }

    #[test]
    fn test_female_weekday_uses_female_standard() {
        let record = interpret("11/03/2025 Tue 09:00 18:00", Gender::Female)
            .unwrap()
            .unwrap();
        // 9h worked against 8h25m
        assert_eq!(record.overtime(), Duration::minutes(35));
    }

    #[test]
    fn test_saturday_overtime_against_saturday_standard() {
        let record = interpret("15/03/2025 Sat 08:00 16:00", Gender::Female)
            .unwrap()
            .unwrap();
        // 8h worked against 7h10m
        assert_eq!(record.overtime(), Duration::minutes(50));
    }

    #[test]
    fn test_fields_split_over_lines() {
        let text = "12/03/2025\nWed\nP\n17:55\n08:50\nremarks";
        let record = interpret(text, Gender::Male).unwrap().unwrap();

        assert_eq!(record.status, DayStatus::Present);
        assert_eq!(record.clock_in().unwrap().to_string(), "08:50:00");
        assert_eq!(record.clock_out().unwrap().to_string(), "17:55:00");
        assert_eq!(record.worked(), Duration::minutes(545));
        assert_eq!(record.overtime_seconds, 0);
    }

    #[test]
    fn test_window_lookahead_reaches_next_row() {
        let candidates = segment_document("09/03/2025 Sun WO\n10/03/2025 Mon 09:00 17:00");
        let policy = ShiftPolicy::builtin();

        let sunday = interpret_candidate(&candidates[0], Gender::Male, &policy)
            .unwrap()
            .unwrap();
        assert_eq!(sunday.status, DayStatus::Present);
        assert_eq!(sunday.worked(), Duration::hours(8));

        let candidates = segment_document("03/03/2025 Mon 09:00 19:00\n04/03/2025 Tue AB");
        let monday = interpret_candidate(&candidates[0], Gender::Male, &policy)
            .unwrap()
            .unwrap();
        assert_eq!(monday.status, DayStatus::Absent);
    }

    #[test]
    fn test_equal_times_are_present_with_zero_work() {
        let record = interpret("13/03/2025 Thu 09:30 09:30", Gender::Male)
            .unwrap()
            .unwrap();
        assert_eq!(record.status, DayStatus::Present);
        assert_eq!(record.worked_seconds, 0);
    }

    #[test]
    fn test_invalid_clock_on_present_row_is_an_error() {
        let result = interpret("14/03/2025 Fri 09:00 29:99", Gender::Male);
        assert!(matches!(result, Err(EngineError::InvalidTimeToken { .. })));
    }

    #[test]
    fn test_invalid_clock_on_absent_row_is_ignored() {
        let record = interpret("14/03/2025 Fri AB 09:00 29:99", Gender::Male)
            .unwrap()
            .unwrap();
        assert_eq!(record.status, DayStatus::Absent);
    }
}
