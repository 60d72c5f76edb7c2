//! Standard shift lookup and daily overtime.
//!
//! The standard shift for a row depends on its weekday label and the run's
//! gender: Saturday rows use the single Saturday standard, every other day
//! uses the gender's weekday standard. Overtime is whatever worked time
//! exceeds that standard.

use chrono::Duration;

use crate::config::ShiftPolicy;
use crate::models::{Gender, WeekdayLabel};

/// Returns the weekday (non-Saturday) standard for a gender.
///
/// This is also the divisor for earned leave.
pub fn weekday_standard(policy: &ShiftPolicy, gender: Gender) -> Duration {
    match gender {
        Gender::Male => policy.weekday_male,
        Gender::Female => policy.weekday_female,
    }
}

/// Returns the standard shift for a row's weekday label.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::standard_shift;
/// use attendance_engine::config::ShiftPolicy;
/// use attendance_engine::models::{Gender, WeekdayLabel};
///
/// let policy = ShiftPolicy::builtin();
/// assert_eq!(standard_shift(&policy, Gender::Male, WeekdayLabel::Mon).num_minutes(), 550);
/// assert_eq!(standard_shift(&policy, Gender::Male, WeekdayLabel::Sat).num_minutes(), 430);
/// ```
pub fn standard_shift(policy: &ShiftPolicy, gender: Gender, weekday: WeekdayLabel) -> Duration {
    if weekday.is_saturday() {
        policy.saturday
    } else {
        weekday_standard(policy, gender)
    }
}

/// Worked time beyond the standard, never negative.
pub fn daily_overtime(worked: Duration, standard: Duration) -> Duration {
    if worked > standard {
        worked - standard
    } else {
        Duration::zero()
    }
}
