//! Configuration types for attendance processing.
//!
//! This module contains the raw structures deserialized from `policy.yaml`
//! and the validated [`ShiftPolicy`] the engine runs against.

use chrono::Duration;
use serde::Deserialize;

/// Grace added to accumulated overtime by the [`EarnedLeaveRule::WithGrace`] rule.
pub const EARNED_LEAVE_GRACE_SECONDS: i64 = 1200;

/// Stock weekday standard for male staff (9h10m).
pub const STD_WEEKDAY_MALE_SECONDS: i64 = 9 * 3600 + 10 * 60;

/// Stock weekday standard for female staff (8h25m).
pub const STD_WEEKDAY_FEMALE_SECONDS: i64 = 8 * 3600 + 25 * 60;

/// Stock Saturday standard for all staff (7h10m).
pub const STD_SATURDAY_SECONDS: i64 = 7 * 3600 + 10 * 60;

/// Standard shift lengths as written in `policy.yaml` (`HH:MM`).
#[derive(Debug, Clone, Deserialize)]
pub struct StandardShiftConfig {
    /// Weekday standard for male staff.
    pub weekday_male: String,
    /// Weekday standard for female staff.
    pub weekday_female: String,
    /// Saturday standard for all staff.
    pub saturday: String,
}

/// Which earned-leave formula the file selects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EarnedLeaveRuleKind {
    /// `floor(overtime / weekday_standard)`.
    #[default]
    Plain,
    /// `floor((overtime + grace) / weekday_standard)`.
    Grace,
}

fn default_grace_seconds() -> i64 {
    EARNED_LEAVE_GRACE_SECONDS
}

/// Earned-leave section of `policy.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EarnedLeaveConfig {
    /// The formula to use.
    #[serde(default)]
    pub rule: EarnedLeaveRuleKind,
    /// Grace seconds, only read by the `grace` rule.
    #[serde(default = "default_grace_seconds")]
    pub grace_seconds: i64,
}

impl Default for EarnedLeaveConfig {
    fn default() -> Self {
        Self {
            rule: EarnedLeaveRuleKind::Plain,
            grace_seconds: EARNED_LEAVE_GRACE_SECONDS,
        }
    }
}

/// Top-level structure of `policy.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    /// Human-readable policy name.
    pub name: String,
    /// Standard shift lengths.
    pub standard_shift: StandardShiftConfig,
    /// Earned-leave formula.
    #[serde(default)]
    pub earned_leave: EarnedLeaveConfig,
}

/// The earned-leave formula applied to accumulated overtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EarnedLeaveRule {
    /// Plain floor division by the weekday standard.
    Plain,
    /// Floor division after adding a fixed grace.
    WithGrace {
        /// Seconds added before dividing.
        grace_seconds: i64,
    },
}

/// A validated attendance policy.
///
/// Immutable for the duration of a run and passed explicitly to every
/// operation that needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftPolicy {
    /// Human-readable policy name.
    pub name: String,
    /// Weekday standard for male staff.
    pub weekday_male: Duration,
    /// Weekday standard for female staff.
    pub weekday_female: Duration,
    /// Saturday standard for all staff.
    pub saturday: Duration,
    /// The earned-leave formula.
    pub earned_leave: EarnedLeaveRule,
}

impl ShiftPolicy {
    /// The stock policy: 9h10m / 8h25m weekdays, 7h10m Saturdays, plain leave.
    pub fn builtin() -> Self {
        Self {
            name: "Standard attendance policy".to_string(),
            weekday_male: Duration::seconds(STD_WEEKDAY_MALE_SECONDS),
            weekday_female: Duration::seconds(STD_WEEKDAY_FEMALE_SECONDS),
            saturday: Duration::seconds(STD_SATURDAY_SECONDS),
            earned_leave: EarnedLeaveRule::Plain,
        }
    }

    /// Returns a copy of this policy using a different earned-leave rule.
    pub fn with_earned_leave(mut self, rule: EarnedLeaveRule) -> Self {
        self.earned_leave = rule;
        self
    }
}

impl Default for ShiftPolicy {
    fn default() -> Self {
        Self::builtin()
    }
}
