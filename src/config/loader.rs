//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the attendance
//! policy from a YAML file.

use std::fs;
use std::path::Path;

use chrono::Duration;

use crate::error::{EngineError, EngineResult};

use super::types::{EarnedLeaveRule, EarnedLeaveRuleKind, PolicyFile, ShiftPolicy};

/// File name looked up inside a configuration directory.
pub const POLICY_FILE_NAME: &str = "policy.yaml";

/// Loads and validates the attendance policy.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── policy.yaml   # Standard shifts and earned-leave rule
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Loaded policy: {}", loader.policy().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: ShiftPolicy,
}

impl ConfigLoader {
    /// Loads `policy.yaml` from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - A standard shift is not a positive `HH:MM` value
    /// - The grace is negative
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join(POLICY_FILE_NAME);
        let path_str = policy_path.display().to_string();

        let content = fs::read_to_string(&policy_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses a policy from YAML text; `origin` names the source in errors.
    pub fn from_yaml_str(content: &str, origin: &str) -> EngineResult<Self> {
        let file: PolicyFile =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        let policy = Self::validate(file)?;
        Ok(Self { policy })
    }

    /// A loader holding [`ShiftPolicy::builtin`].
    pub fn builtin() -> Self {
        Self {
            policy: ShiftPolicy::builtin(),
        }
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &ShiftPolicy {
        &self.policy
    }

    /// Consumes the loader, returning the policy.
    pub fn into_policy(self) -> ShiftPolicy {
        self.policy
    }

    fn validate(file: PolicyFile) -> EngineResult<ShiftPolicy> {
        let shifts = &file.standard_shift;
        let weekday_male = parse_standard("standard_shift.weekday_male", &shifts.weekday_male)?;
        let weekday_female =
            parse_standard("standard_shift.weekday_female", &shifts.weekday_female)?;
        let saturday = parse_standard("standard_shift.saturday", &shifts.saturday)?;

        let earned_leave = match file.earned_leave.rule {
            EarnedLeaveRuleKind::Plain => EarnedLeaveRule::Plain,
            EarnedLeaveRuleKind::Grace => {
                let grace_seconds = file.earned_leave.grace_seconds;
                if grace_seconds < 0 {
                    return Err(EngineError::InvalidPolicy {
                        field: "earned_leave.grace_seconds".to_string(),
                        message: "must not be negative".to_string(),
                    });
                }
                let limit = weekday_male.min(weekday_female).num_seconds();
                if grace_seconds > limit {
                    return Err(EngineError::InvalidPolicy {
                        field: "earned_leave.grace_seconds".to_string(),
                        message: format!(
                            "{} exceeds the shortest weekday standard ({}s)",
                            grace_seconds, limit
                        ),
                    });
                }
                EarnedLeaveRule::WithGrace { grace_seconds }
            }
        };

        Ok(ShiftPolicy {
            name: file.name,
            weekday_male,
            weekday_female,
            saturday,
            earned_leave,
        })
    }
}

/// Parses an `HH:MM` standard into a strictly positive duration.
fn parse_standard(field: &str, value: &str) -> EngineResult<Duration> {
    let invalid = |message: &str| EngineError::InvalidPolicy {
        field: field.to_string(),
        message: format!("'{}' {}", value, message),
    };

    let (hours, minutes) = value
        .trim()
        .split_once(':')
        .ok_or_else(|| invalid("is not in HH:MM form"))?;
    let hours: i64 = hours.parse().map_err(|_| invalid("has a non-numeric hour"))?;
    let minutes: i64 = minutes
        .parse()
        .map_err(|_| invalid("has a non-numeric minute"))?;

    if !(0..60).contains(&minutes) || hours < 0 {
        return Err(invalid("is out of range"));
    }

    let standard = Duration::try_hours(hours)
        .zip(Duration::try_minutes(minutes))
        .and_then(|(h, m)| h.checked_add(&m))
        .ok_or_else(|| invalid("is out of range"))?;
    if standard <= Duration::zero() {
        return Err(invalid("must be greater than zero"));
    }
    Ok(standard)
}
