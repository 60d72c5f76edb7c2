//! Configuration loading for the attendance engine.
//!
//! This module loads the attendance policy from YAML: the standard shift
//! length per gender for weekdays, the Saturday standard, and the
//! earned-leave formula.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Loaded policy: {}", config.policy().name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, POLICY_FILE_NAME};
pub use types::{
    EARNED_LEAVE_GRACE_SECONDS, EarnedLeaveConfig, EarnedLeaveRule, EarnedLeaveRuleKind,
    PolicyFile, STD_SATURDAY_SECONDS, STD_WEEKDAY_FEMALE_SECONDS, STD_WEEKDAY_MALE_SECONDS,
    ShiftPolicy, StandardShiftConfig,
};
