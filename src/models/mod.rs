//! Core data models for the attendance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod day_record;
mod employee;
mod report;
mod summary_row;

pub use day_record::{ClockPair, DayRecord, DayStatus, WeekdayLabel};
pub use employee::{EmployeeHeader, Gender, NOT_AVAILABLE};
pub use report::{AttendanceReport, AuditWarning, MonthlySummary};
pub use summary_row::{SummaryRow, WORK_NATURE_LABEL};
