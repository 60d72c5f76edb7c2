//! Attendance extraction and aggregation engine.
//!
//! This crate turns the plain text of an attendance export into per-day
//! records, overtime against a configured standard shift, absences, and
//! earned-leave days. Around that core it provides summary persistence,
//! fixed-layout text reports and an HTTP API.
//!
//! ```
//! use attendance_engine::calculation::process_document;
//! use attendance_engine::config::ShiftPolicy;
//! use attendance_engine::models::Gender;
//!
//! let report = process_document(
//!     "Employee Code : 10457\n10/03/2025 Mon 09:00 19:00",
//!     Gender::Male,
//!     &ShiftPolicy::builtin(),
//! )
//! .unwrap();
//! assert_eq!(report.summary.total_overtime_seconds, 3_000);
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod extraction;
pub mod models;
pub mod report;
pub mod store;
