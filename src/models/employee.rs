//! Employee header and gender types.
//!
//! This module defines the [`EmployeeHeader`] extracted once per document and
//! the [`Gender`] selector that picks the weekday standard shift.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display sentinel for a header field that was not found in the document.
pub const NOT_AVAILABLE: &str = "N/A";

/// The gender selector for a processing run.
///
/// One value covers the whole document; it chooses which weekday standard
/// shift applies to every non-Saturday row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male staff (longer weekday standard).
    Male,
    /// Female staff (shorter weekday standard).
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(format!("unknown gender '{}', expected male or female", other)),
        }
    }
}

/// Identifying fields scraped from the document header.
///
/// Every field is optional; a missing label is not an error. The
/// [`NOT_AVAILABLE`] sentinel only appears through the display helpers.
///
/// # Example
///
/// ```
/// use attendance_engine::models::EmployeeHeader;
///
/// let header = EmployeeHeader {
///     name: Some("Asha Rao".to_string()),
///     code: None,
///     department: None,
/// };
/// assert_eq!(header.display_name(), "Asha Rao");
/// assert_eq!(header.display_code(), "N/A");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeHeader {
    /// Value of the `Employee Name` line.
    pub name: Option<String>,
    /// Value of the `Employee Code` line.
    pub code: Option<String>,
    /// Value of the `Department` line.
    #[serde(default)]
    pub department: Option<String>,
}

impl EmployeeHeader {
    /// Returns the name, or `N/A` when it was not found.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Returns the code, or `N/A` when it was not found.
    pub fn display_code(&self) -> &str {
        self.code.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Returns the department, or `N/A` when it was not found.
    pub fn display_department(&self) -> &str {
        self.department.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}
