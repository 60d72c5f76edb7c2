//! Employee header scraping.

use crate::models::EmployeeHeader;

/// Label marking the employee name line.
pub const EMPLOYEE_NAME_LABEL: &str = "Employee Name";

/// Label marking the employee code line.
pub const EMPLOYEE_CODE_LABEL: &str = "Employee Code";

/// Label marking the department line.
pub const DEPARTMENT_LABEL: &str = "Department";

/// Scrapes the header fields from labelled lines.
///
/// Each label is matched independently on every line. The value is the text
/// after the last colon, trimmed; when several lines match, the last one
/// wins. An empty value counts as not found.
///
/// # Example
///
/// ```
/// use attendance_engine::extraction::extract_employee_header;
///
/// let header = extract_employee_header(&["Employee Name : Asha Rao", "Employee Code: E042"]);
/// assert_eq!(header.name.as_deref(), Some("Asha Rao"));
/// assert_eq!(header.code.as_deref(), Some("E042"));
/// assert_eq!(header.department, None);
/// ```
pub fn extract_employee_header(lines: &[&str]) -> EmployeeHeader {
    let mut header = EmployeeHeader::default();

    for line in lines {
        if line.contains(EMPLOYEE_NAME_LABEL) {
            header.name = value_after_last_colon(line);
        }
        if line.contains(EMPLOYEE_CODE_LABEL) {
            header.code = value_after_last_colon(line);
        }
        if line.contains(DEPARTMENT_LABEL) {
            header.department = value_after_last_colon(line);
        }
    }

    header
}

fn value_after_last_colon(line: &str) -> Option<String> {
    let value = line.rsplit(':').next().unwrap_or(line).trim();
    (!value.is_empty()).then(|| value.to_string())
}
