//! Human-readable duration formatting.

/// Formats seconds as `HH:MM` of total hours and remaining minutes.
///
/// Hours are not wrapped at 24 and leftover seconds are dropped. Zero and
/// negative durations render as `00:00`.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::format_duration;
///
/// assert_eq!(format_duration(3_000), "00:50");
/// assert_eq!(format_duration(100 * 3600 + 5 * 60 + 59), "100:05");
/// assert_eq!(format_duration(-60), "00:00");
/// ```
pub fn format_duration(seconds: i64) -> String {
    if seconds <= 0 {
        return "00:00".to_string();
    }
    format!("{:02}:{:02}", seconds / 3600, (seconds % 3600) / 60)
}
