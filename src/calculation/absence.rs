//! Absence marker detection.

/// The marker a time-clock export prints for an absent day.
pub const ABSENCE_MARKER: &str = "AB";

/// How many leading characters of a window are searched for the marker.
///
/// Later occurrences belong to unrelated columns or neighbouring rows.
pub const ABSENCE_CHECK_CHARS: usize = 50;

/// Returns true when [`ABSENCE_MARKER`] appears in the window's head.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::is_absent;
///
/// assert!(is_absent("21/03/2025 Sun AB"));
/// assert!(!is_absent("21/03/2025 Sun 09:00 17:00"));
/// ```
pub fn is_absent(window: &str) -> bool {
    window_head(window).contains(ABSENCE_MARKER)
}

/// The first [`ABSENCE_CHECK_CHARS`] characters of `window`.
fn window_head(window: &str) -> &str {
    match window.char_indices().nth(ABSENCE_CHECK_CHARS) {
        Some((end, _)) => &window[..end],
        None => window,
    }
}
