//! Clock-in/clock-out extraction.

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;

use crate::error::{EngineError, EngineResult};
use crate::models::ClockPair;

static TIME_PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{2}:[0-9]{2})\s+([0-9]{2}:[0-9]{2})").expect("valid time pair regex")
});

/// Finds the first two `HH:MM` tokens separated only by whitespace.
///
/// Returns the tokens in text order without validating them.
pub fn find_time_tokens(window: &str) -> Option<(&str, &str)> {
    let captures = TIME_PAIR_RE.captures(window)?;
    Some((captures.get(1)?.as_str(), captures.get(2)?.as_str()))
}

/// Extracts and orders the row's clock pair.
///
/// Returns `Ok(None)` when the window has no time pair. A token shaped like
/// `HH:MM` that is not a real time of day is an error for the whole document.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::extract_time_pair;
///
/// let pair = extract_time_pair("15/03/2025 Mon 19:00 09:00", "15/03/2025")
///     .unwrap()
///     .unwrap();
/// assert_eq!(pair.clock_in().to_string(), "09:00:00");
/// assert_eq!(pair.worked().num_hours(), 10);
/// ```
pub fn extract_time_pair(window: &str, date: &str) -> EngineResult<Option<ClockPair>> {
    let Some((first, second)) = find_time_tokens(window) else {
        return Ok(None);
    };

    let first = parse_clock(first, date)?;
    let second = parse_clock(second, date)?;
    Ok(Some(ClockPair::ordered(first, second)))
}

fn parse_clock(token: &str, date: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(token, "%H:%M").map_err(|_| EngineError::InvalidTimeToken {
        date: date.to_string(),
        token: token.to_string(),
    })
}
