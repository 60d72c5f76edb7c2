//! Day record model and related types.
//!
//! This module defines the [`DayRecord`] emitted for every attendance row,
//! together with the weekday label, clock pair and status types it carries.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// A three-letter weekday label as printed in the report.
///
/// The label is taken from the text, never derived from the date, so it may
/// disagree with the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekdayLabel {
    /// Monday.
    Mon,
    /// Tuesday.
    Tue,
    /// Wednesday.
    Wed,
    /// Thursday.
    Thu,
    /// Friday.
    Fri,
    /// Saturday.
    Sat,
    /// Sunday.
    Sun,
}

impl WeekdayLabel {
    /// All labels, Monday first.
    pub const ALL: [WeekdayLabel; 7] = [
        WeekdayLabel::Mon,
        WeekdayLabel::Tue,
        WeekdayLabel::Wed,
        WeekdayLabel::Thu,
        WeekdayLabel::Fri,
        WeekdayLabel::Sat,
        WeekdayLabel::Sun,
    ];

    /// Returns the label as it appears in the report text.
    pub fn as_str(&self) -> &'static str {
        match self {
            WeekdayLabel::Mon => "Mon",
            WeekdayLabel::Tue => "Tue",
            WeekdayLabel::Wed => "Wed",
            WeekdayLabel::Thu => "Thu",
            WeekdayLabel::Fri => "Fri",
            WeekdayLabel::Sat => "Sat",
            WeekdayLabel::Sun => "Sun",
        }
    }

    /// Returns true for the Saturday label, which has its own standard shift.
    pub fn is_saturday(&self) -> bool {
        *self == WeekdayLabel::Sat
    }

    /// Returns the matching chrono weekday.
    pub fn to_weekday(&self) -> Weekday {
        match self {
            WeekdayLabel::Mon => Weekday::Mon,
            WeekdayLabel::Tue => Weekday::Tue,
            WeekdayLabel::Wed => Weekday::Wed,
            WeekdayLabel::Thu => Weekday::Thu,
            WeekdayLabel::Fri => Weekday::Fri,
            WeekdayLabel::Sat => Weekday::Sat,
            WeekdayLabel::Sun => Weekday::Sun,
        }
    }
}

impl fmt::Display for WeekdayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeekdayLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WeekdayLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| format!("unknown weekday label '{}'", s))
    }
}

/// Attendance status of a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// A clock-in/clock-out pair was recorded.
    Present,
    /// The row carries the absence marker.
    Absent,
    /// A weekday row with neither an absence marker nor a time pair.
    OffOrHoliday,
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayStatus::Present => write!(f, "Present"),
            DayStatus::Absent => write!(f, "Absent"),
            DayStatus::OffOrHoliday => write!(f, "Off/Holiday"),
        }
    }
}

/// A chronologically ordered clock-in/clock-out pair.
///
/// `clock_in <= clock_out` always holds: pairs are built through
/// [`ClockPair::ordered`], and deserializing an out-of-order pair fails.
///
/// # Example
///
/// ```
/// use attendance_engine::models::ClockPair;
/// use chrono::NaiveTime;
///
/// let late = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
/// let early = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let pair = ClockPair::ordered(late, early);
/// assert_eq!(pair.clock_in(), early);
/// assert_eq!(pair.worked().num_hours(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawClockPair")]
pub struct ClockPair {
    clock_in: NaiveTime,
    clock_out: NaiveTime,
}

#[derive(Deserialize)]
struct RawClockPair {
    clock_in: NaiveTime,
    clock_out: NaiveTime,
}

impl TryFrom<RawClockPair> for ClockPair {
    type Error = String;

    fn try_from(raw: RawClockPair) -> Result<Self, Self::Error> {
        if raw.clock_in > raw.clock_out {
            return Err(format!(
                "clock_in {} is after clock_out {}",
                raw.clock_in, raw.clock_out
            ));
        }
        Ok(Self {
            clock_in: raw.clock_in,
            clock_out: raw.clock_out,
        })
    }
}

impl ClockPair {
    /// Orders two times so the earlier becomes clock-in.
    ///
    /// Equal times produce a zero-length pair.
    pub fn ordered(first: NaiveTime, second: NaiveTime) -> Self {
        if first <= second {
            Self {
                clock_in: first,
                clock_out: second,
            }
        } else {
            Self {
                clock_in: second,
                clock_out: first,
            }
        }
    }

    /// The earlier of the two times.
    pub fn clock_in(&self) -> NaiveTime {
        self.clock_in
    }

    /// The later of the two times.
    pub fn clock_out(&self) -> NaiveTime {
        self.clock_out
    }

    /// Time between clock-in and clock-out on the same day.
    pub fn worked(&self) -> Duration {
        self.clock_out - self.clock_in
    }
}

/// One attendance row, unique by date after de-duplication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// The date exactly as found in the text (`DD/MM/YYYY`).
    pub date: String,
    /// The weekday label found in the row's context window.
    pub weekday: WeekdayLabel,
    /// The clock pair, absent for absent and off days.
    pub clock: Option<ClockPair>,
    /// Worked time in seconds, zero without a clock pair.
    pub worked_seconds: i64,
    /// Overtime beyond the standard shift in seconds.
    pub overtime_seconds: i64,
    /// The day's classification.
    pub status: DayStatus,
}

impl DayRecord {
    /// Returns the clock-in time, if any.
    pub fn clock_in(&self) -> Option<NaiveTime> {
        self.clock.map(|c| c.clock_in())
    }

    /// Returns the clock-out time, if any.
    pub fn clock_out(&self) -> Option<NaiveTime> {
        self.clock.map(|c| c.clock_out())
    }

    /// Returns the worked duration.
    pub fn worked(&self) -> Duration {
        Duration::seconds(self.worked_seconds)
    }

    /// Returns the overtime duration.
    pub fn overtime(&self) -> Duration {
        Duration::seconds(self.overtime_seconds)
    }
}
