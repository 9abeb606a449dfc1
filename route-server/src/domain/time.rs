//! Wall-clock time handling for timetable legs.
//!
//! Timetable times are "HH:MM" strings with no date attached. Arithmetic
//! between two times always looks forward: if the later time is earlier on
//! the clock, it is taken to be on the following day. A single leg or wait
//! can therefore span at most one midnight.

use chrono::{NaiveTime, Timelike};
use std::fmt;
use std::str::FromStr;

/// Minutes in one day, used for overnight rollover.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day with minute precision and no date.
///
/// # Examples
///
/// ```
/// use route_server::domain::TimeOfDay;
///
/// let t = TimeOfDay::parse_hhmm("14:30").unwrap();
/// assert_eq!(t.to_string(), "14:30");
/// assert_eq!(t.minute_of_day(), 870);
///
/// assert!(TimeOfDay::parse_hhmm("1430").is_err());
/// assert!(TimeOfDay::parse_hhmm("24:00").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Create from hour and minute components.
    ///
    /// Returns `None` if either component is out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// The input must be exactly two digits, a colon, and two digits.
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        Self::from_hm(hour, minute).ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes since midnight.
    pub fn minute_of_day(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    /// Minutes from `self` forward to `later`, rolling over midnight once
    /// if `later` is earlier on the clock.
    pub fn minutes_until(&self, later: TimeOfDay) -> u32 {
        let mut mins = later.0.signed_duration_since(self.0).num_minutes();
        if mins < 0 {
            mins += MINUTES_PER_DAY;
        }
        // Both operands are within one day, so this is in 0..1440
        mins as u32
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hhmm(s)
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

/// Travel time of a leg in minutes.
///
/// An arrival earlier on the clock than the departure is an overnight leg.
///
/// ```
/// use route_server::domain::{TimeOfDay, duration};
///
/// let dep = TimeOfDay::parse_hhmm("14:30").unwrap();
/// let arr = TimeOfDay::parse_hhmm("06:30").unwrap();
/// assert_eq!(duration(dep, arr), 960);
/// ```
pub fn duration(departure: TimeOfDay, arrival: TimeOfDay) -> u32 {
    departure.minutes_until(arrival)
}

/// Minutes spent waiting between arriving on one leg and departing on the next.
pub fn wait_time(arrival: TimeOfDay, next_departure: TimeOfDay) -> u32 {
    arrival.minutes_until(next_departure)
}

/// Render a minute count as "{h}h {m}m", or "{m}m" under an hour.
///
/// ```
/// use route_server::domain::format_duration;
///
/// assert_eq!(format_duration(0), "0m");
/// assert_eq!(format_duration(65), "1h 5m");
/// assert_eq!(format_duration(120), "2h 0m");
/// ```
pub fn format_duration(minutes: u32) -> String {
    let (hours, minutes) = (minutes / 60, minutes % 60);
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
