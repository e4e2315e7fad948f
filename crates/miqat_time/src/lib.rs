//! Calendar and clock primitives for prayer time computation.
//!
//! This crate provides:
//! - Gregorian date → Julian Day conversion
//! - `ClockTime`, the `HH:MM` local time value with its `--:--` sentinel
//! - Next-occurrence arithmetic for daily clock times
//! - The system's local UTC offset

pub mod clock;
pub mod error;
pub mod julian;

use chrono::{Local, NaiveDate, NaiveDateTime};

pub use clock::{
    ClockTime, MINUTES_PER_DAY, UNDEFINED_TIME, format_clock, next_occurrence, parse_clock,
};
pub use error::TimeError;
pub use julian::{J2000_JD, calendar_to_jd, days_since_j2000, julian_day};

/// Current UTC offset of the local system zone, in hours.
///
/// Half-hour and quarter-hour zones yield fractional values.
pub fn system_utc_offset_hours() -> f64 {
    let seconds = Local::now().offset().local_minus_utc();
    seconds as f64 / 3600.0
}

/// Current local wall-clock date and time.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
}

/// Parse `YYYY-MM-DDThh:mm:ss` or `YYYY-MM-DDThh:mm` (local wall clock).
pub fn parse_local_datetime(s: &str) -> Result<NaiveDateTime, TimeError> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(TimeError::from)
}
