//! Local wall-clock times at minute resolution.
//!
//! Provides `ClockTime`, the `HH:MM` value exchanged at the boundary of the
//! prayer-time calculator, and the `--:--` sentinel used when a time is
//! undefined.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};

use crate::error::TimeError;

/// Literal shown in place of an undefined clock time.
pub const UNDEFINED_TIME: &str = "--:--";

/// Minutes in one civil day.
pub const MINUTES_PER_DAY: u16 = 1440;

/// Local clock time as minutes since midnight, always in `[0, 1440)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    /// Build from hour and minute, or `None` if out of range.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self {
                minutes: (hour * 60 + minute) as u16,
            })
        } else {
            None
        }
    }

    /// Build from minutes since midnight, wrapping into one day.
    pub fn from_minutes(minutes: i64) -> Self {
        Self {
            minutes: minutes.rem_euclid(MINUTES_PER_DAY as i64) as u16,
        }
    }

    /// Round decimal hours to the nearest minute, hours taken mod 24.
    ///
    /// Returns `None` for NaN or infinite input.
    pub fn from_decimal_hours(hours: f64) -> Option<Self> {
        if !hours.is_finite() {
            return None;
        }
        let total = (hours * 60.0).round() as i64;
        Some(Self::from_minutes(total))
    }

    /// Hour component, 0-23.
    pub const fn hour(self) -> u32 {
        (self.minutes / 60) as u32
    }

    /// Minute component, 0-59.
    pub const fn minute(self) -> u32 {
        (self.minutes % 60) as u32
    }

    /// Minutes since midnight.
    pub const fn minutes_since_midnight(self) -> u16 {
        self.minutes
    }

    /// Decimal hours since midnight.
    pub fn as_decimal_hours(self) -> f64 {
        self.minutes as f64 / 60.0
    }

    /// Shift by a signed number of minutes, wrapping around midnight.
    pub fn add_minutes(self, minutes: i64) -> Self {
        Self::from_minutes(self.minutes as i64 + minutes)
    }

    /// Same clock time as a `chrono` time with zero seconds.
    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_num_seconds_from_midnight_opt(self.minutes as u32 * 60, 0)
            .unwrap_or(NaiveTime::MIN)
    }

    /// Truncate a `chrono` time to the minute.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self {
            minutes: (time.hour() * 60 + time.minute()) as u16,
        }
    }

    /// This clock time on the calendar day of `reference`.
    pub fn on_day_of(self, reference: NaiveDateTime) -> NaiveDateTime {
        reference.date().and_time(self.to_naive_time())
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == UNDEFINED_TIME {
            return Err(TimeError::Sentinel);
        }
        let invalid = || TimeError::InvalidClockTime(s.to_string());
        let (h, m) = s.split_once(':').ok_or_else(invalid)?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(invalid());
        }
        let hour: u32 = h.parse().map_err(|_| invalid())?;
        let minute: u32 = m.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).ok_or_else(invalid)
    }
}

/// Format an optional clock time, using `--:--` for `None`.
pub fn format_clock(time: Option<ClockTime>) -> String {
    match time {
        Some(t) => t.to_string(),
        None => UNDEFINED_TIME.to_string(),
    }
}

/// Parse boundary text where `--:--` means "undefined".
pub fn parse_clock(s: &str) -> Result<Option<ClockTime>, TimeError> {
    match s.parse::<ClockTime>() {
        Ok(t) => Ok(Some(t)),
        Err(TimeError::Sentinel) => Ok(None),
        Err(e) => Err(e),
    }
}

/// The next instant strictly after `now` at which the wall clock reads `clock`.
///
/// Today at `clock` if that is still ahead, otherwise tomorrow.
pub fn next_occurrence(clock: ClockTime, now: NaiveDateTime) -> NaiveDateTime {
    let today = clock.on_day_of(now);
    if today > now {
        today
    } else {
        today + Duration::days(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 21)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn display_zero_padded() {
        assert_eq!(ClockTime::new(4, 5).unwrap().to_string(), "04:05");
        assert_eq!(ClockTime::new(23, 59).unwrap().to_string(), "23:59");
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(ClockTime::new(24, 0).is_none());
        assert!(ClockTime::new(12, 60).is_none());
    }

    #[test]
    fn decimal_hours_round_to_nearest_minute() {
        assert_eq!(ClockTime::from_decimal_hours(5.5).unwrap().to_string(), "05:30");
        // 12:00:40 rounds up
        let t = ClockTime::from_decimal_hours(12.0 + 40.0 / 3600.0).unwrap();
        assert_eq!(t.to_string(), "12:01");
        // 12:00:20 rounds down
        let t = ClockTime::from_decimal_hours(12.0 + 20.0 / 3600.0).unwrap();
        assert_eq!(t.to_string(), "12:00");
    }

    #[test]
    fn decimal_hours_wrap_past_midnight() {
        // 23:59:50 rounds to 24:00 which wraps to 00:00
        let t = ClockTime::from_decimal_hours(23.0 + 59.0 / 60.0 + 50.0 / 3600.0).unwrap();
        assert_eq!(t.to_string(), "00:00");
        assert_eq!(ClockTime::from_decimal_hours(25.25).unwrap().to_string(), "01:15");
    }

    #[test]
    fn decimal_hours_non_finite() {
        assert!(ClockTime::from_decimal_hours(f64::NAN).is_none());
        assert!(ClockTime::from_decimal_hours(f64::INFINITY).is_none());
    }

    #[test]
    fn parse_valid() {
        let t: ClockTime = "05:07".parse().unwrap();
        assert_eq!((t.hour(), t.minute()), (5, 7));
        let t: ClockTime = "5:07".parse().unwrap();
        assert_eq!(t.minutes_since_midnight(), 307);
    }

    #[test]
    fn parse_sentinel_is_distinct_error() {
        assert_eq!("--:--".parse::<ClockTime>(), Err(TimeError::Sentinel));
        assert_eq!(parse_clock("--:--"), Ok(None));
    }

    #[test]
    fn parse_rejects_garbage() {
        for s in ["", "12", "24:00", "12:7", "ab:cd", "12:345", "-1:00"] {
            assert!(
                matches!(s.parse::<ClockTime>(), Err(TimeError::InvalidClockTime(_))),
                "{s:?} should be rejected"
            );
        }
    }

    #[test]
    fn format_optional() {
        assert_eq!(format_clock(None), UNDEFINED_TIME);
        assert_eq!(format_clock(ClockTime::new(18, 0)), "18:00");
    }

    #[test]
    fn add_minutes_wraps() {
        let t = ClockTime::new(23, 30).unwrap();
        assert_eq!(t.add_minutes(90).to_string(), "01:00");
        assert_eq!(t.add_minutes(-24 * 60).to_string(), "23:30");
    }

    #[test]
    fn naive_time_roundtrip_truncates_seconds() {
        let nt = NaiveTime::from_hms_opt(13, 45, 59).unwrap();
        let t = ClockTime::from_naive_time(nt);
        assert_eq!(t.to_string(), "13:45");
        assert_eq!(t.to_naive_time(), NaiveTime::from_hms_opt(13, 45, 0).unwrap());
    }

    #[test]
    fn next_occurrence_today_or_tomorrow() {
        let clock = ClockTime::new(12, 0).unwrap();
        assert_eq!(next_occurrence(clock, at(11, 59, 59)), at(12, 0, 0));
        let tomorrow = next_occurrence(clock, at(12, 0, 0));
        assert_eq!(tomorrow, at(12, 0, 0) + Duration::days(1));
    }
}
