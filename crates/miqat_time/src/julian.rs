//! Gregorian calendar to Julian Day conversion.
//!
//! Uses the civil-calendar integer algorithm (Fliegel & Van Flandern form)
//! shifted by -0.5 day so the result is the Julian Day at 00:00 of the
//! civil date.

use chrono::{Datelike, NaiveDate};

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Day at 00:00 of a Gregorian calendar date.
///
/// `a = floor((14 - month) / 12)`, `y = year + 4800 - a`,
/// `m = month + 12a - 3`,
/// `JD = day + floor((153m + 2) / 5) + 365y + floor(y/4) - floor(y/100)
///       + floor(y/400) - 32045 - 0.5`
pub fn calendar_to_jd(year: i32, month: u32, day: u32) -> f64 {
    let month = month as f64;
    let a = ((14.0 - month) / 12.0).floor();
    let y = year as f64 + 4800.0 - a;
    let m = month + 12.0 * a - 3.0;

    day as f64 + ((153.0 * m + 2.0) / 5.0).floor() + 365.0 * y + (y / 4.0).floor()
        - (y / 100.0).floor()
        + (y / 400.0).floor()
        - 32_045.0
        - 0.5
}

/// Julian Day at 00:00 of a `chrono` date.
pub fn julian_day(date: NaiveDate) -> f64 {
    calendar_to_jd(date.year(), date.month(), date.day())
}

/// Days elapsed since J2000.0.
pub fn days_since_j2000(jd: f64) -> f64 {
    jd - J2000_JD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_day_start() {
        assert_eq!(calendar_to_jd(2000, 1, 1), 2_451_544.5);
    }

    #[test]
    fn unix_epoch() {
        assert_eq!(calendar_to_jd(1970, 1, 1), 2_440_587.5);
    }

    #[test]
    fn february_uses_previous_year_shift() {
        // Feb 29 and Mar 1 of a leap year must be consecutive days.
        let feb29 = calendar_to_jd(2024, 2, 29);
        let mar1 = calendar_to_jd(2024, 3, 1);
        assert_eq!(mar1 - feb29, 1.0);
    }

    #[test]
    fn century_non_leap() {
        let feb28 = calendar_to_jd(1900, 2, 28);
        let mar1 = calendar_to_jd(1900, 3, 1);
        assert_eq!(mar1 - feb28, 1.0);
    }

    #[test]
    fn chrono_date_matches_components() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        assert_eq!(julian_day(date), calendar_to_jd(2024, 6, 21));
        assert_eq!(julian_day(date), 2_460_482.5);
    }

    #[test]
    fn days_since_epoch() {
        assert_eq!(days_since_j2000(J2000_JD + 10.0), 10.0);
    }
}
