//! Solar position model for prayer time geometry.
//!
//! This crate provides:
//! - Solar declination from the low-precision ecliptic longitude
//! - Equation of time in minutes
//! - `SolarPosition`, the (declination, equation of time) pair for one date
//!
//! All functions are closed-form and take a Julian Day at 00:00 of the civil
//! date, as produced by [`miqat_time::julian_day`].

pub mod sun;

use chrono::NaiveDate;
use miqat_time::julian_day;

pub use sun::{
    MINUTES_PER_DEGREE, OBLIQUITY_DEG, SolarLongitudes, equation_of_time_min,
    sun_declination_rad, sun_right_ascension_deg,
};

/// Solar quantities for a single civil date.
///
/// Computed once per date and shared by every prayer time of that day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Julian Day at 00:00 of the date.
    pub jd: f64,
    /// Declination in radians.
    pub declination_rad: f64,
    /// Equation of time in minutes.
    pub equation_of_time_min: f64,
}

impl SolarPosition {
    /// Solar position for a Julian Day.
    pub fn from_jd(jd: f64) -> Self {
        let position = Self {
            jd,
            declination_rad: sun_declination_rad(jd),
            equation_of_time_min: equation_of_time_min(jd),
        };
        log::trace!(
            "solar position jd={jd}: dec={:.4} deg, eot={:.3} min",
            position.declination_rad.to_degrees(),
            position.equation_of_time_min
        );
        position
    }

    /// Solar position for a calendar date.
    pub fn for_date(date: NaiveDate) -> Self {
        Self::from_jd(julian_day(date))
    }

    /// Declination in degrees.
    pub fn declination_deg(&self) -> f64 {
        self.declination_rad.to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_date_matches_jd() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let a = SolarPosition::for_date(date);
        let b = SolarPosition::from_jd(2_460_482.5);
        assert_eq!(a, b);
    }

    #[test]
    fn declination_degrees_accessor() {
        let p = SolarPosition::from_jd(2_460_482.5);
        assert!((p.declination_deg() - p.declination_rad.to_degrees()).abs() < 1e-15);
    }
}
