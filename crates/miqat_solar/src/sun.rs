//! Low-precision apparent Sun position.
//!
//! Mean longitude, mean anomaly and ecliptic longitude follow the
//! Astronomical Almanac's low-precision solar formulae, accurate to about
//! 0.01 deg in declination and a few seconds in the equation of time for
//! dates within a couple of centuries of J2000.0.

use miqat_time::days_since_j2000;

/// Mean obliquity of the ecliptic used by the low-precision model, in degrees.
pub const OBLIQUITY_DEG: f64 = 23.439;

/// Minutes of time per degree of hour angle (360 deg = 1440 min).
pub const MINUTES_PER_DEGREE: f64 = 4.0;

/// Mean longitude, mean anomaly and ecliptic longitude for a Julian Day.
///
/// All three in degrees. `L` and `g` are reduced with a truncating
/// remainder, so they may be negative before J2000.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarLongitudes {
    /// Mean longitude `L`.
    pub mean_longitude_deg: f64,
    /// Mean anomaly `g`.
    pub mean_anomaly_deg: f64,
    /// Apparent ecliptic longitude `λ`.
    pub ecliptic_longitude_deg: f64,
}

impl SolarLongitudes {
    pub fn at(jd: f64) -> Self {
        let n = days_since_j2000(jd);
        let l = (280.460 + 0.985_647_4 * n) % 360.0;
        let g = (357.528 + 0.985_600_3 * n) % 360.0;
        let g_rad = g.to_radians();
        let lambda = l + 1.915 * g_rad.sin() + 0.020 * (2.0 * g_rad).sin();
        Self {
            mean_longitude_deg: l,
            mean_anomaly_deg: g,
            ecliptic_longitude_deg: lambda,
        }
    }
}

/// Solar declination in radians.
///
/// `δ = asin(sin λ · sin ε)`
pub fn sun_declination_rad(jd: f64) -> f64 {
    let lambda = SolarLongitudes::at(jd).ecliptic_longitude_deg.to_radians();
    (lambda.sin() * OBLIQUITY_DEG.to_radians().sin()).asin()
}

/// Right ascension in degrees, in `(-180, 180]`.
///
/// `α = atan2(cos ε · sin λ, cos λ)`
pub fn sun_right_ascension_deg(jd: f64) -> f64 {
    let lambda = SolarLongitudes::at(jd).ecliptic_longitude_deg.to_radians();
    let eps = OBLIQUITY_DEG.to_radians();
    (eps.cos() * lambda.sin()).atan2(lambda.cos()).to_degrees()
}

/// Equation of time in minutes (apparent minus mean solar time).
///
/// `EoT = (L − α) × 4`, with `L − α` wrapped into `[-180, 180)` so the
/// result stays within about ±17 minutes instead of jumping by a whole day
/// when `L` and `α` straddle 0 deg.
pub fn equation_of_time_min(jd: f64) -> f64 {
    let l = SolarLongitudes::at(jd).mean_longitude_deg;
    let alpha = sun_right_ascension_deg(jd);
    wrap_180(l - alpha) * MINUTES_PER_DEGREE
}

/// Wrap an angle into `[-180, 180)` degrees.
fn wrap_180(deg: f64) -> f64 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use miqat_time::calendar_to_jd;

    #[test]
    fn declination_near_zero_at_march_equinox() {
        let d = sun_declination_rad(calendar_to_jd(2024, 3, 20)).to_degrees();
        assert!(d.abs() < 0.5, "declination {d}");
    }

    #[test]
    fn declination_extremes_at_solstices() {
        let june = sun_declination_rad(calendar_to_jd(2024, 6, 21)).to_degrees();
        let dec = sun_declination_rad(calendar_to_jd(2024, 12, 21)).to_degrees();
        assert!((june - 23.44).abs() < 0.1, "june {june}");
        assert!((dec + 23.44).abs() < 0.1, "december {dec}");
    }

    #[test]
    fn equation_of_time_known_extremes() {
        // Early November: sundial ~16.4 min fast
        let nov = equation_of_time_min(calendar_to_jd(2024, 11, 3));
        assert!((nov - 16.4).abs() < 0.5, "november {nov}");
        // Mid February: sundial ~14.2 min slow
        let feb = equation_of_time_min(calendar_to_jd(2024, 2, 11));
        assert!((feb + 14.2).abs() < 0.5, "february {feb}");
    }

    #[test]
    fn equation_of_time_bounded_all_year() {
        let start = calendar_to_jd(1999, 1, 1);
        for day in 0..(366 * 3) {
            let e = equation_of_time_min(start + day as f64);
            assert!(e.abs() < 17.5, "day {day}: {e}");
        }
    }

    #[test]
    fn wrap_180_range() {
        assert_eq!(wrap_180(0.0), 0.0);
        assert_eq!(wrap_180(359.0), -1.0);
        assert_eq!(wrap_180(-181.0), 179.0);
        assert_eq!(wrap_180(180.0), -180.0);
    }

    #[test]
    fn longitudes_at_j2000() {
        let s = SolarLongitudes::at(2_451_545.0);
        assert!((s.mean_longitude_deg - 280.460).abs() < 1e-12);
        assert!((s.mean_anomaly_deg - 357.528).abs() < 1e-12);
    }
}
