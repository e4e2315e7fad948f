//! Prayer time computation from solar hour angles.
//!
//! Every time except Dhuhr is the moment the Sun's center reaches a target
//! altitude, before or after local solar noon:
//!
//! `cos H = (sin h0 − sin φ · sin δ) / (cos φ · cos δ)`
//!
//! `t = 12 ∓ H/15 − EoT/60 − λ/15 + utc_offset`  (hours, − before noon)
//!
//! where `φ` is the latitude, `δ` the solar declination, `EoT` the equation of
//! time in minutes and `λ` the east longitude. When `|cos H| > 1` the Sun
//! never reaches `h0` that day and the time is undefined.

use chrono::NaiveDate;
use miqat_solar::SolarPosition;
use miqat_time::ClockTime;

use crate::config::PrayerConfig;
use crate::method::{CalculationMethod, IshaRule};
use crate::prayer_types::{
    GeoLocation, MAGHRIB_BUFFER_MIN, NextPrayerInfo, Prayer, PrayerTimes, SUNRISE_ALTITUDE_DEG,
};
use crate::schedule::{current_prayer, next_prayer};
use crate::util::normalize_24;

/// Hour angle in radians at which the Sun's center reaches `altitude_deg`.
///
/// Returns `None` when the Sun stays entirely above or below that altitude
/// (polar day or night), or when any input is NaN.
pub fn hour_angle_rad(altitude_deg: f64, declination_rad: f64, latitude_deg: f64) -> Option<f64> {
    let phi = latitude_deg.to_radians();
    let h0 = altitude_deg.to_radians();
    let cos_h = (h0.sin() - phi.sin() * declination_rad.sin()) / (phi.cos() * declination_rad.cos());
    if (-1.0..=1.0).contains(&cos_h) {
        Some(cos_h.acos())
    } else {
        None
    }
}

/// Sun altitude in degrees at the start of Asr.
///
/// Shadow length equals object height plus its noon shadow:
/// `h = atan(1 / (1 + tan|φ − δ|))`.
pub fn asr_altitude_deg(declination_rad: f64, latitude_deg: f64) -> f64 {
    let phi = latitude_deg.to_radians();
    let shadow = 1.0 + (phi - declination_rad).abs().tan();
    (1.0 / shadow).atan().to_degrees()
}

/// Local solar noon in decimal hours, normalized to [0, 24).
///
/// Depends only on longitude, equation of time and UTC offset.
pub fn solar_noon_hours(equation_of_time_min: f64, longitude_deg: f64, utc_offset_hours: f64) -> f64 {
    normalize_24(12.0 - equation_of_time_min / 60.0 - longitude_deg / 15.0 + utc_offset_hours)
}

/// Convert an hour angle to local decimal hours in [0, 24).
///
/// `rising` selects the morning side of noon.
pub fn hour_angle_to_hours(
    hour_angle_rad: f64,
    rising: bool,
    equation_of_time_min: f64,
    longitude_deg: f64,
    utc_offset_hours: f64,
) -> f64 {
    let sign = if rising { 1.0 } else { -1.0 };
    normalize_24(
        12.0 - sign * hour_angle_rad.to_degrees() / 15.0 - equation_of_time_min / 60.0
            - longitude_deg / 15.0
            + utc_offset_hours,
    )
}

/// Decimal-hour form of the six daily times, before rounding.
///
/// Maghrib and a fixed-offset Isha may exceed 24; they wrap when converted
/// to a [`ClockTime`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerHours {
    pub fajr: Option<f64>,
    pub sunrise: Option<f64>,
    pub dhuhr: f64,
    pub asr: Option<f64>,
    pub maghrib: Option<f64>,
    pub isha: Option<f64>,
}

/// Compute the unrounded prayer hours for one date.
pub fn compute_prayer_hours(
    location: &GeoLocation,
    config: &PrayerConfig,
    solar: &SolarPosition,
) -> PrayerHours {
    let lat = location.latitude_deg;
    let lon = location.longitude_deg;
    let dec = solar.declination_rad;
    let eot = solar.equation_of_time_min;
    let offset = config.utc_offset_hours;
    let method = config.method;

    let event = |prayer: Prayer, altitude_deg: f64, rising: bool| -> Option<f64> {
        let hours = hour_angle_rad(altitude_deg, dec, lat)
            .map(|ha| hour_angle_to_hours(ha, rising, eot, lon, offset));
        if hours.is_none() {
            log::debug!(
                "{prayer} undefined at lat={lat}, jd={}: sun never reaches {altitude_deg:.3} deg",
                solar.jd
            );
        }
        hours
    };

    let fajr = event(Prayer::Fajr, -method.fajr_angle_deg(), true);
    let sunrise = event(Prayer::Sunrise, SUNRISE_ALTITUDE_DEG, true);
    let dhuhr = solar_noon_hours(eot, lon, offset);
    let asr = event(Prayer::Asr, asr_altitude_deg(dec, lat), false);
    let sunset = event(Prayer::Maghrib, SUNRISE_ALTITUDE_DEG, false);
    let maghrib = sunset.map(|s| s + MAGHRIB_BUFFER_MIN / 60.0);
    let isha = match method.isha_rule() {
        IshaRule::Angle(angle) => event(Prayer::Isha, -angle, false),
        IshaRule::MinutesAfterMaghrib(minutes) => maghrib.map(|m| m + minutes / 60.0),
    };

    PrayerHours {
        fajr,
        sunrise,
        dhuhr,
        asr,
        maghrib,
        isha,
    }
}

/// Compute the six clock times for a location, configuration and date.
pub fn compute_prayer_times(
    location: &GeoLocation,
    config: &PrayerConfig,
    date: NaiveDate,
) -> PrayerTimes {
    let solar = SolarPosition::for_date(date);
    let hours = compute_prayer_hours(location, config, &solar);
    let clock = |h: Option<f64>| h.and_then(ClockTime::from_decimal_hours);

    let maghrib = clock(hours.maghrib);
    let isha = match config.method.isha_rule() {
        // Offset applied after rounding so Isha − Maghrib is exact.
        IshaRule::MinutesAfterMaghrib(minutes) => {
            maghrib.map(|m| m.add_minutes(minutes.round() as i64))
        }
        IshaRule::Angle(_) => clock(hours.isha),
    };

    PrayerTimes {
        fajr: clock(hours.fajr),
        sunrise: clock(hours.sunrise),
        dhuhr: ClockTime::from_decimal_hours(hours.dhuhr),
        asr: clock(hours.asr),
        maghrib,
        isha,
    }
}

/// Compute the six clock times from raw coordinates.
///
/// Inputs are not validated; NaN or out-of-range coordinates yield
/// undefined times rather than an error.
pub fn calculate_times(
    latitude_deg: f64,
    longitude_deg: f64,
    method: CalculationMethod,
    utc_offset_hours: f64,
    date: NaiveDate,
) -> PrayerTimes {
    compute_prayer_times(
        &GeoLocation::at_sea_level(latitude_deg, longitude_deg),
        &PrayerConfig::new(method, utc_offset_hours),
        date,
    )
}

/// A prayer time calculator bound to one location and configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerCalculator {
    location: GeoLocation,
    config: PrayerConfig,
}

impl PrayerCalculator {
    pub fn new(location: GeoLocation, config: PrayerConfig) -> Self {
        Self { location, config }
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
    }

    pub fn config(&self) -> &PrayerConfig {
        &self.config
    }

    /// Prayer times for a calendar date.
    pub fn calculate(&self, date: NaiveDate) -> PrayerTimes {
        compute_prayer_times(&self.location, &self.config, date)
    }

    /// Countdown to the next prayer after `now`, using `now`'s date.
    pub fn next_prayer(&self, now: chrono::NaiveDateTime) -> Option<NextPrayerInfo> {
        next_prayer(&self.calculate(now.date()), now)
    }

    /// The prayer period containing `now`, using `now`'s date.
    pub fn current_prayer(&self, now: chrono::NaiveDateTime) -> Option<Prayer> {
        current_prayer(&self.calculate(now.date()), now)
    }
}
