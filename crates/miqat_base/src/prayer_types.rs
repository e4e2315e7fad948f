//! Types for prayer time calculations.
//!
//! Provides geographic location, prayer identifiers, the daily prayer time
//! record, and the next-prayer countdown.

use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;
use miqat_time::{ClockTime, format_clock};

/// Sun altitude at sunrise and sunset in degrees: 34' refraction plus the
/// 16' solar semidiameter, rounded as in common prayer-time tables.
pub const SUNRISE_ALTITUDE_DEG: f64 = -0.833;

/// Minutes added to sunset to obtain Maghrib.
pub const MAGHRIB_BUFFER_MIN: f64 = 4.0;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters. Carried for callers only;
    /// no calculation depends on it.
    pub altitude_m: f64,
}

impl GeoLocation {
    /// Create a new geographic location.
    pub const fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Location at sea level.
    pub const fn at_sea_level(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self::new(latitude_deg, longitude_deg, 0.0)
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// The six daily times, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Prayer {
    Fajr,
    /// Informational only; never a "next" or "current" prayer.
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

/// All six times in chronological order.
pub const ALL_PRAYERS: [Prayer; 6] = [
    Prayer::Fajr,
    Prayer::Sunrise,
    Prayer::Dhuhr,
    Prayer::Asr,
    Prayer::Maghrib,
    Prayer::Isha,
];

/// The five obligatory prayers in canonical order.
pub const OBLIGATORY_PRAYERS: [Prayer; 5] = [
    Prayer::Fajr,
    Prayer::Dhuhr,
    Prayer::Asr,
    Prayer::Maghrib,
    Prayer::Isha,
];

impl Prayer {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fajr => "Fajr",
            Self::Sunrise => "Sunrise",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
        }
    }

    /// Whether this is one of the five obligatory prayers.
    pub const fn is_obligatory(self) -> bool {
        !matches!(self, Self::Sunrise)
    }
}

impl Display for Prayer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Local clock times of the six daily events for one date.
///
/// `None` marks a time whose sun-angle geometry is undefined at that
/// latitude and season; it is displayed as `--:--`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrayerTimes {
    pub fajr: Option<ClockTime>,
    pub sunrise: Option<ClockTime>,
    pub dhuhr: Option<ClockTime>,
    pub asr: Option<ClockTime>,
    pub maghrib: Option<ClockTime>,
    pub isha: Option<ClockTime>,
}

impl PrayerTimes {
    /// Time of a single prayer.
    pub const fn get(&self, prayer: Prayer) -> Option<ClockTime> {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// `HH:MM`, or `--:--` when undefined.
    pub fn formatted(&self, prayer: Prayer) -> String {
        format_clock(self.get(prayer))
    }

    /// All six entries in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, Option<ClockTime>)> + '_ {
        ALL_PRAYERS.iter().map(move |&p| (p, self.get(p)))
    }

    /// Whether every one of the six times is defined.
    pub fn is_complete(&self) -> bool {
        self.iter().all(|(_, t)| t.is_some())
    }
}

impl Display for PrayerTimes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, (prayer, time)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", prayer.name(), format_clock(time))?;
        }
        Ok(())
    }
}

/// Countdown to the next obligatory prayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextPrayerInfo {
    pub prayer: Prayer,
    /// Wall-clock instant of the prayer (today or tomorrow).
    pub at: NaiveDateTime,
    pub hours_left: u32,
    pub minutes_left: u32,
    pub seconds_left: u32,
}

impl NextPrayerInfo {
    /// Remaining time in whole seconds.
    pub fn total_seconds(&self) -> u64 {
        self.hours_left as u64 * 3600 + self.minutes_left as u64 * 60 + self.seconds_left as u64
    }
}
