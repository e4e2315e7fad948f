//! Islamic prayer times and Qibla direction built on low-precision solar
//! position.
//!
//! This crate provides:
//! - Calculation method registry (ISNA, MWL, Egypt, Karachi, Makkah)
//! - Fajr, Sunrise, Dhuhr, Asr, Maghrib and Isha for any location and date
//! - Next-prayer countdown and current prayer period
//! - Qibla bearing, distance and compass heading checks
//! - Adhkar, Qiyam and per-prayer reminder instants
//!
//! Times are local wall-clock values for a caller-supplied UTC offset. Where
//! the Sun never reaches an event's altitude (high latitudes), that time is
//! `None` and displays as `--:--`.

pub mod config;
pub mod error;
pub mod method;
pub mod prayer;
pub mod prayer_types;
pub mod qibla;
pub mod reminders;
pub mod schedule;
pub mod util;

pub use config::{AlertSettings, PrayerConfig, ReminderSettings};
pub use error::MiqatError;
pub use method::{CalculationMethod, IshaRule};
pub use prayer::{
    PrayerCalculator, PrayerHours, asr_altitude_deg, calculate_times, compute_prayer_hours,
    compute_prayer_times, hour_angle_rad, solar_noon_hours,
};
pub use prayer_types::{
    ALL_PRAYERS, GeoLocation, MAGHRIB_BUFFER_MIN, NextPrayerInfo, OBLIGATORY_PRAYERS, Prayer,
    PrayerTimes, SUNRISE_ALTITUDE_DEG,
};
pub use qibla::{
    FACING_TOLERANCE_DEG, KAABA, compass_point, is_facing_qibla, qibla_direction,
    qibla_distance_km, qibla_for,
};
pub use reminders::{
    QiyamTime, Reminder, prayer_alert_instants, reminder_clock, reminder_instant,
    scheduled_reminders,
};
pub use schedule::{current_prayer, next_prayer};

pub use miqat_time::{ClockTime, UNDEFINED_TIME, format_clock};
