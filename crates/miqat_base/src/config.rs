//! Calculation and notification settings.

use crate::method::CalculationMethod;
use crate::prayer_types::Prayer;
use crate::reminders::QiyamTime;

/// Inputs to prayer time calculation besides location and date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerConfig {
    pub method: CalculationMethod,
    /// Offset of local wall-clock time from UTC, in hours (may be fractional).
    pub utc_offset_hours: f64,
}

impl PrayerConfig {
    pub const fn new(method: CalculationMethod, utc_offset_hours: f64) -> Self {
        Self {
            method,
            utc_offset_hours,
        }
    }

    /// Config using the host's current UTC offset.
    pub fn with_system_offset(method: CalculationMethod) -> Self {
        Self::new(method, miqat_time::system_utc_offset_hours())
    }
}

impl Default for PrayerConfig {
    fn default() -> Self {
        Self::new(CalculationMethod::default(), 0.0)
    }
}

/// Which daily reminders are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderSettings {
    pub morning: bool,
    pub evening: bool,
    pub qiyam_enabled: bool,
    pub qiyam: QiyamTime,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            morning: true,
            evening: true,
            qiyam_enabled: false,
            qiyam: QiyamTime::default(),
        }
    }
}

/// Per-prayer alert toggles. Sunrise is off by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertSettings {
    pub fajr: bool,
    pub sunrise: bool,
    pub dhuhr: bool,
    pub asr: bool,
    pub maghrib: bool,
    pub isha: bool,
}

impl AlertSettings {
    /// Every alert on, sunrise included.
    pub const fn all() -> Self {
        Self {
            fajr: true,
            sunrise: true,
            dhuhr: true,
            asr: true,
            maghrib: true,
            isha: true,
        }
    }

    pub const fn is_enabled(&self, prayer: Prayer) -> bool {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            sunrise: false,
            ..Self::all()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prayer_types::ALL_PRAYERS;

    #[test]
    fn default_prayer_config() {
        let cfg = PrayerConfig::default();
        assert_eq!(cfg.method, CalculationMethod::Mwl);
        assert_eq!(cfg.utc_offset_hours, 0.0);
    }

    #[test]
    fn system_offset_is_whole_quarter_hours() {
        let cfg = PrayerConfig::with_system_offset(CalculationMethod::Karachi);
        assert_eq!(cfg.method, CalculationMethod::Karachi);
        assert!((-14.0..=14.0).contains(&cfg.utc_offset_hours));
        let quarters = cfg.utc_offset_hours * 4.0;
        assert!((quarters - quarters.round()).abs() < 1e-9);
    }

    #[test]
    fn reminder_defaults() {
        let r = ReminderSettings::default();
        assert!(r.morning && r.evening);
        assert!(!r.qiyam_enabled);
        assert_eq!(r.qiyam, QiyamTime::BeforeFajr);
    }

    #[test]
    fn alert_defaults_skip_sunrise() {
        let a = AlertSettings::default();
        for p in ALL_PRAYERS {
            assert_eq!(a.is_enabled(p), p != Prayer::Sunrise, "{p}");
        }
        assert!(AlertSettings::all().is_enabled(Prayer::Sunrise));
    }
}
