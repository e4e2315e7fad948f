//! Daily reminder and prayer alert instants.
//!
//! Everything here is pure: given a day's [`PrayerTimes`] and the local
//! wall-clock "now", compute when each reminder should next fire. Registering
//! alarms with a host scheduler is left to callers.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDateTime;
use miqat_time::{ClockTime, next_occurrence};

use crate::config::{AlertSettings, ReminderSettings};
use crate::error::MiqatError;
use crate::prayer_types::{ALL_PRAYERS, Prayer, PrayerTimes};

/// Minutes after Fajr for the morning adhkar reminder.
pub const MORNING_ADHKAR_AFTER_FAJR_MIN: i64 = 30;

/// Minutes after Asr for the evening adhkar reminder.
pub const EVENING_ADHKAR_AFTER_ASR_MIN: i64 = 15;

/// Minutes before Fajr for the default Qiyam reminder.
pub const QIYAM_BEFORE_FAJR_MIN: i64 = 60;

/// A recurring daily reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reminder {
    MorningAdhkar,
    EveningAdhkar,
    Qiyam,
}

impl Reminder {
    pub const fn name(self) -> &'static str {
        match self {
            Self::MorningAdhkar => "Morning adhkar",
            Self::EveningAdhkar => "Evening adhkar",
            Self::Qiyam => "Qiyam al-layl",
        }
    }
}

impl Display for Reminder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// When the Qiyam reminder fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QiyamTime {
    /// An hour before Fajr.
    #[default]
    BeforeFajr,
    /// A fixed local clock time.
    At(ClockTime),
}

impl Display for QiyamTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BeforeFajr => f.write_str("DEFAULT"),
            Self::At(t) => write!(f, "{t}"),
        }
    }
}

impl FromStr for QiyamTime {
    type Err = MiqatError;

    /// `DEFAULT` (any case) or `HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("DEFAULT") {
            return Ok(Self::BeforeFajr);
        }
        s.parse::<ClockTime>()
            .map(Self::At)
            .map_err(|_| MiqatError::InvalidQiyamTime(s.to_string()))
    }
}

/// Clock time at which `reminder` fires for the given day's times.
///
/// `None` when the anchoring prayer is undefined.
pub fn reminder_clock(reminder: Reminder, times: &PrayerTimes, qiyam: QiyamTime) -> Option<ClockTime> {
    match reminder {
        Reminder::MorningAdhkar => times
            .fajr
            .map(|t| t.add_minutes(MORNING_ADHKAR_AFTER_FAJR_MIN)),
        Reminder::EveningAdhkar => times.asr.map(|t| t.add_minutes(EVENING_ADHKAR_AFTER_ASR_MIN)),
        Reminder::Qiyam => match qiyam {
            QiyamTime::At(t) => Some(t),
            QiyamTime::BeforeFajr => times.fajr.map(|t| t.add_minutes(-QIYAM_BEFORE_FAJR_MIN)),
        },
    }
}

/// Next instant strictly after `now` at which `reminder` fires.
///
/// For [`QiyamTime::BeforeFajr`] pass the times of the day whose Fajr the
/// reminder precedes (normally tomorrow); day-to-day drift of Fajr is a
/// minute or two.
pub fn reminder_instant(
    reminder: Reminder,
    times: &PrayerTimes,
    qiyam: QiyamTime,
    now: NaiveDateTime,
) -> Option<NaiveDateTime> {
    reminder_clock(reminder, times, qiyam).map(|clock| next_occurrence(clock, now))
}

/// Instants of every reminder enabled in `settings`, in fixed order.
///
/// `tomorrow` supplies the Fajr anchor for the default Qiyam reminder.
pub fn scheduled_reminders(
    settings: &ReminderSettings,
    today: &PrayerTimes,
    tomorrow: &PrayerTimes,
    now: NaiveDateTime,
) -> Vec<(Reminder, NaiveDateTime)> {
    let wanted = [
        (Reminder::MorningAdhkar, settings.morning, today),
        (Reminder::EveningAdhkar, settings.evening, today),
        (Reminder::Qiyam, settings.qiyam_enabled, tomorrow),
    ];
    wanted
        .into_iter()
        .filter(|&(_, enabled, _)| enabled)
        .filter_map(|(r, _, times)| reminder_instant(r, times, settings.qiyam, now).map(|at| (r, at)))
        .collect()
}

/// Next occurrence of each enabled prayer, sunrise included, in
/// chronological prayer order. Undefined times are skipped.
pub fn prayer_alert_instants(
    times: &PrayerTimes,
    now: NaiveDateTime,
    enabled: &AlertSettings,
) -> Vec<(Prayer, NaiveDateTime)> {
    ALL_PRAYERS
        .iter()
        .filter(|&&p| enabled.is_enabled(p))
        .filter_map(|&p| times.get(p).map(|t| (p, next_occurrence(t, now))))
        .collect()
}
