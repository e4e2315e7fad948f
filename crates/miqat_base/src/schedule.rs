//! Next-prayer countdown and current prayer period.
//!
//! Both functions are pure queries over a day's [`PrayerTimes`] and a local
//! wall-clock instant. Undefined (`--:--`) entries are never reached: they
//! are skipped when searching forward and ignored as period boundaries.

use chrono::{Duration, NaiveDateTime};
use miqat_time::ClockTime;

use crate::prayer_types::{NextPrayerInfo, OBLIGATORY_PRAYERS, Prayer, PrayerTimes};

/// The first obligatory prayer strictly after `now`.
///
/// Searches Fajr, Dhuhr, Asr, Maghrib, Isha in order (sunrise is excluded),
/// skipping undefined entries. When none remain today, returns the first
/// defined prayer (normally Fajr) at the same clock time tomorrow.
///
/// The countdown truncates to whole seconds. Returns `None` only when all
/// five obligatory times are undefined.
pub fn next_prayer(times: &PrayerTimes, now: NaiveDateTime) -> Option<NextPrayerInfo> {
    let today = defined(times)
        .map(|(p, t)| (p, t.on_day_of(now)))
        .find(|&(_, at)| at > now);

    let (prayer, at) = match today {
        Some(found) => found,
        None => {
            let (p, t) = defined(times).next()?;
            (p, t.on_day_of(now) + Duration::days(1))
        }
    };

    Some(countdown(prayer, at, now))
}

/// Defined obligatory prayers in canonical order.
fn defined(times: &PrayerTimes) -> impl Iterator<Item = (Prayer, ClockTime)> + '_ {
    OBLIGATORY_PRAYERS
        .iter()
        .filter_map(move |&p| times.get(p).map(|t| (p, t)))
}

fn countdown(prayer: Prayer, at: NaiveDateTime, now: NaiveDateTime) -> NextPrayerInfo {
    let millis = (at - now).num_milliseconds().max(0);
    let hours = millis / 3_600_000;
    let minutes = (millis / 60_000) % 60;
    let seconds = (millis / 1000) % 60;
    NextPrayerInfo {
        prayer,
        at,
        hours_left: hours as u32,
        minutes_left: minutes as u32,
        seconds_left: seconds as u32,
    }
}

/// The obligatory prayer whose period contains `now`.
///
/// Periods are half-open, `[start, next start)`, at minute resolution. The
/// night period wraps across midnight: before the first defined prayer the
/// current prayer is the last defined one (normally Isha). Undefined entries
/// do not start a period. Returns `None` only when all five are undefined.
pub fn current_prayer(times: &PrayerTimes, now: NaiveDateTime) -> Option<Prayer> {
    let minute = ClockTime::from_naive_time(now.time());
    let mut last_defined = None;
    let mut current = None;
    for &prayer in &OBLIGATORY_PRAYERS {
        if let Some(start) = times.get(prayer) {
            last_defined = Some(prayer);
            if start <= minute {
                current = Some(prayer);
            }
        }
    }
    current.or(last_defined)
}
