use chrono::{Duration, NaiveDate};
use miqat_base::{CalculationMethod, Prayer, calculate_times, next_prayer, qibla_direction};
use proptest::prelude::*;

fn method_strategy() -> impl Strategy<Value = CalculationMethod> {
    prop::sample::select(CalculationMethod::all())
}

fn date_from(days: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(1950, 1, 1).unwrap() + Duration::days(days)
}

proptest! {
    /// Sun-horizon events exist everywhere outside the polar regions.
    #[test]
    fn horizon_events_defined_below_sixty(
        lat in -60.0f64..=60.0,
        lon in -180.0f64..=180.0,
        days in 0i64..54_000,
        method in method_strategy(),
    ) {
        let t = calculate_times(lat, lon, method, 0.0, date_from(days));
        for p in [Prayer::Sunrise, Prayer::Dhuhr, Prayer::Asr, Prayer::Maghrib] {
            prop_assert!(t.get(p).is_some(), "{} undefined: {}", p, t);
        }
    }

    /// Twilight reaches 19.5 deg below the horizon every night up to 45 deg.
    #[test]
    fn all_six_defined_below_forty_five(
        lat in -45.0f64..=45.0,
        lon in -180.0f64..=180.0,
        days in 0i64..54_000,
        method in method_strategy(),
    ) {
        let t = calculate_times(lat, lon, method, 0.0, date_from(days));
        prop_assert!(t.is_complete(), "{}", t);
        for (_, clock) in t.iter() {
            let s = clock.unwrap().to_string();
            prop_assert_eq!(s.len(), 5);
            prop_assert!(s.parse::<miqat_base::ClockTime>().is_ok());
        }
    }

    #[test]
    fn dhuhr_ignores_latitude(
        lat_a in -89.0f64..=89.0,
        lat_b in -89.0f64..=89.0,
        lon in -180.0f64..=180.0,
        days in 0i64..54_000,
    ) {
        let d = date_from(days);
        let a = calculate_times(lat_a, lon, CalculationMethod::Mwl, 3.0, d);
        let b = calculate_times(lat_b, lon, CalculationMethod::Mwl, 3.0, d);
        prop_assert_eq!(a.dhuhr, b.dhuhr);
    }

    #[test]
    fn makkah_isha_follows_maghrib(
        lat in -60.0f64..=60.0,
        lon in -180.0f64..=180.0,
        days in 0i64..54_000,
    ) {
        let t = calculate_times(lat, lon, CalculationMethod::Makkah, 0.0, date_from(days));
        prop_assert_eq!(t.isha, t.maghrib.map(|m| m.add_minutes(90)));
    }

    /// The next prayer is always strictly ahead and less than a day away.
    #[test]
    fn next_prayer_within_a_day(
        lat in -45.0f64..=45.0,
        days in 0i64..54_000,
        secs in 0u32..86_400,
    ) {
        let d = date_from(days);
        let t = calculate_times(lat, 31.0, CalculationMethod::Mwl, 2.0, d);
        let now = d.and_hms_opt(0, 0, 0).unwrap() + Duration::seconds(secs as i64);
        let info = next_prayer(&t, now).unwrap();
        prop_assert!(info.at > now);
        prop_assert!(info.total_seconds() < 86_400);
        prop_assert!(info.prayer.is_obligatory());
    }

    #[test]
    fn qibla_in_range(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
        let b = qibla_direction(lat, lon);
        prop_assert!((0.0..360.0).contains(&b), "{}", b);
    }
}
