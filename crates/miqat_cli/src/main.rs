use chrono::{Duration, NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use miqat_base::{
    AlertSettings, CalculationMethod, GeoLocation, IshaRule, MiqatError, Prayer, PrayerCalculator,
    PrayerConfig, QiyamTime, ReminderSettings, compass_point, prayer_alert_instants,
    qibla_direction, qibla_distance_km, scheduled_reminders,
};
use miqat_time::{local_now, parse_date, parse_local_datetime};

#[derive(Parser)]
#[command(name = "miqat", about = "Prayer times and Qibla direction", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Location {
    /// Latitude in degrees (north positive)
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude in degrees (east positive)
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,
}

#[derive(Args)]
struct Settings {
    /// Calculation method: ISNA, MWL, EGYPT, KARACHI or MAKKAH
    #[arg(long, env = "MIQAT_METHOD", default_value = "MWL")]
    method: String,
    /// UTC offset in hours (default: system local offset)
    #[arg(long, env = "MIQAT_UTC_OFFSET", allow_negative_numbers = true)]
    utc_offset: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prayer times for a date
    Times {
        #[command(flatten)]
        location: Location,
        #[command(flatten)]
        settings: Settings,
        /// Local date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Countdown to the next prayer
    Next {
        #[command(flatten)]
        location: Location,
        #[command(flatten)]
        settings: Settings,
        /// Local date-time (YYYY-MM-DDThh:mm[:ss], default: now)
        #[arg(long)]
        now: Option<String>,
    },
    /// Prayer period containing the current time
    Current {
        #[command(flatten)]
        location: Location,
        #[command(flatten)]
        settings: Settings,
        /// Local date-time (YYYY-MM-DDThh:mm[:ss], default: now)
        #[arg(long)]
        now: Option<String>,
    },
    /// Qibla bearing and distance
    Qibla {
        #[command(flatten)]
        location: Location,
    },
    /// Upcoming adhkar, Qiyam and prayer alerts
    Reminders {
        #[command(flatten)]
        location: Location,
        #[command(flatten)]
        settings: Settings,
        /// Local date-time (YYYY-MM-DDThh:mm[:ss], default: now)
        #[arg(long)]
        now: Option<String>,
        /// Enable the Qiyam reminder: DEFAULT (an hour before Fajr) or HH:MM
        #[arg(long)]
        qiyam: Option<String>,
        /// Also alert at sunrise
        #[arg(long)]
        sunrise: bool,
    },
    /// List calculation methods
    Methods,
}

fn require_method(key: &str) -> CalculationMethod {
    key.parse().unwrap_or_else(|e: MiqatError| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn require_date(date: Option<&str>) -> NaiveDate {
    match date {
        Some(s) => parse_date(s).unwrap_or_else(|e| {
            eprintln!("Invalid --date: {e}");
            std::process::exit(1);
        }),
        None => local_now().date(),
    }
}

fn require_now(now: Option<&str>) -> NaiveDateTime {
    match now {
        Some(s) => parse_local_datetime(s).unwrap_or_else(|e| {
            eprintln!("Invalid --now: {e}");
            std::process::exit(1);
        }),
        None => local_now(),
    }
}

fn require_qiyam(s: &str) -> QiyamTime {
    s.parse().unwrap_or_else(|e: MiqatError| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn calculator(location: &Location, settings: &Settings) -> PrayerCalculator {
    let method = require_method(&settings.method);
    let config = match settings.utc_offset {
        Some(offset) => PrayerConfig::new(method, offset),
        None => PrayerConfig::with_system_offset(method),
    };
    log::debug!(
        "method={} utc_offset={} lat={} lon={}",
        config.method,
        config.utc_offset_hours,
        location.lat,
        location.lon
    );
    PrayerCalculator::new(GeoLocation::at_sea_level(location.lat, location.lon), config)
}

fn describe_isha(method: CalculationMethod) -> String {
    match method.isha_rule() {
        IshaRule::Angle(deg) => format!("{deg} deg"),
        IshaRule::MinutesAfterMaghrib(min) => format!("{min} min after Maghrib"),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Times {
            location,
            settings,
            date,
        } => {
            let calc = calculator(&location, &settings);
            let date = require_date(date.as_deref());
            let times = calc.calculate(date);

            println!(
                "Prayer times for {} at {:.4}, {:.4} ({}, UTC{:+}):\n",
                date,
                location.lat,
                location.lon,
                calc.config().method,
                calc.config().utc_offset_hours
            );
            for (prayer, _) in times.iter() {
                println!("  {:8} {}", prayer.name(), times.formatted(prayer));
            }
        }

        Commands::Next {
            location,
            settings,
            now,
        } => {
            let calc = calculator(&location, &settings);
            let now = require_now(now.as_deref());
            match calc.next_prayer(now) {
                Some(info) => println!(
                    "{} at {} (in {:02}:{:02}:{:02})",
                    info.prayer,
                    info.at.format("%Y-%m-%d %H:%M"),
                    info.hours_left,
                    info.minutes_left,
                    info.seconds_left
                ),
                None => println!("No prayer time is defined at this latitude on this date"),
            }
        }

        Commands::Current {
            location,
            settings,
            now,
        } => {
            let calc = calculator(&location, &settings);
            let now = require_now(now.as_deref());
            match calc.current_prayer(now) {
                Some(prayer) => println!("{prayer}"),
                None => println!("No prayer time is defined at this latitude on this date"),
            }
        }

        Commands::Qibla { location } => {
            let bearing = qibla_direction(location.lat, location.lon);
            let distance = qibla_distance_km(location.lat, location.lon);
            println!(
                "Qibla: {:.2} deg ({}) from true north, {:.0} km to the Kaaba",
                bearing,
                compass_point(bearing),
                distance
            );
        }

        Commands::Reminders {
            location,
            settings,
            now,
            qiyam,
            sunrise,
        } => {
            let calc = calculator(&location, &settings);
            let now = require_now(now.as_deref());
            let today = calc.calculate(now.date());
            let tomorrow = calc.calculate(now.date() + Duration::days(1));

            let reminder_settings = ReminderSettings {
                qiyam_enabled: qiyam.is_some(),
                qiyam: qiyam.as_deref().map(require_qiyam).unwrap_or_default(),
                ..ReminderSettings::default()
            };
            let alert_settings = AlertSettings {
                sunrise,
                ..AlertSettings::default()
            };

            println!("Reminders after {}:\n", now.format("%Y-%m-%d %H:%M"));
            for (reminder, at) in scheduled_reminders(&reminder_settings, &today, &tomorrow, now) {
                println!("  {:16} {}", reminder.name(), at.format("%Y-%m-%d %H:%M"));
            }
            let mut alerts = prayer_alert_instants(&today, now, &alert_settings);
            alerts.sort_by_key(|&(_, at)| at);
            for (prayer, at) in alerts {
                let label = if prayer == Prayer::Sunrise {
                    "Sunrise".to_string()
                } else {
                    format!("{prayer} adhan")
                };
                println!("  {:16} {}", label, at.format("%Y-%m-%d %H:%M"));
            }
        }

        Commands::Methods => {
            for &m in CalculationMethod::all() {
                println!(
                    "{:8} Fajr {:>4} deg  Isha {:<20} {}",
                    m.key(),
                    m.fajr_angle_deg(),
                    describe_isha(m),
                    m.authority()
                );
            }
        }
    }
}
