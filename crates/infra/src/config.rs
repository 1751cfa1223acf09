use chrono_tz::Tz;
use std::{fmt::Display, str::FromStr};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Time zone used to pick the hour and minute of repeating reminders
    /// and to render appointment dates
    pub timezone: Tz,
    /// Delay in seconds before a health alert reminder fires
    pub health_alert_delay_secs: i64,
    /// How often the local notification center looks for due notifications
    pub delivery_interval_secs: u64,
    /// The decision the local notification center records the first time
    /// notification authorization is requested
    pub notifications_authorized: bool,
    /// Whether the sample medicine and appointment reminders are added at startup
    pub seed_sample_data: bool,
    /// JSON file replacing the built in sample data
    pub sample_data_path: Option<String>,
}

fn env_or_default<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
{
    match std::env::var(key) {
        Ok(value) => match value.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    key, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

const DEFAULT_HEALTH_ALERT_DELAY_SECS: i64 = 10;

fn health_alert_delay_or_default(delay_secs: i64) -> i64 {
    if delay_secs < 0 || chrono::Duration::try_seconds(delay_secs).is_none() {
        warn!(
            "HEALTH_ALERT_DELAY_SECS: {} is out of range, falling back to {} seconds.",
            delay_secs, DEFAULT_HEALTH_ALERT_DELAY_SECS
        );
        return DEFAULT_HEALTH_ALERT_DELAY_SECS;
    }
    delay_secs
}

impl Config {
    pub fn new() -> Self {
        let timezone = env_or_default("REMINDERS_TIMEZONE", Tz::UTC);
        let health_alert_delay_secs = health_alert_delay_or_default(env_or_default(
            "HEALTH_ALERT_DELAY_SECS",
            DEFAULT_HEALTH_ALERT_DELAY_SECS,
        ));
        let mut delivery_interval_secs = env_or_default("DELIVERY_INTERVAL_SECS", 1);
        if delivery_interval_secs == 0 {
            warn!("DELIVERY_INTERVAL_SECS must be positive, falling back to 1 second.");
            delivery_interval_secs = 1;
        }
        let notifications_authorized = env_or_default("NOTIFICATIONS_AUTHORIZED", true);
        let seed_sample_data = env_or_default("SEED_SAMPLE_DATA", true);
        let sample_data_path = std::env::var("SAMPLE_DATA_PATH").ok();
        if let Some(path) = &sample_data_path {
            info!("Sample data is going to be loaded from: {}", path);
        }

        Self {
            timezone,
            health_alert_delay_secs,
            delivery_interval_secs,
            notifications_authorized,
            seed_sample_data,
            sample_data_path,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: Tz::UTC,
            health_alert_delay_secs: DEFAULT_HEALTH_ALERT_DELAY_SECS,
            delivery_interval_secs: 1,
            notifications_authorized: true,
            seed_sample_data: true,
            sample_data_path: None,
        }
    }
}
