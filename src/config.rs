use crate::rollover::RolloverPolicy;
use std::{env, path::PathBuf, str::FromStr, time::Duration};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub persist_interval: Duration,
    pub rollover_interval: Duration,
    pub reset_weekly_habits: bool,
    pub seed_sample_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            data_path: PathBuf::from("data/state.json"),
            persist_interval: Duration::from_secs(30),
            rollover_interval: Duration::from_secs(60),
            reset_weekly_habits: false,
            seed_sample_data: true,
        }
    }
}

impl Config {
    /// Reads overrides from the environment; unparseable values keep defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env_parse("PORT").unwrap_or(defaults.port),
            data_path: env::var("APP_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            persist_interval: env_parse::<u64>("PERSIST_INTERVAL_SECS")
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.persist_interval),
            rollover_interval: env_parse::<u64>("ROLLOVER_INTERVAL_SECS")
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.rollover_interval),
            reset_weekly_habits: env_flag("RESET_WEEKLY_HABITS")
                .unwrap_or(defaults.reset_weekly_habits),
            seed_sample_data: env_flag("SEED_SAMPLE_DATA").unwrap_or(defaults.seed_sample_data),
        }
    }

    pub fn rollover_policy(&self) -> RolloverPolicy {
        RolloverPolicy {
            reset_weekly: self.reset_weekly_habits,
        }
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.trim().parse().ok())
}

fn env_flag(key: &str) -> Option<bool> {
    let value = env::var(key).ok()?;
    parse_flag(&value)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
