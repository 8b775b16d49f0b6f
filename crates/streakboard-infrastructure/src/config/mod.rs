use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

use streakboard_domain::clock::{parse_timezone, DEFAULT_TIMEZONE};
use streakboard_domain::shared::DomainError;

const ENV_DB_PATH: &str = "STREAKBOARD_DB_PATH";
const ENV_ADDRESS: &str = "STREAKBOARD_ADDRESS";
const ENV_TIMEZONE: &str = "STREAKBOARD_TIMEZONE";
const ENV_LOG_DIR: &str = "STREAKBOARD_LOG_DIR";
const ENV_LOG_LEVEL: &str = "STREAKBOARD_LOG_LEVEL";
const ENV_CHALLENGE_START: &str = "STREAKBOARD_CHALLENGE_START";

/// Log level configuration
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    /// Unknown names fall back to `Info`
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "error" => LogLevel::Error,
            "warn" | "warning" => LogLevel::Warn,
            "info" => LogLevel::Info,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Process configuration, assembled from defaults and `STREAKBOARD_*` variables
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite database file
    pub db_path: PathBuf,

    /// HTTP listen address (default: 127.0.0.1:3000)
    pub address: SocketAddr,

    /// Reference civil timezone for all day bucketing
    pub timezone: Tz,

    pub log_dir: PathBuf,

    pub log_level: LogLevel,

    /// First day of the challenge, used for the "day N" counter
    pub challenge_start: NaiveDate,
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = default_data_dir();
        Self {
            db_path: data_dir.join(db_filename()),
            address: SocketAddr::from(([127, 0, 0, 1], 3000)),
            timezone: chrono_tz::America::Los_Angeles,
            log_dir: data_dir.join("logs"),
            log_level: LogLevel::default(),
            challenge_start: NaiveDate::from_ymd_opt(2025, 5, 14).unwrap_or_default(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from the process environment
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_DB_PATH) {
            config = config.with_db_path(PathBuf::from(path));
        }

        if let Some(address) = lookup(ENV_ADDRESS) {
            let address = address.trim().parse::<SocketAddr>().map_err(|e| {
                DomainError::Configuration(format!("Invalid {}: {} ({})", ENV_ADDRESS, address, e))
            })?;
            config = config.with_address(address);
        }

        let timezone_name = lookup(ENV_TIMEZONE).unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());
        config = config.with_timezone(parse_timezone(timezone_name.trim())?);

        if let Some(dir) = lookup(ENV_LOG_DIR) {
            config = config.with_log_dir(PathBuf::from(dir));
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config = config.with_log_level(LogLevel::parse_or_default(&level));
        }

        if let Some(start) = lookup(ENV_CHALLENGE_START) {
            let start = NaiveDate::parse_from_str(start.trim(), "%Y-%m-%d").map_err(|e| {
                DomainError::Configuration(format!(
                    "Invalid {}: {} ({})",
                    ENV_CHALLENGE_START, start, e
                ))
            })?;
            config = config.with_challenge_start(start);
        }

        Ok(config)
    }

    pub fn with_db_path(mut self, path: PathBuf) -> Self {
        self.db_path = path;
        self
    }

    pub fn with_address(mut self, address: SocketAddr) -> Self {
        self.address = address;
        self
    }

    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn with_log_dir(mut self, dir: PathBuf) -> Self {
        self.log_dir = dir;
        self
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    pub fn with_challenge_start(mut self, start: NaiveDate) -> Self {
        self.challenge_start = start;
        self
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("streakboard")
}

fn db_filename() -> &'static str {
    if cfg!(debug_assertions) {
        "streakboard-dev.db"
    } else {
        "streakboard.db"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.timezone, chrono_tz::America::Los_Angeles);
        assert_eq!(config.address, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(
            config.challenge_start,
            NaiveDate::from_ymd_opt(2025, 5, 14).unwrap()
        );
        assert!(config.db_path.ends_with(db_filename()));
    }

    #[test]
    fn test_overrides_from_environment() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_DB_PATH, "/tmp/board.db"),
            (ENV_ADDRESS, "0.0.0.0:8080"),
            (ENV_TIMEZONE, "America/New_York"),
            (ENV_LOG_DIR, "/tmp/board-logs"),
            (ENV_LOG_LEVEL, "DEBUG"),
            (ENV_CHALLENGE_START, "2025-01-01"),
        ]))
        .unwrap();

        assert_eq!(config.db_path, PathBuf::from("/tmp/board.db"));
        assert_eq!(config.address, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.timezone, chrono_tz::America::New_York);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/board-logs"));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(
            config.challenge_start,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[(ENV_TIMEZONE, "Not/AZone")]));
        assert!(matches!(result, Err(DomainError::Configuration(_))));

        let result = AppConfig::from_lookup(lookup_from(&[(ENV_ADDRESS, "localhost")]));
        assert!(matches!(result, Err(DomainError::Configuration(_))));

        let result = AppConfig::from_lookup(lookup_from(&[(ENV_CHALLENGE_START, "05/14/2025")]));
        assert!(matches!(result, Err(DomainError::Configuration(_))));
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_info() {
        assert_eq!(LogLevel::parse_or_default("loud"), LogLevel::Info);
        assert_eq!(LogLevel::parse_or_default("warning"), LogLevel::Warn);
        assert!(LogLevel::Trace > LogLevel::Debug);
    }
}
