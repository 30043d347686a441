//! Configuration types and CLI options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DB_PATH, PRIMARY_LOOKUP_URL, SECONDARY_LOOKUP_URL};

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Application configuration.
///
/// Doubles as the CLI surface (`clap` derive) and can be constructed
/// programmatically via `Default` for library and test use.
///
/// # Examples
///
/// ```no_run
/// use visitor_status::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     db_path: PathBuf::from("visitors.db"),
///     port: 8080,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "visitor_status",
    about = "Records site visitors, enriches them with location and device data, and serves an operator dashboard API."
)]
pub struct Config {
    /// Port to serve the tracking endpoint and operator API on
    #[arg(long, default_value_t = 8080)]
    pub port: u16,

    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    pub bind: String,

    /// Database path (SQLite file)
    #[arg(long, default_value = DB_PATH)]
    pub db_path: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout for outbound lookup calls, in seconds
    #[arg(long, default_value_t = crate::config::constants::LOOKUP_TIMEOUT_SECS)]
    pub lookup_timeout_seconds: u64,

    /// Primary geolocation lookup endpoint
    #[arg(long, default_value = PRIMARY_LOOKUP_URL)]
    pub primary_lookup_url: String,

    /// Secondary address-only lookup endpoint
    #[arg(long, default_value = SECONDARY_LOOKUP_URL)]
    pub secondary_lookup_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind: "127.0.0.1".to_string(),
            db_path: PathBuf::from(DB_PATH),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            lookup_timeout_seconds: crate::config::constants::LOOKUP_TIMEOUT_SECS,
            primary_lookup_url: PRIMARY_LOOKUP_URL.to_string(),
            secondary_lookup_url: SECONDARY_LOOKUP_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_default_config_uses_public_endpoints() {
        let config = Config::default();
        assert_eq!(config.primary_lookup_url, PRIMARY_LOOKUP_URL);
        assert_eq!(config.secondary_lookup_url, SECONDARY_LOOKUP_URL);
        assert_eq!(config.port, 8080);
    }
}
