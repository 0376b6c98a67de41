//! Calculation configuration.
//!
//! Loaded from a TOML file or from `FXFLEX_*` environment variables:
//!
//! ```toml
//! log_level = "debug"
//!
//! [parallel]
//! enabled = true
//! parallel_threshold = 8
//! batch_size = 64
//! ```

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::parallel::ParallelConfig;

/// Environment variable enabling or disabling the rayon pool.
pub const ENV_PARALLEL_ENABLED: &str = "FXFLEX_PARALLEL_ENABLED";
/// Environment variable for the parallel threshold.
pub const ENV_PARALLEL_THRESHOLD: &str = "FXFLEX_PARALLEL_THRESHOLD";
/// Environment variable for the batch size.
pub const ENV_BATCH_SIZE: &str = "FXFLEX_BATCH_SIZE";
/// Environment variable for the log level.
pub const ENV_LOG_LEVEL: &str = "FXFLEX_LOG_LEVEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unrecognised log level name
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Batch size of zero
    #[error("Invalid batch size: {0}. Must be greater than 0")]
    InvalidBatchSize(usize),

    /// Unparseable environment variable
    #[error("Environment variable error: {0}")]
    EnvError(String),

    /// Unreadable or malformed config file
    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels for the tracing filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Per-window-date forward rates
    Trace,
    /// Per-call valuation detail
    Debug,
    /// Per-batch summaries
    #[default]
    Info,
    /// Failed or unsupported measures
    Warn,
    /// Errors only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        LogLevel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Settings for scenario calculations.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CalculationConfig {
    /// Scenario fan-out
    pub parallel: ParallelConfig,
    /// Log level
    pub log_level: LogLevel,
}

impl CalculationConfig {
    /// Create a new CalculationConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    /// `ConfigError::FileError` for malformed TOML, or any validation error.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CalculationConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// `ConfigError::FileError` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    /// `ConfigError::EnvError` for unparseable values, or any validation error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies `FXFLEX_*` overrides obtained through `lookup` and validates.
    ///
    /// # Errors
    /// `ConfigError::EnvError` for unparseable values, or any validation error.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(enabled) = lookup(ENV_PARALLEL_ENABLED) {
            self.parallel.enabled = parse_env(ENV_PARALLEL_ENABLED, &enabled.to_lowercase())?;
        }
        if let Some(threshold) = lookup(ENV_PARALLEL_THRESHOLD) {
            self.parallel.parallel_threshold = parse_env(ENV_PARALLEL_THRESHOLD, &threshold)?;
        }
        if let Some(batch_size) = lookup(ENV_BATCH_SIZE) {
            self.parallel.batch_size = parse_env(ENV_BATCH_SIZE, &batch_size)?;
        }
        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&log_level)?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// `ConfigError::InvalidBatchSize` if the batch size is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parallel.batch_size == 0 {
            return Err(ConfigError::InvalidBatchSize(self.parallel.batch_size));
        }
        Ok(())
    }
}

fn parse_env<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{}={} is not valid", key, value)))
}
