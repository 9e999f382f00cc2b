//! Configuration management for the contact registry.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file is honored if present; it is loaded with
//! `dotenvy`, which never writes to stdout.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Log levels accepted by `LOG_LEVEL`.
const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Environment label that enables environment-gated checks.
pub const TEST_ENVIRONMENT: &str = "TEST";

/// Configuration for the contact registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// Deployment environment label (default: "DEV")
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `ENV`: Environment label (default: "DEV")
    pub fn from_env() -> ConfigResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        Self::from_vars()
    }

    /// Read configuration from the process environment without touching `.env`.
    pub fn from_vars() -> ConfigResult<Self> {
        let defaults = Self::default();

        let log_level = match env::var("LOG_LEVEL") {
            Ok(val) => Self::parse_log_level(&val)?,
            Err(_) => defaults.log_level,
        };

        let environment = match env::var("ENV") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ENV".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => val.trim().to_string(),
            Err(_) => defaults.environment,
        };

        Ok(Config {
            log_level,
            environment,
        })
    }

    /// True when running under the `TEST` environment label.
    pub fn is_test_environment(&self) -> bool {
        self.environment == TEST_ENVIRONMENT
    }

    fn parse_log_level(val: &str) -> ConfigResult<String> {
        let level = val.trim().to_ascii_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            Ok(level)
        } else {
            Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join("/"), val),
            })
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            environment: "DEV".to_string(),
        }
    }
}
