//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file in the working directory is honoured if present.

use crate::error::{ConfigError, ConfigResult};
use crate::persistence::DEFAULT_SNAPSHOT_PATH;
use std::env;
use std::path::PathBuf;

/// Configuration for the contact book session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Binary snapshot used by `save`/`load` without a path (default: `data.bin`)
    pub snapshot_path: PathBuf,

    /// Load the snapshot at start-up (default: true)
    pub autoload: bool,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_FILE`: snapshot path (default: `data.bin`)
    /// - `CONTACT_BOOK_AUTOLOAD`: `true`/`false` (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let snapshot_path = match env::var("CONTACT_BOOK_FILE") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_SNAPSHOT_PATH),
        };

        let autoload = Self::parse_env_bool("CONTACT_BOOK_AUTOLOAD", true)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            snapshot_path,
            autoload,
            log_level,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            autoload: true,
            log_level: "warn".to_string(),
        }
    }
}
