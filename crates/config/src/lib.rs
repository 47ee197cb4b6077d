//! # Config - bondvalue runtime settings
//!
//! All settings come from environment variables with built-in defaults:
//!
//! ```text
//! BONDVALUE_DATA_FILE  Treasury redemption value file  (default: "./data.txt")
//! BONDVALUE_LOG        tracing filter directive        (default: "warn")
//! ```
//!
//! Command-line flags override the environment; see [`Config::with_data_file`].

use std::path::PathBuf;

pub const DATA_FILE_ENV: &str = "BONDVALUE_DATA_FILE";
pub const LOG_ENV: &str = "BONDVALUE_LOG";

pub const DEFAULT_DATA_FILE: &str = "./data.txt";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the fixed-width redemption value file.
    pub data_file: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive for log output.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Unset or empty values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_or = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            data_file: PathBuf::from(env_or(DATA_FILE_ENV, DEFAULT_DATA_FILE)),
            log_filter: env_or(LOG_ENV, DEFAULT_LOG_FILTER),
        }
    }

    /// Replaces the data file path when `path` is given.
    pub fn with_data_file(mut self, path: Option<PathBuf>) -> Self {
        if let Some(p) = path {
            self.data_file = p;
        }
        self
    }
}
