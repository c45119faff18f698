//! Logging configuration from environment variables

use std::path::PathBuf;

use lib_utils::{get_env_flag, get_env_or};

pub const DEFAULT_LOG_FILTER: &str = "marketplace=info,warn";
pub const LOG_FILE_NAME: &str = "marketplace.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset or invalid
    pub log_level: String,
    /// Directory for the rolling log file
    pub log_dir: PathBuf,
    /// Also write to a daily rotated file
    pub file_logging: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_FILTER.to_string(),
            log_dir: PathBuf::from("logs"),
            file_logging: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables.
    ///
    /// Malformed values fall back to defaults; logging must come up even
    /// when the rest of the configuration is broken.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_level: get_env_or("RUST_LOG", defaults.log_level.clone())
                .unwrap_or(defaults.log_level),
            log_dir: get_env_or("MARKETPLACE_LOG_DIR", defaults.log_dir.clone())
                .unwrap_or(defaults.log_dir),
            file_logging: get_env_flag("MARKETPLACE_LOG_FILE"),
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
