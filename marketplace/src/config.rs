//! # Application Configuration
//!
//! Configuration loaded from environment variables (a `.env` file is read by
//! the binary via `dotenvy` before this runs). Every value has a default, so
//! an empty environment yields a working configuration against a local
//! backend. Values that are set but malformed fail fast.
//!
//! | Variable                                | Default                     |
//! |-----------------------------------------|-----------------------------|
//! | `MARKETPLACE_API_URL`                   | `http://127.0.0.1:3001/api` |
//! | `MARKETPLACE_HTTP_TIMEOUT_SECS`         | `10`                        |
//! | `MARKETPLACE_DATA_DIR`                  | `data`                      |
//! | `MARKETPLACE_PAGE_SIZE`                 | `20`                        |
//! | `MARKETPLACE_LOOP_MULTIPLIER`           | `10`                        |
//! | `MARKETPLACE_DOUBLE_TAP_MS`             | `300`                       |
//! | `MARKETPLACE_OVERSCROLL_ATTEMPTS`       | `3`                         |
//! | `MARKETPLACE_OVERSCROLL_WINDOW_MS`      | `3000`                      |

use std::path::PathBuf;
use std::time::Duration;

use lib_utils::envs::{get_env_or, get_env_parse};

use crate::core::error::{AppError, Result};
use crate::gestures::{OverscrollConfig, TapConfig};

const DEFAULT_API_URL: &str = "http://127.0.0.1:3001/api";

/// Default number of times the reels feed repeats the fetched products.
pub const DEFAULT_LOOP_MULTIPLIER: usize = 10;

/// Client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the REST API, without trailing slash
    pub api_base_url: String,
    /// Per-request timeout for the HTTP client
    pub http_timeout: Duration,
    /// Directory holding the device id and seller profile
    pub data_dir: PathBuf,
    /// Products requested per catalog page
    pub page_size: u32,
    /// Times the reels feed repeats the fetched products
    pub loop_multiplier: usize,
    pub tap: TapConfig,
    pub overscroll: OverscrollConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            http_timeout: Duration::from_secs(10),
            data_dir: PathBuf::from("data"),
            page_size: 20,
            loop_multiplier: DEFAULT_LOOP_MULTIPLIER,
            tap: TapConfig::default(),
            overscroll: OverscrollConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let api_base_url = match get_env_parse::<String>("MARKETPLACE_API_URL") {
            Ok(url) => url,
            Err(lib_utils::envs::Error::MissingEnv(_)) => defaults.api_base_url,
            Err(e) => return Err(e.into()),
        };

        let tap = TapConfig {
            double_tap_delay: Duration::from_millis(get_env_or(
                "MARKETPLACE_DOUBLE_TAP_MS",
                defaults.tap.double_tap_delay.as_millis() as u64,
            )?),
        };

        let overscroll = OverscrollConfig {
            required_attempts: get_env_or(
                "MARKETPLACE_OVERSCROLL_ATTEMPTS",
                defaults.overscroll.required_attempts,
            )?,
            window: Duration::from_millis(get_env_or(
                "MARKETPLACE_OVERSCROLL_WINDOW_MS",
                defaults.overscroll.window.as_millis() as u64,
            )?),
            ..defaults.overscroll
        };

        let config = Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            http_timeout: Duration::from_secs(get_env_or(
                "MARKETPLACE_HTTP_TIMEOUT_SECS",
                defaults.http_timeout.as_secs(),
            )?),
            data_dir: get_env_or("MARKETPLACE_DATA_DIR", defaults.data_dir)?,
            page_size: get_env_or("MARKETPLACE_PAGE_SIZE", defaults.page_size)?,
            loop_multiplier: get_env_or("MARKETPLACE_LOOP_MULTIPLIER", defaults.loop_multiplier)?,
            tap,
            overscroll,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(AppError::Config(
                "MARKETPLACE_API_URL must start with http:// or https://".to_string(),
            ));
        }

        if self.http_timeout.is_zero() {
            return Err(AppError::Config(
                "MARKETPLACE_HTTP_TIMEOUT_SECS must be at least 1".to_string(),
            ));
        }

        if self.page_size == 0 || self.page_size > 100 {
            return Err(AppError::Config(
                "MARKETPLACE_PAGE_SIZE must be between 1 and 100".to_string(),
            ));
        }

        if self.loop_multiplier == 0 {
            return Err(AppError::Config(
                "MARKETPLACE_LOOP_MULTIPLIER must be at least 1".to_string(),
            ));
        }

        if self.overscroll.required_attempts == 0 {
            return Err(AppError::Config(
                "MARKETPLACE_OVERSCROLL_ATTEMPTS must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
