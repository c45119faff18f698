//! # Utilities Library
//!
//! Shared helpers for image payload encoding, environment variables, time and
//! form validation.

pub mod b64;
pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use b64::{b64_encode, image_data_uri, sniff_image_mime};
pub use envs::{get_env, get_env_flag, get_env_or, get_env_parse};
pub use time::{listed_ago, now_utc, parse_utc};
pub use validation::{parse_price, validate_email, validate_not_empty, validate_phone};
