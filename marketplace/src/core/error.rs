//! # Common Error Types
//!
//! Consolidated error handling for the marketplace client.
//!
//! ## Error Categories
//!
//! - **Api**: Backend communication errors (network, HTTP status, JSON parsing)
//! - **Validation**: Form input rejected before any network call
//! - **Permission**: Camera or gallery access denied by the user
//! - **Storage**: Local device-id / profile files unreadable or unwritable
//! - **Config**: Environment configuration missing or malformed
//!
//! ## Usage Pattern
//!
//! ```rust
//! use marketplace::core::error::AppError;
//!
//! fn validate_title(title: &str) -> Result<(), AppError> {
//!     if title.trim().is_empty() {
//!         return Err(AppError::Validation("Title cannot be empty".to_string()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_title("").is_err());
//! ```

use thiserror::Error;

/// Application-wide error type.
///
/// Each variant carries a human-readable message; `thiserror` supplies the
/// `Display` prefix.
///
/// ```rust
/// use marketplace::core::error::AppError;
///
/// let err = AppError::Validation("Price must be a number".to_string());
/// assert_eq!(err.to_string(), "Validation error: Price must be a number");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication error.
    #[error("API error: {0}")]
    Api(String),

    /// Input validation error. Never reaches the network.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Camera or photo library permission denied.
    #[error("Permission denied: {0}")]
    Permission(String),

    /// Local persistence error (device id, seller profile).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Title used when the error is surfaced as a blocking alert.
    pub fn alert_title(&self) -> &'static str {
        match self {
            AppError::Api(_) => "Network Error",
            AppError::Validation(_) => "Missing Information",
            AppError::Permission(_) => "Permission Required",
            AppError::Storage(_) => "Storage Error",
            AppError::Config(_) => "Configuration Error",
        }
    }

    /// Message without the category prefix, for alert bodies.
    pub fn message(&self) -> &str {
        match self {
            AppError::Api(msg)
            | AppError::Validation(msg)
            | AppError::Permission(msg)
            | AppError::Storage(msg)
            | AppError::Config(msg) => msg,
        }
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Api(format!("Failed to parse response: {}", err))
        } else {
            AppError::Api(format!("Network error: {}", err))
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(format!("Corrupt local data: {}", err))
    }
}

impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        match err {
            lib_utils::envs::Error::MissingEnv(name) => {
                AppError::Config(format!("{} must be set", name))
            }
            lib_utils::envs::Error::WrongFormat(name) => {
                AppError::Config(format!("{} has an invalid value", name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_parts() {
        let err = AppError::Permission("Camera access is needed to take photos".to_string());
        assert_eq!(err.alert_title(), "Permission Required");
        assert_eq!(err.message(), "Camera access is needed to take photos");
        assert_eq!(
            err.to_string(),
            "Permission denied: Camera access is needed to take photos"
        );
    }

    #[test]
    fn test_env_error_conversion() {
        let err: AppError = lib_utils::envs::Error::WrongFormat("MARKETPLACE_PAGE_SIZE").into();
        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(err.message(), "MARKETPLACE_PAGE_SIZE has an invalid value");
    }
}
