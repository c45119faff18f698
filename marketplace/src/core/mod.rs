//! # Core Abstractions
//!
//! Foundational types used throughout the marketplace client:
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection (`ApiService`)
//! - **[`clock`]**: Injected time source for the gesture state machines
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use marketplace::core::service::ApiService;
//!
//! // In production: the HTTP client
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(&config)?);
//!
//! // In tests: an in-memory mock
//! let api: Arc<dyn ApiService> = Arc::new(MockApi::default());
//! ```

pub mod clock;
pub mod error;
pub mod service;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{AppError, Result};
pub use service::ApiService;
