//! # Utilities
//!
//! Form validation for the sell and profile screens.

pub mod validation;

pub use validation::ValidationResult;
