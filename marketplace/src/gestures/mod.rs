//! # Gesture Recognition
//!
//! Stateful recognizers that turn raw pointer and scroll events into the
//! semantic actions the app reacts to:
//!
//! - **[`tap`]**: single tap (navigate) vs double tap (toggle favorite)
//! - **[`overscroll`]**: repeated overscroll at the bottom of a list unlocks
//!   the hidden catalog
//!
//! Neither recognizer reads the clock itself. Callers pass `now`, which keeps
//! both machines deterministic under test.

pub mod overscroll;
pub mod tap;

pub use overscroll::{OverscrollConfig, OverscrollGestureDetector, OverscrollOutcome, ScrollMetrics};
pub use tap::{TapClassifier, TapConfig, TapGesture, DOUBLE_TAP_DELAY};
