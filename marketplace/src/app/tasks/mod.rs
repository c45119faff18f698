//! # Async Tasks
//!
//! Spawned network work. Each task reports back with exactly one
//! [`AppEvent`](crate::app::AppEvent).

pub mod favorites;
pub mod products;
