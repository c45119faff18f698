//! # Event Handlers
//!
//! User action handlers organized by domain.

pub mod favorites;
pub mod listing;
pub mod navigation;
pub mod profile;
pub mod reels;
