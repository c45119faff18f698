//! # Services
//!
//! Backend API access, the shared favorites store and on-device storage.

pub mod api;
pub mod favorites;
pub mod storage;

#[cfg(test)]
pub(crate) mod testing;

pub use api::ApiClient;
pub use favorites::{FavoriteStore, PendingToggle, ToggleResolution};
pub use storage::{DeviceIdentity, LocalStore};
