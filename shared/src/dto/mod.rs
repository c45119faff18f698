//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the marketplace REST API.
//!
//! ## Module Organization
//!
//! - [`product`] - Product records, create/delete payloads
//! - [`favorite`] - Favorite toggle and status payloads
//! - [`profile`] - Seller profile
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase via `#[serde(rename_all = "camelCase")]`
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Ids**: document ids deserialize from either `_id` or `id`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /favorites
//! Content-Type: application/json
//!
//! { "deviceId": "0d9e2c4a-...", "productId": "66f1c0ffee" }
//! ```
//!
//! ```text
//! GET /favorites/check/0d9e2c4a-.../66f1c0ffee
//!
//! HTTP/1.1 200 OK
//! { "isFavorite": true }
//! ```

pub mod favorite;
pub mod product;
pub mod profile;

pub use favorite::*;
pub use product::*;
pub use profile::*;

use serde::{Deserialize, Serialize};

/// Error body returned by the API on non-2xx responses.
///
/// The backend is inconsistent about the key it uses, so both are accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Best human-readable description carried by the body, if any.
    pub fn describe(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}
