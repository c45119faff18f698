//! # Favorite Data Transfer Objects
//!
//! Payloads for the favorites endpoints. Favorites are keyed by the anonymous
//! per-installation device identifier.

use serde::{Deserialize, Serialize};

/// Body of `POST /favorites`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRequest {
    pub device_id: String,
    pub product_id: String,
}

/// Response of `GET /favorites/check/{deviceId}/{productId}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteStatusResponse {
    pub is_favorite: bool,
}
