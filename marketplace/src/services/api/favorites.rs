//! # Favorite Endpoints
//!
//! Favorites are keyed by the device identifier. Callers must pass plain
//! product ids, never feed row keys.

use shared::dto::{FavoriteRequest, FavoriteStatusResponse, Product};

use super::client::ApiClient;
use crate::core::error::Result;

/// `GET /favorites/{deviceId}`
pub async fn list_favorites(api: &ApiClient, device_id: &str) -> Result<Vec<Product>> {
    let response = api
        .client
        .get(api.url(&format!("favorites/{}", device_id)))
        .send()
        .await?;

    ApiClient::json_or_error(response).await
}

/// `POST /favorites`
pub async fn add_favorite(api: &ApiClient, device_id: &str, product_id: &str) -> Result<()> {
    let response = api
        .client
        .post(api.url("favorites"))
        .json(&FavoriteRequest {
            device_id: device_id.to_string(),
            product_id: product_id.to_string(),
        })
        .send()
        .await?;

    ApiClient::success_or_error(response).await
}

/// `DELETE /favorites/{deviceId}/{productId}`
pub async fn remove_favorite(api: &ApiClient, device_id: &str, product_id: &str) -> Result<()> {
    let response = api
        .client
        .delete(api.url(&format!("favorites/{}/{}", device_id, product_id)))
        .send()
        .await?;

    ApiClient::success_or_error(response).await
}

/// `GET /favorites/check/{deviceId}/{productId}`
pub async fn check_favorite(api: &ApiClient, device_id: &str, product_id: &str) -> Result<bool> {
    let response = api
        .client
        .get(api.url(&format!("favorites/check/{}/{}", device_id, product_id)))
        .send()
        .await?;

    let status: FavoriteStatusResponse = ApiClient::json_or_error(response).await?;
    Ok(status.is_favorite)
}
