//! # Product Endpoints
//!
//! Catalog listing, product detail, the device's own listings, creation and
//! ownership-checked deletion.

use shared::dto::{CreateProductRequest, DeleteProductRequest, Product, ProductQuery};

use super::client::ApiClient;
use crate::core::error::Result;

/// `GET /products?upsideDown=&limit=&skip=`
pub async fn list_products(api: &ApiClient, query: ProductQuery) -> Result<Vec<Product>> {
    let mut params = vec![("upsideDown", query.upside_down.to_string())];
    if let Some(limit) = query.limit {
        params.push(("limit", limit.to_string()));
    }
    if let Some(skip) = query.skip {
        params.push(("skip", skip.to_string()));
    }

    let response = api
        .client
        .get(api.url("products"))
        .query(&params)
        .send()
        .await?;

    let products: Vec<Product> = ApiClient::json_or_error(response).await?;
    tracing::debug!(
        count = products.len(),
        upside_down = query.upside_down,
        skip = ?query.skip,
        "fetched catalog page"
    );
    Ok(products)
}

/// `GET /products/{id}`
pub async fn get_product(api: &ApiClient, product_id: &str) -> Result<Product> {
    let response = api
        .client
        .get(api.url(&format!("products/{}", product_id)))
        .send()
        .await?;

    ApiClient::json_or_error(response).await
}

/// `GET /products/my/{deviceId}`
pub async fn my_products(api: &ApiClient, device_id: &str) -> Result<Vec<Product>> {
    let response = api
        .client
        .get(api.url(&format!("products/my/{}", device_id)))
        .send()
        .await?;

    ApiClient::json_or_error(response).await
}

/// `POST /products`
pub async fn create_product(api: &ApiClient, request: &CreateProductRequest) -> Result<Product> {
    let response = api
        .client
        .post(api.url("products"))
        .json(request)
        .send()
        .await?;

    ApiClient::json_or_error(response).await
}

/// `DELETE /products/{id}` with `{deviceId}`; the backend rejects
/// deletions from other installations.
pub async fn delete_product(api: &ApiClient, product_id: &str, device_id: &str) -> Result<()> {
    let response = api
        .client
        .delete(api.url(&format!("products/{}", product_id)))
        .json(&DeleteProductRequest {
            device_id: device_id.to_string(),
        })
        .send()
        .await?;

    ApiClient::success_or_error(response).await
}
