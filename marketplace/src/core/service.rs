//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::dto::{CreateProductRequest, Product, ProductQuery};

use super::error::Result;

/// Trait for marketplace API operations.
///
/// [`ApiClient`](crate::services::api::ApiClient) is the production
/// implementation; tests substitute in-memory mocks.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// List one page of a catalog (`GET /products`)
    async fn list_products(&self, query: ProductQuery) -> Result<Vec<Product>>;

    /// Fetch a single product (`GET /products/{id}`)
    async fn get_product(&self, product_id: &str) -> Result<Product>;

    /// Products created by this installation (`GET /products/my/{deviceId}`)
    async fn my_products(&self, device_id: &str) -> Result<Vec<Product>>;

    /// Create a listing (`POST /products`)
    async fn create_product(&self, request: CreateProductRequest) -> Result<Product>;

    /// Delete a listing owned by this installation (`DELETE /products/{id}`)
    async fn delete_product(&self, product_id: &str, device_id: &str) -> Result<()>;

    /// Favorited products for this installation (`GET /favorites/{deviceId}`)
    async fn list_favorites(&self, device_id: &str) -> Result<Vec<Product>>;

    /// Add a favorite (`POST /favorites`)
    async fn add_favorite(&self, device_id: &str, product_id: &str) -> Result<()>;

    /// Remove a favorite (`DELETE /favorites/{deviceId}/{productId}`)
    async fn remove_favorite(&self, device_id: &str, product_id: &str) -> Result<()>;

    /// Whether a product is favorited (`GET /favorites/check/{deviceId}/{productId}`)
    async fn check_favorite(&self, device_id: &str, product_id: &str) -> Result<bool>;
}
