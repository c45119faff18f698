//! # API Client
//!
//! Main HTTP client for backend API communication.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::dto::{CreateProductRequest, ErrorResponse, Product, ProductQuery};

use crate::config::AppConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;

/// HTTP client for the marketplace API.
///
/// Holds a pooled `reqwest::Client`; cloning is cheap and shares the pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client using the configured base URL and request timeout.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Decode a JSON body, or turn a non-2xx response into [`AppError::Api`].
    pub(crate) async fn json_or_error<T: DeserializeOwned>(response: Response) -> Result<T> {
        if response.status().is_success() {
            Ok(response.json::<T>().await?)
        } else {
            Err(Self::error_from(response).await)
        }
    }

    /// Accept any 2xx response, discarding the body.
    pub(crate) async fn success_or_error(response: Response) -> Result<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(response).await)
        }
    }

    async fn error_from(response: Response) -> AppError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|e| e.describe().map(str::to_string))
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    status.canonical_reason().unwrap_or("Unknown error").to_string()
                } else {
                    body.trim().to_string()
                }
            });

        AppError::Api(format!("{} ({})", detail, status.as_u16()))
    }
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn list_products(&self, query: ProductQuery) -> Result<Vec<Product>> {
        crate::services::api::products::list_products(self, query).await
    }

    async fn get_product(&self, product_id: &str) -> Result<Product> {
        crate::services::api::products::get_product(self, product_id).await
    }

    async fn my_products(&self, device_id: &str) -> Result<Vec<Product>> {
        crate::services::api::products::my_products(self, device_id).await
    }

    async fn create_product(&self, request: CreateProductRequest) -> Result<Product> {
        crate::services::api::products::create_product(self, &request).await
    }

    async fn delete_product(&self, product_id: &str, device_id: &str) -> Result<()> {
        crate::services::api::products::delete_product(self, product_id, device_id).await
    }

    async fn list_favorites(&self, device_id: &str) -> Result<Vec<Product>> {
        crate::services::api::favorites::list_favorites(self, device_id).await
    }

    async fn add_favorite(&self, device_id: &str, product_id: &str) -> Result<()> {
        crate::services::api::favorites::add_favorite(self, device_id, product_id).await
    }

    async fn remove_favorite(&self, device_id: &str, product_id: &str) -> Result<()> {
        crate::services::api::favorites::remove_favorite(self, device_id, product_id).await
    }

    async fn check_favorite(&self, device_id: &str, product_id: &str) -> Result<bool> {
        crate::services::api::favorites::check_favorite(self, device_id, product_id).await
    }
}
