//! In-memory [`ApiService`] used by unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::dto::{CreateProductRequest, Product, ProductQuery, SellerProfile};
use tokio::sync::Notify;

use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;

#[derive(Debug, Default)]
struct MockState {
    products: Vec<Product>,
    favorites: Vec<Product>,
    calls: Vec<String>,
    fail_products: bool,
    fail_favorites: bool,
    created: usize,
    read_gate: Option<Arc<Notify>>,
}

/// Records every call and serves products from memory.
#[derive(Debug, Default)]
pub struct MockApi {
    state: Mutex<MockState>,
}

impl MockApi {
    pub fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            title: format!("Product {}", id),
            description: String::new(),
            price: 100.0,
            category: None,
            images: vec![format!("https://img.test/{}.jpg", id)],
            seller: SellerProfile::named("Seller"),
            device_id: None,
            is_upside_down: false,
            created_at: None,
        }
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        let api = Self::default();
        api.state.lock().products = products;
        api
    }

    pub fn set_favorites(&self, favorites: Vec<Product>) {
        self.state.lock().favorites = favorites;
    }

    pub fn fail_products(&self, fail: bool) {
        self.state.lock().fail_products = fail;
    }

    pub fn fail_favorites(&self, fail: bool) {
        self.state.lock().fail_favorites = fail;
    }

    /// Hold favorite list/check responses until the returned handle is
    /// notified. Answers are computed before waiting.
    pub fn hold_favorite_reads(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.state.lock().read_gate = Some(Arc::clone(&gate));
        gate
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().calls.clone()
    }

    fn record(&self, call: String) {
        self.state.lock().calls.push(call);
    }

    fn products_guard(&self) -> Result<()> {
        if self.state.lock().fail_products {
            Err(AppError::Api("Internal Server Error (500)".to_string()))
        } else {
            Ok(())
        }
    }

    async fn wait_for_read_gate(&self) {
        let gate = self.state.lock().read_gate.clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }

    fn favorites_guard(&self) -> Result<()> {
        if self.state.lock().fail_favorites {
            Err(AppError::Api("Service Unavailable (503)".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ApiService for MockApi {
    async fn list_products(&self, query: ProductQuery) -> Result<Vec<Product>> {
        self.record(format!(
            "list_products upside_down={} skip={} limit={}",
            query.upside_down,
            query.skip.unwrap_or(0),
            query.limit.unwrap_or(0)
        ));
        self.products_guard()?;
        let state = self.state.lock();
        let skip = query.skip.unwrap_or(0) as usize;
        let limit = query.limit.map(|l| l as usize).unwrap_or(usize::MAX);
        Ok(state
            .products
            .iter()
            .filter(|p| p.is_upside_down == query.upside_down)
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn get_product(&self, product_id: &str) -> Result<Product> {
        self.record(format!("get_product {}", product_id));
        self.products_guard()?;
        self.state
            .lock()
            .products
            .iter()
            .find(|p| p.id == product_id)
            .cloned()
            .ok_or_else(|| AppError::Api("Product not found (404)".to_string()))
    }

    async fn my_products(&self, device_id: &str) -> Result<Vec<Product>> {
        self.record(format!("my_products {}", device_id));
        self.products_guard()?;
        Ok(self
            .state
            .lock()
            .products
            .iter()
            .filter(|p| p.is_owned_by(device_id))
            .cloned()
            .collect())
    }

    async fn create_product(&self, request: CreateProductRequest) -> Result<Product> {
        self.record(format!("create_product {}", request.title));
        self.products_guard()?;
        let mut state = self.state.lock();
        state.created += 1;
        let product = Product {
            id: format!("new-{}", state.created),
            title: request.title,
            description: request.description,
            price: request.price,
            category: request.category,
            images: request.images,
            seller: request.seller,
            device_id: Some(request.device_id),
            is_upside_down: request.is_upside_down,
            created_at: None,
        };
        state.products.push(product.clone());
        Ok(product)
    }

    async fn delete_product(&self, product_id: &str, device_id: &str) -> Result<()> {
        self.record(format!("delete_product {} {}", product_id, device_id));
        self.products_guard()?;
        let mut state = self.state.lock();
        let Some(pos) = state.products.iter().position(|p| p.id == product_id) else {
            return Err(AppError::Api("Product not found (404)".to_string()));
        };
        if !state.products[pos].is_owned_by(device_id) {
            return Err(AppError::Api("Not authorized to delete this product (403)".to_string()));
        }
        state.products.remove(pos);
        Ok(())
    }

    async fn list_favorites(&self, device_id: &str) -> Result<Vec<Product>> {
        self.record(format!("list_favorites {}", device_id));
        self.favorites_guard()?;
        let favorites = self.state.lock().favorites.clone();
        self.wait_for_read_gate().await;
        Ok(favorites)
    }

    async fn add_favorite(&self, device_id: &str, product_id: &str) -> Result<()> {
        self.record(format!("add_favorite {} {}", device_id, product_id));
        self.favorites_guard()?;
        let mut state = self.state.lock();
        if !state.favorites.iter().any(|p| p.id == product_id) {
            let product = state
                .products
                .iter()
                .find(|p| p.id == product_id)
                .cloned()
                .unwrap_or_else(|| Self::product(product_id));
            state.favorites.push(product);
        }
        Ok(())
    }

    async fn remove_favorite(&self, device_id: &str, product_id: &str) -> Result<()> {
        self.record(format!("remove_favorite {} {}", device_id, product_id));
        self.favorites_guard()?;
        self.state.lock().favorites.retain(|p| p.id != product_id);
        Ok(())
    }

    async fn check_favorite(&self, device_id: &str, product_id: &str) -> Result<bool> {
        self.record(format!("check_favorite {} {}", device_id, product_id));
        self.favorites_guard()?;
        let favorited = self.state.lock().favorites.iter().any(|p| p.id == product_id);
        self.wait_for_read_gate().await;
        Ok(favorited)
    }
}
