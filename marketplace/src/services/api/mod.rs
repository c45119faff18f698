//! # Marketplace API Client Module
//!
//! HTTP client for the products and favorites REST API.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs        - Module exports and documentation
//! ├── client.rs     - ApiClient struct, response handling, ApiService impl
//! ├── products.rs   - Catalog, detail, my listings, create, delete
//! └── favorites.rs  - Favorite list, add, remove, check
//! ```

pub mod client;
pub mod favorites;
pub mod products;

pub use client::ApiClient;
