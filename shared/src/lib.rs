//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the marketplace client and the
//! products/favorites REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::product`]**: Product records, listing creation and deletion
//!   - **[`dto::favorite`]**: Favorite add/remove/check payloads
//!   - **[`dto::profile`]**: Seller profile attached to every listing
//! - **[`utils`]**: Shared display helpers
//!   - **[`utils::format_price`]**: Format a price for display
//!   - **[`utils::truncate_text`]**: Truncate titles with ellipsis
//!
//! ## Wire Format
//!
//! The backend is a document store fronted by a JSON API, so field names are
//! **camelCase** on the wire (`deviceId`, `isUpsideDown`) and product ids
//! arrive as `_id`:
//!
//! ```text
//! {
//!   "_id": "66f1c0ffee",
//!   "title": "Vintage lamp",
//!   "price": 450,
//!   "images": ["https://img.example/lamp.jpg"],
//!   "seller": { "name": "Asha" },
//!   "deviceId": "0d9e...",
//!   "isUpsideDown": false
//! }
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::product::Product;
//!
//! let json = r#"{"_id":"a1","title":"Lamp","price":12.5,"images":[],"seller":{"name":"Asha"}}"#;
//! let product: Product = serde_json::from_str(json).unwrap();
//! assert_eq!(product.id, "a1");
//! assert!(!product.is_upside_down);
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library where all exports are public API
pub use dto::*;
pub use utils::*;
