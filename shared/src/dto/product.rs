//! # Product Data Transfer Objects
//!
//! Product records returned by the catalog endpoints and the payloads used to
//! create and delete listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::profile::SellerProfile;

/// A product listing as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Document id (`_id` on the wire, `id` accepted as well)
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Hosted image URLs (or data URIs for listings created offline)
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub seller: SellerProfile,
    /// Installation that created the listing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    /// Listing belongs to the hidden alternate catalog
    #[serde(default)]
    pub is_upside_down: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// First image, used as the card thumbnail.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Whether the listing was created by the given installation.
    pub fn is_owned_by(&self, device_id: &str) -> bool {
        self.device_id.as_deref() == Some(device_id)
    }
}

/// Query parameters for `GET /products`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub upside_down: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
}

impl ProductQuery {
    /// Query for one page of a catalog.
    pub fn page(upside_down: bool, limit: u32, skip: u32) -> Self {
        Self {
            upside_down,
            limit: Some(limit),
            skip: Some(skip),
        }
    }
}

/// Body of `POST /products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub title: String,
    pub description: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Base64 data URIs (`data:image/jpeg;base64,...`)
    pub images: Vec<String>,
    pub device_id: String,
    pub seller: SellerProfile,
    pub is_upside_down: bool,
}

/// Body of `DELETE /products/{id}`; the backend checks ownership against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProductRequest {
    pub device_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_accepts_mongo_id() {
        let json = r#"{
            "_id": "66f1",
            "title": "Lamp",
            "description": "Brass",
            "price": 450,
            "images": ["https://img/1.jpg", "https://img/2.jpg"],
            "seller": {"name": "Asha", "upiId": "asha@upi"},
            "deviceId": "dev-1",
            "isUpsideDown": true,
            "createdAt": "2024-05-01T10:00:00Z"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "66f1");
        assert_eq!(product.price, 450.0);
        assert!(product.is_upside_down);
        assert_eq!(product.cover_image(), Some("https://img/1.jpg"));
        assert_eq!(product.seller.upi_id.as_deref(), Some("asha@upi"));
        assert!(product.is_owned_by("dev-1"));
        assert!(!product.is_owned_by("dev-2"));
        assert!(product.created_at.is_some());
    }

    #[test]
    fn test_product_accepts_plain_id_and_defaults() {
        let product: Product =
            serde_json::from_str(r#"{"id":"p9","title":"Chair","price":10.5}"#).unwrap();
        assert_eq!(product.id, "p9");
        assert!(product.images.is_empty());
        assert_eq!(product.cover_image(), None);
        assert_eq!(product.seller.name, "");
        assert!(!product.is_upside_down);
    }

    #[test]
    fn test_create_request_uses_camel_case() {
        let request = CreateProductRequest {
            title: "Lamp".to_string(),
            description: String::new(),
            price: 12.0,
            category: None,
            images: vec!["data:image/png;base64,AAAA".to_string()],
            device_id: "dev-1".to_string(),
            seller: SellerProfile::named("Asha"),
            is_upside_down: true,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["deviceId"], "dev-1");
        assert_eq!(value["isUpsideDown"], true);
        assert!(value.get("category").is_none());
    }

    #[test]
    fn test_product_query_skips_unset_paging() {
        let query = ProductQuery {
            upside_down: false,
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&query).unwrap(), r#"{"upsideDown":false}"#);

        let page = ProductQuery::page(true, 20, 40);
        let value = serde_json::to_value(page).unwrap();
        assert_eq!(value["limit"], 20);
        assert_eq!(value["skip"], 40);
    }
}
