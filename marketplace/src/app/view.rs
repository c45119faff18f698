//! # View Models
//!
//! Display-ready projections of products for the renderer.

use chrono::{DateTime, Utc};
use lib_utils::listed_ago;
use shared::dto::Product;
use shared::utils::{format_price, truncate_text};

use crate::services::favorites::FavoriteStore;

/// Characters of the title shown on a grid card.
pub const CARD_TITLE_CHARS: usize = 28;

/// A product as shown on a grid card or reel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: String,
    pub title: String,
    pub price: String,
    pub thumbnail: Option<String>,
    pub seller: String,
    /// "3h ago" style age, when the backend sent a timestamp
    pub listed: Option<String>,
    pub favorited: bool,
}

impl ProductCard {
    pub fn from_product(product: &Product, favorites: &FavoriteStore, now: DateTime<Utc>) -> Self {
        Self {
            id: product.id.clone(),
            title: truncate_text(&product.title, CARD_TITLE_CHARS),
            price: format_price(product.price),
            thumbnail: product.cover_image().map(str::to_string),
            seller: product.seller.name.clone(),
            listed: product.created_at.map(|created| listed_ago(created, now)),
            favorited: favorites.is_favorite(&product.id),
        }
    }
}
