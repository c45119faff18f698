//! # Application Events
//!
//! Results of background tasks, delivered to the UI thread through the event
//! channel. Errors are carried as strings so events stay `Clone`.

use shared::dto::Product;

use crate::app::state::CatalogMode;
use crate::services::favorites::PendingToggle;

/// Async task results sent to the UI thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// One page of the home catalog
    CatalogPageLoaded {
        mode: CatalogMode,
        skip: u32,
        result: Result<Vec<Product>, String>,
    },
    /// Products for the reels feed
    ReelsLoaded {
        mode: CatalogMode,
        result: Result<Vec<Product>, String>,
    },
    /// Product detail
    ProductLoaded {
        product_id: String,
        result: Result<Product, String>,
    },
    /// Listings created by this device
    MyListingsLoaded(Result<Vec<Product>, String>),
    /// Favorites list; the store has already been updated
    FavoritesLoaded(Result<Vec<Product>, String>),
    /// Single favorite check; the store has already been updated
    FavoriteChecked {
        product_id: String,
        result: Result<bool, String>,
    },
    /// Add/remove favorite request finished
    FavoriteToggled {
        pending: PendingToggle,
        result: Result<(), String>,
    },
    /// Listing submitted
    ListingCreated(Result<Product, String>),
    /// Listing deletion finished
    ListingDeleted {
        product_id: String,
        result: Result<(), String>,
    },
    /// Loading state
    Loading(String),
}

impl AppEvent {
    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            AppEvent::CatalogPageLoaded { .. } => "CatalogPageLoaded",
            AppEvent::ReelsLoaded { .. } => "ReelsLoaded",
            AppEvent::ProductLoaded { .. } => "ProductLoaded",
            AppEvent::MyListingsLoaded(_) => "MyListingsLoaded",
            AppEvent::FavoritesLoaded(_) => "FavoritesLoaded",
            AppEvent::FavoriteChecked { .. } => "FavoriteChecked",
            AppEvent::FavoriteToggled { .. } => "FavoriteToggled",
            AppEvent::ListingCreated(_) => "ListingCreated",
            AppEvent::ListingDeleted { .. } => "ListingDeleted",
            AppEvent::Loading(_) => "Loading",
        }
    }
}
