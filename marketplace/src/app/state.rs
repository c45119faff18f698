//! # Application State Types
//!
//! Everything a renderer reads: current screen, catalog mode, per-screen data,
//! form drafts, the blocking alert and the gesture state machines.

use shared::dto::{Product, SellerProfile};

use crate::config::AppConfig;
use crate::core::error::AppError;
use crate::feed::FeedState;
use crate::gestures::{OverscrollGestureDetector, TapClassifier};

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Product grid for the current catalog mode
    Home,
    /// Vertical swipe-through feed
    Reels,
    Favorites,
    /// Listing creation form
    Sell,
    Profile,
    MyListings,
    ProductDetail,
}

impl Screen {
    /// Screens reachable from the tab bar, in order
    pub fn tabs() -> &'static [Screen] {
        &[
            Screen::Home,
            Screen::Reels,
            Screen::Sell,
            Screen::Favorites,
            Screen::Profile,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Reels => "Reels",
            Screen::Favorites => "Favorites",
            Screen::Sell => "Sell",
            Screen::Profile => "Profile",
            Screen::MyListings => "My Listings",
            Screen::ProductDetail => "Product",
        }
    }
}

/// Which catalog the product screens show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogMode {
    #[default]
    Standard,
    /// Hidden catalog unlocked by the overscroll gesture
    UpsideDown,
}

impl CatalogMode {
    pub fn is_upside_down(&self) -> bool {
        matches!(self, CatalogMode::UpsideDown)
    }

    pub fn title(&self) -> &'static str {
        match self {
            CatalogMode::Standard => "Marketplace",
            CatalogMode::UpsideDown => "Upside Down",
        }
    }
}

/// Paged product grid.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub products: Vec<Product>,
    /// A page request is in flight
    pub loading: bool,
    /// The in-flight request is a pull-to-refresh
    pub refreshing: bool,
    /// Last page came back full
    pub has_more: bool,
    /// At least one page has arrived (possibly empty)
    pub loaded: bool,
}

impl CatalogState {
    /// `skip` for the next page.
    pub fn next_skip(&self) -> u32 {
        self.products.len() as u32
    }
}

/// Blocking alert shown for failed user actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new("Success", message)
    }
}

impl From<&AppError> for Alert {
    fn from(err: &AppError) -> Self {
        Self::new(err.alert_title(), err.message())
    }
}

/// Sell form contents. Images are raw bytes until submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    /// Free text; parsed on submit
    pub price: String,
    pub category: Option<String>,
    pub images: Vec<Vec<u8>>,
}

/// Product detail screen.
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    pub product_id: Option<String>,
    pub product: Option<Product>,
    pub loading: bool,
}

/// Shared application state
pub struct AppState {
    pub current_screen: Screen,
    /// Screen to return to from the detail screen
    pub previous_screen: Screen,
    pub mode: CatalogMode,

    pub catalog: CatalogState,
    pub reels: FeedState,
    pub detail: DetailState,

    /// Last favorites list from the server
    pub favorites: Vec<Product>,
    pub favorites_loading: bool,

    pub my_listings: Vec<Product>,
    pub my_listings_loading: bool,
    /// Listing deletions in flight
    pub deleting: Vec<String>,

    /// Saved profile (None until the user saves one)
    pub profile: Option<SellerProfile>,
    /// Profile form being edited
    pub profile_form: SellerProfile,

    pub listing: ListingDraft,
    pub submitting_listing: bool,

    pub alert: Option<Alert>,
    pub loading_message: Option<String>,

    /// Single vs double tap on product cards and reels
    pub taps: TapClassifier<String>,
    /// Hidden-catalog unlock on the home grid
    pub overscroll: OverscrollGestureDetector,
}

impl AppState {
    pub fn new(config: &AppConfig, profile: Option<SellerProfile>) -> Self {
        Self {
            current_screen: Screen::Home,
            previous_screen: Screen::Home,
            mode: CatalogMode::Standard,
            catalog: CatalogState::default(),
            reels: FeedState::new(config.loop_multiplier),
            detail: DetailState::default(),
            favorites: Vec::new(),
            favorites_loading: false,
            my_listings: Vec::new(),
            my_listings_loading: false,
            deleting: Vec::new(),
            profile_form: profile.clone().unwrap_or_default(),
            profile,
            listing: ListingDraft::default(),
            submitting_listing: false,
            alert: None,
            loading_message: None,
            taps: TapClassifier::new(config.tap),
            overscroll: OverscrollGestureDetector::new(config.overscroll),
        }
    }

    /// Find a product already held by any screen.
    pub fn find_product(&self, product_id: &str) -> Option<&Product> {
        self.catalog
            .products
            .iter()
            .chain(self.my_listings.iter())
            .chain(self.favorites.iter())
            .chain(self.detail.product.iter())
            .find(|p| p.id == product_id)
            .or_else(|| {
                self.reels
                    .entries()
                    .map(|e| e.product)
                    .find(|p| p.id == product_id)
            })
    }
}
