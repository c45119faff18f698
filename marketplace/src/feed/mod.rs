//! # Reels Feed State
//!
//! View-model for the vertical, swipe-through "reels" feed.
//!
//! The fetched products are shuffled once and presented as if repeated
//! `loop_multiplier` times, which makes the feed feel endless. Nothing is
//! copied: virtual row `v` maps onto the shuffled list with modular
//! arithmetic.
//!
//! ```text
//!   shuffled:   [ b  a  c ]                         M = 3
//!   virtual:    [ b  a  c | b  a  c | b  a  c ... ]  len = M * loop_multiplier
//!   row v  ->   loop = v / M, position = v % M
//!   key    ->   "{id}_loop{loop}_{position}"
//! ```
//!
//! The renderer reports which rows are visible. The first row at least half
//! visible becomes the active row, and only that row gets active treatment
//! (its favorite status is checked, its carousel is interactive).

pub mod carousel;
pub mod keys;

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use shared::dto::Product;

use crate::services::favorites::FavoriteStore;
pub use carousel::ImageCarousel;
pub use keys::{loop_key, strip_loop_suffix};

/// Visible fraction at which a row becomes the active row.
pub const ACTIVE_VISIBILITY_THRESHOLD: f32 = 0.5;

/// Load status of the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    /// Fetch failed; the feed stays empty until the user refreshes.
    Failed,
}

/// One row of the virtual feed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedEntry<'a> {
    /// Virtual row index
    pub index: usize,
    pub loop_index: usize,
    /// Position within the shuffled product list
    pub position: usize,
    pub product: &'a Product,
}

impl FeedEntry<'_> {
    /// Unique row key for the virtualized list.
    pub fn key(&self) -> String {
        loop_key(&self.product.id, self.loop_index, self.position)
    }

    /// Id to use for any network call about this row.
    pub fn product_id(&self) -> &str {
        &self.product.id
    }
}

/// Visibility report for one rendered row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewableItem {
    pub index: usize,
    pub visible_fraction: f32,
}

/// The row that just became active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveItem {
    pub index: usize,
    pub product_id: String,
}

#[derive(Debug, Clone)]
pub struct FeedState {
    products: Vec<Product>,
    loop_multiplier: usize,
    active_index: usize,
    carousels: HashMap<usize, ImageCarousel>,
    status: FeedStatus,
}

impl FeedState {
    pub fn new(loop_multiplier: usize) -> Self {
        Self {
            products: Vec::new(),
            loop_multiplier: loop_multiplier.max(1),
            active_index: 0,
            carousels: HashMap::new(),
            status: FeedStatus::Idle,
        }
    }

    pub fn status(&self) -> FeedStatus {
        self.status
    }

    pub fn begin_loading(&mut self) {
        self.status = FeedStatus::Loading;
    }

    /// Replace the feed with freshly fetched products, shuffled with `rng`.
    ///
    /// Returns the initially active row, if the feed is not empty.
    pub fn load<R: Rng + ?Sized>(&mut self, mut products: Vec<Product>, rng: &mut R) -> Option<ActiveItem> {
        products.shuffle(rng);
        self.products = products;
        self.active_index = 0;
        self.carousels.clear();
        self.status = FeedStatus::Ready;

        tracing::debug!(
            products = self.products.len(),
            rows = self.len(),
            "reels feed loaded"
        );

        self.active_item()
    }

    /// Fetch failed: show nothing, do not retry.
    pub fn load_failed(&mut self) {
        self.products.clear();
        self.active_index = 0;
        self.carousels.clear();
        self.status = FeedStatus::Failed;
    }

    /// Number of virtual rows.
    pub fn len(&self) -> usize {
        self.products.len() * self.loop_multiplier
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn loop_multiplier(&self) -> usize {
        self.loop_multiplier
    }

    pub fn entry(&self, index: usize) -> Option<FeedEntry<'_>> {
        if index >= self.len() {
            return None;
        }
        let m = self.products.len();
        Some(FeedEntry {
            index,
            loop_index: index / m,
            position: index % m,
            product: &self.products[index % m],
        })
    }

    /// All virtual rows in order.
    pub fn entries(&self) -> impl Iterator<Item = FeedEntry<'_>> + '_ {
        (0..self.len()).filter_map(move |i| self.entry(i))
    }

    /// Look up a row by its synthetic key. Only keys this feed could have
    /// produced resolve.
    pub fn entry_by_key(&self, key: &str) -> Option<FeedEntry<'_>> {
        let product_id = strip_loop_suffix(key);
        let (loop_index, position) = key
            .get(product_id.len() + "_loop".len()..)?
            .split_once('_')?;
        let loop_index: usize = loop_index.parse().ok()?;
        let position: usize = position.parse().ok()?;

        let m = self.products.len();
        if position >= m {
            return None;
        }
        let index = loop_index.checked_mul(m)?.checked_add(position)?;

        self.entry(index).filter(|e| e.product_id() == product_id)
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_entry(&self) -> Option<FeedEntry<'_>> {
        self.entry(self.active_index)
    }

    pub fn is_active(&self, index: usize) -> bool {
        !self.is_empty() && index == self.active_index
    }

    fn active_item(&self) -> Option<ActiveItem> {
        self.active_entry().map(|e| ActiveItem {
            index: e.index,
            product_id: e.product_id().to_string(),
        })
    }

    /// Apply a visibility report from the renderer.
    ///
    /// The first reported row at or above [`ACTIVE_VISIBILITY_THRESHOLD`]
    /// becomes active. Returns the new active row when it changed.
    pub fn on_viewable_items_changed(&mut self, items: &[ViewableItem]) -> Option<ActiveItem> {
        let next = items
            .iter()
            .find(|item| item.visible_fraction >= ACTIVE_VISIBILITY_THRESHOLD && item.index < self.len())?
            .index;

        if next == self.active_index {
            return None;
        }

        tracing::trace!(from = self.active_index, to = next, "active reel changed");
        self.active_index = next;
        self.active_item()
    }

    /// Carousel state for a row (page 0 if never scrolled).
    pub fn carousel(&self, index: usize) -> ImageCarousel {
        self.carousels
            .get(&index)
            .copied()
            .or_else(|| self.entry(index).map(|e| ImageCarousel::new(e.product.images.len())))
            .unwrap_or_default()
    }

    /// Horizontal scroll inside a row's image carousel. Returns the page.
    pub fn on_image_scroll(&mut self, index: usize, offset_x: f32, page_width: f32) -> Option<usize> {
        let image_count = self.entry(index)?.product.images.len();
        let carousel = self
            .carousels
            .entry(index)
            .or_insert_with(|| ImageCarousel::new(image_count));
        Some(carousel.on_scroll(offset_x, page_width))
    }

    /// Favorite status of a row, resolved through the app-wide store.
    pub fn is_favorite(&self, index: usize, favorites: &FavoriteStore) -> bool {
        self.entry(index)
            .map(|e| favorites.is_favorite(e.product_id()))
            .unwrap_or(false)
    }
}
