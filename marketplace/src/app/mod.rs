//! # Application Orchestrator
//!
//! The [`App`] struct is the view-model a renderer drives. It coordinates user
//! actions, background network tasks and the shared state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      UI thread                              │
//! │  App                                                        │
//! │  - on_tick()       drains events, fires due single taps     │
//! │  - tap() / navigate() / submit_listing() ...  user actions  │
//! │  State: Arc<RwLock<AppState>>  (locks held briefly)         │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │                   Tokio tasks                               │
//! │  tasks::products   catalog pages, reels, detail, listings   │
//! │  tasks::favorites  refresh, check, add/remove               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every task reports back with exactly one [`AppEvent`]; the UI thread
//! applies it in [`App::handle_event`]. Services (API, favorites store, local
//! store, clock) are constructed once at startup and injected through
//! [`AppServices`].
//!
//! ## Gestures
//!
//! Taps go through a [`TapClassifier`](crate::gestures::TapClassifier): a
//! double tap toggles the favorite at once, a single tap opens the product
//! after the double-tap window has passed. [`App::next_deadline`] tells the
//! event loop when the next single tap falls due.
//!
//! Three quick overscrolls at the bottom of the home grid unlock the hidden
//! catalog.

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;
pub mod view;

pub use events::AppEvent;
pub use handlers::listing::{build_listing_request, ImagePick, ImageSource};
pub use state::*;
pub use view::ProductCard;

use std::sync::Arc;
use std::time::Instant;

use async_channel::{unbounded, Receiver, Sender};
use lib_utils::now_utc;
use parking_lot::RwLock;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::dto::{Product, SellerProfile};

use crate::config::AppConfig;
use crate::core::clock::Clock;
use crate::core::service::ApiService;
use crate::feed::ViewableItem;
use crate::gestures::ScrollMetrics;
use crate::services::favorites::FavoriteStore;
use crate::services::storage::{DeviceIdentity, LocalStore};

/// Services the app is built from.
pub struct AppServices {
    pub api: Arc<dyn ApiService>,
    pub store: LocalStore,
    pub device: DeviceIdentity,
    pub clock: Arc<dyn Clock>,
}

/// Handles shared with handlers and tasks.
#[derive(Clone)]
pub(crate) struct AppContext {
    pub(crate) api: Arc<dyn ApiService>,
    pub(crate) favorites: Arc<FavoriteStore>,
    pub(crate) store: Arc<LocalStore>,
    pub(crate) config: Arc<AppConfig>,
    pub(crate) event_tx: Sender<AppEvent>,
}

/// Main application orchestrator.
pub struct App {
    /// Shared application state. Hold locks for the minimal duration.
    pub state: Arc<RwLock<AppState>>,

    /// Results of background tasks; drained by [`App::on_tick`].
    pub event_rx: Receiver<AppEvent>,

    ctx: AppContext,
    clock: Arc<dyn Clock>,
    /// Shuffles the reels feed
    rng: StdRng,
}

impl App {
    /// Build the app. Nothing is fetched until [`App::start`].
    pub fn new(config: AppConfig, services: AppServices) -> Self {
        let AppServices {
            api,
            store,
            device,
            clock,
        } = services;

        // A missing or unreadable profile just means the form starts empty
        let profile = store.load_profile().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not load saved profile");
            None
        });

        let state = AppState::new(&config, profile);
        let favorites = Arc::new(FavoriteStore::new(Arc::clone(&api), device));
        let (event_tx, event_rx) = unbounded();

        tracing::info!(
            api = %config.api_base_url,
            device_id = %favorites.device(),
            "app state initialized"
        );

        Self {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            ctx: AppContext {
                api,
                favorites,
                store: Arc::new(store),
                config: Arc::new(config),
                event_tx,
            },
            clock,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Focus the home screen and load the first catalog page and favorites.
    pub fn start(&mut self) {
        self.navigate(Screen::Home);
        tasks::favorites::refresh_favorites(&self.state, &self.ctx);
    }

    /// Reseed the reels shuffle.
    pub fn seed_rng(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn config(&self) -> &AppConfig {
        &self.ctx.config
    }

    pub fn favorites(&self) -> &Arc<FavoriteStore> {
        &self.ctx.favorites
    }

    pub fn device_id(&self) -> &DeviceIdentity {
        self.ctx.favorites.device()
    }

    /// Called every frame: applies pending events, then fires due single
    /// taps.
    pub fn on_tick(&mut self) {
        let mut events_processed = 0u32;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            events_processed += 1;
        }
        if events_processed > 0 {
            tracing::trace!(events_processed, "on_tick: processed events");
        }

        handlers::navigation::process_due_taps(&self.state, &self.ctx, self.clock.now());
    }

    /// When the next deferred single tap falls due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.state.read().taps.next_deadline()
    }

    // region:    --- Navigation

    pub fn navigate(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(&self.state, &self.ctx, screen);
    }

    pub fn back(&mut self) {
        handlers::navigation::handle_back(&self.state, &self.ctx);
    }

    pub fn open_product(&mut self, id: &str) {
        handlers::navigation::open_product(&self.state, &self.ctx, id);
    }

    /// Tap on a product card (product id) or reel (row key).
    pub fn tap(&mut self, target: &str) {
        handlers::navigation::handle_tap(&self.state, &self.ctx, target, self.clock.now());
    }

    /// Scroll-end on the home grid. Returns `true` if the hidden catalog was
    /// unlocked.
    pub fn home_scroll_end(&mut self, metrics: ScrollMetrics) -> bool {
        handlers::navigation::handle_home_scroll_end(&self.state, &self.ctx, metrics, self.clock.now())
    }

    pub fn exit_hidden_mode(&mut self) {
        handlers::navigation::handle_exit_hidden_mode(&self.state, &self.ctx);
    }

    pub fn refresh_catalog(&mut self) {
        handlers::navigation::handle_catalog_refresh(&self.state, &self.ctx);
    }

    pub fn load_more(&mut self) {
        handlers::navigation::handle_load_more(&self.state, &self.ctx);
    }

    pub fn dismiss_alert(&mut self) {
        handlers::navigation::handle_alert_dismiss(&self.state);
    }

    /// Home grid cards for the current catalog.
    pub fn catalog_cards(&self) -> Vec<ProductCard> {
        let now = now_utc();
        let state = self.state.read();
        state
            .catalog
            .products
            .iter()
            .map(|p| ProductCard::from_product(p, &self.ctx.favorites, now))
            .collect()
    }

    // endregion: --- Navigation

    // region:    --- Reels

    pub fn reels_viewable_items_changed(&mut self, items: &[ViewableItem]) {
        handlers::reels::handle_viewable_items_changed(&self.state, &self.ctx, items);
    }

    pub fn reels_image_scroll(&mut self, index: usize, offset_x: f32, page_width: f32) -> Option<usize> {
        handlers::reels::handle_image_scroll(&self.state, index, offset_x, page_width)
    }

    pub fn refresh_reels(&mut self) {
        handlers::reels::handle_reels_refresh(&self.state, &self.ctx);
    }

    // endregion: --- Reels

    // region:    --- Favorites

    /// Toggle from a heart button. Returns the new displayed state.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        handlers::favorites::handle_favorite_toggle(&self.ctx, id)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ctx.favorites.is_favorite(id)
    }

    /// Favorites screen contents, minus products un-favorited since the last
    /// fetch.
    pub fn favorite_products(&self) -> Vec<Product> {
        self.state
            .read()
            .favorites
            .iter()
            .filter(|p| self.ctx.favorites.is_favorite(&p.id))
            .cloned()
            .collect()
    }

    pub fn favorite_cards(&self) -> Vec<ProductCard> {
        let now = now_utc();
        self.favorite_products()
            .iter()
            .map(|p| ProductCard::from_product(p, &self.ctx.favorites, now))
            .collect()
    }

    // endregion: --- Favorites

    // region:    --- Listings

    pub fn update_listing(&mut self, draft: ListingDraft) {
        self.state.write().listing = draft;
    }

    pub fn pick_image(&mut self, source: ImageSource, pick: ImagePick) {
        handlers::listing::handle_image_picked(&self.state, source, pick);
    }

    pub fn remove_image(&mut self, index: usize) {
        handlers::listing::handle_remove_image(&self.state, index);
    }

    pub fn submit_listing(&mut self) {
        handlers::listing::handle_listing_submit(&self.state, &self.ctx);
    }

    pub fn delete_listing(&mut self, product_id: &str) {
        handlers::listing::handle_delete_listing(&self.state, &self.ctx, product_id);
    }

    // endregion: --- Listings

    // region:    --- Profile

    pub fn edit_profile(&mut self, form: SellerProfile) {
        handlers::profile::handle_profile_edit(&self.state, form);
    }

    pub fn save_profile(&mut self) {
        handlers::profile::handle_profile_save(&self.state, &self.ctx);
    }

    // endregion: --- Profile
}

#[cfg(test)]
mod tests;
