//! # Event Handler
//!
//! Applies background task results to the application state.
//!
//! Passive loads fail silently into an empty or stale state; results of user
//! actions (submit, delete) surface an alert.

use shared::dto::Product;

use crate::app::handlers;
use crate::app::state::CatalogMode;
use crate::app::{App, AppEvent};

impl App {
    /// Handle one async event result.
    ///
    /// Acquires the state lock per event, for the shortest possible time.
    pub fn handle_event(&mut self, event: AppEvent) {
        tracing::trace!(event = event.kind(), "handling event");

        match event {
            AppEvent::CatalogPageLoaded { mode, skip, result } => {
                self.handle_catalog_page(mode, skip, result);
            }
            AppEvent::ReelsLoaded { mode, result } => {
                self.handle_reels_loaded(mode, result);
            }
            AppEvent::ProductLoaded { product_id, result } => {
                self.handle_product_loaded(product_id, result);
            }
            AppEvent::MyListingsLoaded(result) => {
                let mut state = self.state.write();
                state.my_listings_loading = false;
                if let Ok(products) = result {
                    state.my_listings = products;
                }
            }
            AppEvent::FavoritesLoaded(result) => {
                handlers::favorites::handle_favorites_loaded(&self.state, &self.ctx, result);
            }
            AppEvent::FavoriteChecked { product_id, result } => {
                tracing::trace!(product_id = %product_id, favorited = ?result, "favorite checked");
            }
            AppEvent::FavoriteToggled { pending, result } => {
                handlers::favorites::handle_toggle_finished(&self.state, &self.ctx, pending, result);
            }
            AppEvent::ListingCreated(result) => {
                handlers::listing::handle_listing_created(&self.state, &self.ctx, result);
            }
            AppEvent::ListingDeleted { product_id, result } => {
                handlers::listing::handle_listing_deleted(&self.state, product_id, result);
            }
            AppEvent::Loading(message) => {
                self.state.write().loading_message = Some(message);
            }
        }
    }

    fn handle_catalog_page(&mut self, mode: CatalogMode, skip: u32, result: Result<Vec<Product>, String>) {
        let page_size = self.ctx.config.page_size as usize;
        let mut state = self.state.write();

        if state.mode != mode {
            tracing::debug!(?mode, "discarding catalog page for previous mode");
            return;
        }

        state.catalog.loading = false;
        state.catalog.refreshing = false;

        let products = match result {
            Ok(products) => products,
            Err(_) => return,
        };

        if skip == 0 {
            state.catalog.products = products.clone();
        } else if skip == state.catalog.next_skip() {
            state.catalog.products.extend(products.iter().cloned());
        } else {
            tracing::debug!(skip, have = state.catalog.products.len(), "discarding out-of-order page");
            return;
        }

        state.catalog.has_more = products.len() >= page_size;
        state.catalog.loaded = true;
    }

    fn handle_reels_loaded(&mut self, mode: CatalogMode, result: Result<Vec<Product>, String>) {
        let active = {
            let mut state = self.state.write();
            if state.mode != mode {
                tracing::debug!(?mode, "discarding reels for previous mode");
                return;
            }

            match result {
                Ok(products) => state.reels.load(products, &mut self.rng),
                Err(_) => {
                    state.reels.load_failed();
                    None
                }
            }
        };

        if let Some(active) = active {
            crate::app::tasks::favorites::check_favorite(&self.ctx, active.product_id);
        }
    }

    fn handle_product_loaded(&mut self, product_id: String, result: Result<Product, String>) {
        let mut state = self.state.write();
        if state.detail.product_id.as_deref() != Some(product_id.as_str()) {
            return;
        }
        state.detail.loading = false;
        if let Ok(product) = result {
            state.detail.product = Some(product);
        }
    }
}
