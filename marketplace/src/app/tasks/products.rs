//! # Product Tasks
//!
//! Catalog pages, reels, product detail and listing management.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::dto::{CreateProductRequest, ProductQuery};
use tokio::spawn;
use tracing::{debug, info, warn};

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::AppContext;

/// Fetch a page of the home catalog.
///
/// `refresh` restarts from the first page. Skipped when a page request is
/// already in flight or the last page has been reached.
pub(crate) fn fetch_catalog_page(state: &Arc<RwLock<AppState>>, ctx: &AppContext, refresh: bool) {
    let (mode, skip) = {
        let mut state = state.write();

        if state.catalog.loading {
            debug!("catalog page already loading");
            return;
        }
        if !refresh && state.catalog.loaded && !state.catalog.has_more {
            debug!("catalog exhausted");
            return;
        }

        state.catalog.loading = true;
        state.catalog.refreshing = refresh;
        let skip = if refresh { 0 } else { state.catalog.next_skip() };
        (state.mode, skip)
    }; // Lock released here

    let api = Arc::clone(&ctx.api);
    let event_tx = ctx.event_tx.clone();
    let query = ProductQuery::page(mode.is_upside_down(), ctx.config.page_size, skip);

    spawn(async move {
        let result = api.list_products(query).await.map_err(|e| e.to_string());
        match &result {
            Ok(products) => info!(?mode, skip, count = products.len(), "catalog page fetched"),
            Err(e) => warn!(?mode, skip, error = %e, "catalog page fetch failed"),
        }
        let _ = event_tx
            .send(AppEvent::CatalogPageLoaded { mode, skip, result })
            .await;
    });
}

/// Fetch every product of the current mode for the reels feed.
pub(crate) fn fetch_reels(state: &Arc<RwLock<AppState>>, ctx: &AppContext) {
    let mode = {
        let mut state = state.write();
        if state.reels.status() == crate::feed::FeedStatus::Loading {
            return;
        }
        state.reels.begin_loading();
        state.mode
    };

    let api = Arc::clone(&ctx.api);
    let event_tx = ctx.event_tx.clone();
    let query = ProductQuery {
        upside_down: mode.is_upside_down(),
        ..Default::default()
    };

    spawn(async move {
        let result = api.list_products(query).await.map_err(|e| e.to_string());
        match &result {
            Ok(products) => info!(?mode, count = products.len(), "reels fetched"),
            Err(e) => warn!(?mode, error = %e, "reels fetch failed"),
        }
        let _ = event_tx.send(AppEvent::ReelsLoaded { mode, result }).await;
    });
}

/// Fetch a single product for the detail screen.
pub(crate) fn fetch_product(ctx: &AppContext, product_id: String) {
    let api = Arc::clone(&ctx.api);
    let event_tx = ctx.event_tx.clone();

    spawn(async move {
        let result = api.get_product(&product_id).await.map_err(|e| e.to_string());
        if let Err(e) = &result {
            warn!(product_id = %product_id, error = %e, "product fetch failed");
        }
        let _ = event_tx
            .send(AppEvent::ProductLoaded { product_id, result })
            .await;
    });
}

/// Fetch the listings created by this device.
pub(crate) fn fetch_my_listings(state: &Arc<RwLock<AppState>>, ctx: &AppContext) {
    {
        let mut state = state.write();
        if state.my_listings_loading {
            return;
        }
        state.my_listings_loading = true;
    }

    let api = Arc::clone(&ctx.api);
    let favorites = Arc::clone(&ctx.favorites);
    let event_tx = ctx.event_tx.clone();

    spawn(async move {
        let device_id = favorites.device().as_str();
        let result = api.my_products(device_id).await.map_err(|e| e.to_string());
        if let Err(e) = &result {
            warn!(error = %e, "my listings fetch failed");
        }
        let _ = event_tx.send(AppEvent::MyListingsLoaded(result)).await;
    });
}

/// Submit a validated listing.
pub(crate) fn create_listing(ctx: &AppContext, request: CreateProductRequest) {
    let api = Arc::clone(&ctx.api);
    let event_tx = ctx.event_tx.clone();

    spawn(async move {
        let _ = event_tx
            .send(AppEvent::Loading("Posting listing...".to_string()))
            .await;

        let title = request.title.clone();
        let images = request.images.len();
        let upside_down = request.is_upside_down;
        let result = api.create_product(request).await.map_err(|e| e.to_string());
        match &result {
            Ok(product) => info!(
                product_id = %product.id,
                title = %title,
                images,
                upside_down,
                "listing created"
            ),
            Err(e) => warn!(title = %title, error = %e, "listing creation failed"),
        }
        let _ = event_tx.send(AppEvent::ListingCreated(result)).await;
    });
}

/// Delete one of this device's listings.
pub(crate) fn delete_listing(ctx: &AppContext, product_id: String) {
    let api = Arc::clone(&ctx.api);
    let favorites = Arc::clone(&ctx.favorites);
    let event_tx = ctx.event_tx.clone();

    spawn(async move {
        let device_id = favorites.device().as_str();
        let result = api
            .delete_product(&product_id, device_id)
            .await
            .map_err(|e| e.to_string());
        match &result {
            Ok(()) => info!(product_id = %product_id, "listing deleted"),
            Err(e) => warn!(product_id = %product_id, error = %e, "listing deletion failed"),
        }
        let _ = event_tx
            .send(AppEvent::ListingDeleted { product_id, result })
            .await;
    });
}
