//! # Favorite Tasks

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::spawn;
use tracing::{debug, warn};

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::AppContext;
use crate::services::favorites::PendingToggle;

/// Re-fetch the favorites list for this device.
pub(crate) fn refresh_favorites(state: &Arc<RwLock<AppState>>, ctx: &AppContext) {
    {
        let mut state = state.write();
        if state.favorites_loading {
            return;
        }
        state.favorites_loading = true;
    }

    let favorites = Arc::clone(&ctx.favorites);
    let event_tx = ctx.event_tx.clone();

    spawn(async move {
        let result = favorites.refresh().await.map_err(|e| e.to_string());
        match &result {
            Ok(products) => debug!(count = products.len(), "favorites refreshed"),
            Err(e) => warn!(error = %e, "favorites refresh failed"),
        }
        let _ = event_tx.send(AppEvent::FavoritesLoaded(result)).await;
    });
}

/// Check one product's favorite status.
pub(crate) fn check_favorite(ctx: &AppContext, product_id: String) {
    let favorites = Arc::clone(&ctx.favorites);
    let event_tx = ctx.event_tx.clone();

    spawn(async move {
        let result = favorites.check(&product_id).await.map_err(|e| e.to_string());
        if let Err(e) = &result {
            warn!(product_id = %product_id, error = %e, "favorite check failed");
        }
        let _ = event_tx
            .send(AppEvent::FavoriteChecked { product_id, result })
            .await;
    });
}

/// Send the add/remove request for an optimistic toggle.
pub(crate) fn send_toggle(ctx: &AppContext, pending: PendingToggle) {
    let favorites = Arc::clone(&ctx.favorites);
    let event_tx = ctx.event_tx.clone();

    spawn(async move {
        let result = favorites.send(&pending).await.map_err(|e| e.to_string());
        let _ = event_tx
            .send(AppEvent::FavoriteToggled { pending, result })
            .await;
    });
}
