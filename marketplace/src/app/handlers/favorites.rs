//! # Favorite Handlers

use std::sync::Arc;

use parking_lot::RwLock;
use shared::dto::Product;

use crate::app::state::AppState;
use crate::app::tasks;
use crate::app::AppContext;
use crate::services::favorites::{PendingToggle, ToggleResolution};

/// Optimistically flip a favorite and send the request. Returns the new
/// displayed state.
pub(crate) fn handle_favorite_toggle(ctx: &AppContext, id: &str) -> bool {
    let pending = ctx.favorites.begin_toggle(id);
    let favorited = pending.favorited;
    tasks::favorites::send_toggle(ctx, pending);
    favorited
}

/// Reconcile a finished toggle and keep the favorites list in step.
pub(crate) fn handle_toggle_finished(
    state: &Arc<RwLock<AppState>>,
    ctx: &AppContext,
    pending: PendingToggle,
    result: Result<(), String>,
) {
    let resolution = ctx.favorites.complete_toggle(&pending, &result);
    tracing::debug!(
        product_id = %pending.product_id,
        seq = pending.seq,
        ?resolution,
        "favorite toggle reconciled"
    );

    if resolution == ToggleResolution::Stale {
        return;
    }

    let favorited = ctx.favorites.is_favorite(&pending.product_id);
    let mut state = state.write();
    let listed = state.favorites.iter().any(|p| p.id == pending.product_id);

    if !favorited && listed {
        state.favorites.retain(|p| p.id != pending.product_id);
    } else if favorited && !listed {
        if let Some(product) = state.find_product(&pending.product_id).cloned() {
            state.favorites.push(product);
        }
    }
}

/// Replace the favorites list with a fetched one. Products the store still
/// shows as favorited (toggled after the fetch went out) are kept.
pub(crate) fn handle_favorites_loaded(
    state: &Arc<RwLock<AppState>>,
    ctx: &AppContext,
    result: Result<Vec<Product>, String>,
) {
    let mut state = state.write();
    state.favorites_loading = false;
    let Ok(mut products) = result else {
        return;
    };

    for id in ctx.favorites.favorite_ids() {
        if products.iter().any(|p| p.id == id) {
            continue;
        }
        if let Some(product) = state.find_product(&id).cloned() {
            products.push(product);
        }
    }
    state.favorites = products;
}
