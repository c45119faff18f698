//! # Reels Handlers

use std::sync::Arc;

use parking_lot::RwLock;

use crate::app::state::AppState;
use crate::app::tasks;
use crate::app::AppContext;
use crate::feed::ViewableItem;

/// Visibility report from the renderer; checks the favorite status of a
/// newly active row.
pub(crate) fn handle_viewable_items_changed(
    state: &Arc<RwLock<AppState>>,
    ctx: &AppContext,
    items: &[ViewableItem],
) {
    let active = state.write().reels.on_viewable_items_changed(items);
    if let Some(active) = active {
        tasks::favorites::check_favorite(ctx, active.product_id);
    }
}

/// Horizontal swipe inside a row's image carousel.
pub(crate) fn handle_image_scroll(
    state: &Arc<RwLock<AppState>>,
    index: usize,
    offset_x: f32,
    page_width: f32,
) -> Option<usize> {
    state.write().reels.on_image_scroll(index, offset_x, page_width)
}

/// Pull-to-refresh: refetch and reshuffle.
pub(crate) fn handle_reels_refresh(state: &Arc<RwLock<AppState>>, ctx: &AppContext) {
    tasks::products::fetch_reels(state, ctx);
}
