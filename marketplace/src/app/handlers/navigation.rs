//! # Navigation Handlers
//!
//! Screen focus, catalog mode switching, and the tap and overscroll gestures
//! that drive navigation.

use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;

use crate::app::handlers::favorites::handle_favorite_toggle;
use crate::app::state::{AppState, CatalogMode, CatalogState, DetailState, Screen};
use crate::app::tasks;
use crate::app::AppContext;
use crate::feed::{strip_loop_suffix, FeedState, FeedStatus};
use crate::gestures::{OverscrollOutcome, ScrollMetrics, TapGesture};

/// Focus a screen and start whatever fetch it needs.
pub(crate) fn handle_screen_change(state: &Arc<RwLock<AppState>>, ctx: &AppContext, screen: Screen) {
    let (needs_catalog, needs_reels, active_reel) = {
        let mut state = state.write();
        if state.current_screen == Screen::Home && screen != Screen::Home {
            state.overscroll.reset();
        }
        state.taps.reset();
        state.current_screen = screen;

        if screen == Screen::Profile {
            state.profile_form = state.profile.clone().unwrap_or_default();
        }

        let active_reel = match (screen, state.reels.status()) {
            (Screen::Reels, FeedStatus::Ready) => state
                .reels
                .active_entry()
                .map(|e| e.product_id().to_string()),
            _ => None,
        };

        (
            screen == Screen::Home && !state.catalog.loaded,
            screen == Screen::Reels && state.reels.status() == FeedStatus::Idle,
            active_reel,
        )
    };

    tracing::debug!(screen = screen.title(), "screen focused");

    match screen {
        Screen::Home if needs_catalog => tasks::products::fetch_catalog_page(state, ctx, true),
        Screen::Reels if needs_reels => tasks::products::fetch_reels(state, ctx),
        Screen::Reels => {
            if let Some(product_id) = active_reel {
                tasks::favorites::check_favorite(ctx, product_id);
            }
        }
        Screen::Favorites => tasks::favorites::refresh_favorites(state, ctx),
        Screen::MyListings => tasks::products::fetch_my_listings(state, ctx),
        _ => {}
    }
}

/// Leave the detail or my-listings screen.
pub(crate) fn handle_back(state: &Arc<RwLock<AppState>>, ctx: &AppContext) {
    let target = {
        let state = state.read();
        match state.current_screen {
            Screen::ProductDetail => state.previous_screen,
            Screen::MyListings => Screen::Profile,
            other => other,
        }
    };
    handle_screen_change(state, ctx, target);
}

/// Open the detail screen for a product (or a reels row key).
pub(crate) fn open_product(state: &Arc<RwLock<AppState>>, ctx: &AppContext, id: &str) {
    let product_id = strip_loop_suffix(id).to_string();
    {
        let mut state = state.write();
        let cached = state
            .reels
            .entry_by_key(id)
            .map(|e| e.product.clone())
            .or_else(|| state.find_product(&product_id).cloned());
        state.detail = DetailState {
            product_id: Some(product_id.clone()),
            product: cached,
            loading: true,
        };
        if state.current_screen != Screen::ProductDetail {
            state.previous_screen = state.current_screen;
        }
        state.current_screen = Screen::ProductDetail;
        state.taps.reset();
    }

    tracing::info!(product_id = %product_id, "opening product");
    tasks::products::fetch_product(ctx, product_id.clone());
    tasks::favorites::check_favorite(ctx, product_id);
}

/// A tap on a product card or reel.
///
/// Double taps toggle the favorite at once; single taps are deferred and
/// delivered by [`process_due_taps`].
pub(crate) fn handle_tap(state: &Arc<RwLock<AppState>>, ctx: &AppContext, target: &str, now: Instant) {
    let gesture = state.write().taps.tap(target.to_string(), now);

    if let Some(TapGesture::DoubleTap(target)) = gesture {
        handle_favorite_toggle(ctx, &target);
    }
}

/// Fire single taps whose quiet period has elapsed.
pub(crate) fn process_due_taps(state: &Arc<RwLock<AppState>>, ctx: &AppContext, now: Instant) {
    let due = {
        let mut state = state.write();
        if !state.taps.has_pending() {
            return;
        }
        state.taps.poll(now)
    };

    for gesture in due {
        if let TapGesture::SingleTap(target) = gesture {
            open_product(state, ctx, &target);
        }
    }
}

/// Scroll-end on the home grid. Returns `true` when the hidden catalog was
/// unlocked.
pub(crate) fn handle_home_scroll_end(
    state: &Arc<RwLock<AppState>>,
    ctx: &AppContext,
    metrics: ScrollMetrics,
    now: Instant,
) -> bool {
    let outcome = {
        let mut state = state.write();
        if state.current_screen != Screen::Home || state.mode != CatalogMode::Standard {
            return false;
        }
        state.overscroll.on_scroll_end(&metrics, now)
    };

    match outcome {
        OverscrollOutcome::Triggered => {
            tracing::info!("overscroll pattern completed, entering hidden catalog");
            switch_mode(state, ctx, CatalogMode::UpsideDown);
            true
        }
        OverscrollOutcome::Counted { count } => {
            tracing::debug!(count, "overscroll attempt");
            false
        }
        OverscrollOutcome::Ignored => false,
    }
}

/// Return from the hidden catalog to the standard one.
pub(crate) fn handle_exit_hidden_mode(state: &Arc<RwLock<AppState>>, ctx: &AppContext) {
    if state.read().mode == CatalogMode::Standard {
        return;
    }
    tracing::info!("leaving hidden catalog");
    switch_mode(state, ctx, CatalogMode::Standard);
}

fn switch_mode(state: &Arc<RwLock<AppState>>, ctx: &AppContext, mode: CatalogMode) {
    {
        let mut state = state.write();
        state.mode = mode;
        state.catalog = CatalogState::default();
        state.reels = FeedState::new(ctx.config.loop_multiplier);
        state.overscroll.reset();
        state.taps.reset();
        state.current_screen = Screen::Home;
    }
    tasks::products::fetch_catalog_page(state, ctx, true);
}

/// Pull-to-refresh on the home grid.
pub(crate) fn handle_catalog_refresh(state: &Arc<RwLock<AppState>>, ctx: &AppContext) {
    tasks::products::fetch_catalog_page(state, ctx, true);
}

/// End of the home grid reached.
pub(crate) fn handle_load_more(state: &Arc<RwLock<AppState>>, ctx: &AppContext) {
    tasks::products::fetch_catalog_page(state, ctx, false);
}

pub(crate) fn handle_alert_dismiss(state: &Arc<RwLock<AppState>>) {
    state.write().alert = None;
}
