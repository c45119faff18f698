use std::sync::Arc;
use std::time::Duration;

use shared::dto::{Product, SellerProfile};
use tempfile::TempDir;

use super::*;
use crate::core::clock::ManualClock;
use crate::services::testing::MockApi;

const JPEG: [u8; 4] = [0xFF, 0xD8, 0xFF, 0xE0];

struct Harness {
    app: App,
    api: Arc<MockApi>,
    clock: Arc<ManualClock>,
    dir: TempDir,
}

fn harness(products: Vec<Product>) -> Harness {
    let dir = tempfile::tempdir().unwrap();
    let api = Arc::new(MockApi::with_products(products));
    let clock = Arc::new(ManualClock::new());
    let config = AppConfig {
        page_size: 2,
        ..Default::default()
    };

    let mut app = App::new(
        config,
        AppServices {
            api: api.clone(),
            store: LocalStore::open(dir.path()).unwrap(),
            device: DeviceIdentity::from("dev-1"),
            clock: clock.clone(),
        },
    );
    app.seed_rng(7);

    Harness { app, api, clock, dir }
}

fn upside_down(id: &str) -> Product {
    Product {
        is_upside_down: true,
        ..MockApi::product(id)
    }
}

fn owned(id: &str, device: &str) -> Product {
    Product {
        device_id: Some(device.to_string()),
        ..MockApi::product(id)
    }
}

fn at_bottom() -> ScrollMetrics {
    ScrollMetrics {
        content_height: 2000.0,
        viewport_height: 800.0,
        scroll_offset: 1200.0,
        velocity: -1.2,
    }
}

/// Wait for `n` task results and apply them.
async fn settle(app: &mut App, n: usize) {
    for _ in 0..n {
        let event = tokio::time::timeout(Duration::from_secs(2), app.event_rx.recv())
            .await
            .expect("timed out waiting for event")
            .expect("event channel closed");
        app.handle_event(event);
    }
}

fn catalog_ids(app: &App) -> Vec<String> {
    app.state.read().catalog.products.iter().map(|p| p.id.clone()).collect()
}

#[tokio::test]
async fn test_start_loads_first_page_and_pages_on() {
    let mut h = harness(vec![
        MockApi::product("p1"),
        MockApi::product("p2"),
        MockApi::product("p3"),
    ]);

    h.app.start();
    settle(&mut h.app, 2).await;
    assert_eq!(catalog_ids(&h.app), vec!["p1", "p2"]);
    assert!(h.app.state.read().catalog.has_more);

    h.app.load_more();
    settle(&mut h.app, 1).await;
    assert_eq!(catalog_ids(&h.app), vec!["p1", "p2", "p3"]);
    assert!(!h.app.state.read().catalog.has_more);

    // Exhausted: no further request
    h.app.load_more();
    let list_calls = h
        .api
        .calls()
        .iter()
        .filter(|c| c.starts_with("list_products"))
        .count();
    assert_eq!(list_calls, 2);

    h.app.refresh_catalog();
    settle(&mut h.app, 1).await;
    assert_eq!(catalog_ids(&h.app), vec!["p1", "p2"]);

    let cards = h.app.catalog_cards();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].id, "p1");
    assert_eq!(cards[0].seller, "Seller");
    assert!(!cards[0].favorited);
}

#[tokio::test]
async fn test_overscroll_unlocks_hidden_catalog() {
    let mut h = harness(vec![MockApi::product("s1"), upside_down("u1")]);
    h.app.start();
    settle(&mut h.app, 2).await;
    assert_eq!(catalog_ids(&h.app), vec!["s1"]);

    assert!(!h.app.home_scroll_end(at_bottom()));
    h.clock.set_millis(500);
    assert!(!h.app.home_scroll_end(at_bottom()));
    h.clock.set_millis(1200);
    assert!(h.app.home_scroll_end(at_bottom()));

    assert_eq!(h.app.state.read().mode, CatalogMode::UpsideDown);
    assert_eq!(h.app.state.read().overscroll.count(), 0);
    settle(&mut h.app, 1).await;
    assert_eq!(catalog_ids(&h.app), vec!["u1"]);
    assert!(h
        .api
        .calls()
        .contains(&"list_products upside_down=true skip=0 limit=2".to_string()));

    // Further overscrolls in the hidden catalog do nothing
    for ms in [1300, 1400, 1500] {
        h.clock.set_millis(ms);
        assert!(!h.app.home_scroll_end(at_bottom()));
    }

    h.app.exit_hidden_mode();
    assert_eq!(h.app.state.read().mode, CatalogMode::Standard);
    settle(&mut h.app, 1).await;
    assert_eq!(catalog_ids(&h.app), vec!["s1"]);
}

#[tokio::test]
async fn test_slow_overscrolls_never_unlock() {
    let mut h = harness(vec![MockApi::product("s1")]);
    h.app.start();
    settle(&mut h.app, 2).await;

    for ms in [0, 500, 4000] {
        h.clock.set_millis(ms);
        assert!(!h.app.home_scroll_end(at_bottom()));
    }
    assert_eq!(h.app.state.read().mode, CatalogMode::Standard);

    // Leaving the screen forgets the partial pattern
    h.app.navigate(Screen::Sell);
    assert_eq!(h.app.state.read().overscroll.count(), 0);
}

#[tokio::test]
async fn test_single_tap_opens_detail_after_quiet_period() {
    let mut h = harness(vec![MockApi::product("p1")]);
    h.app.start();
    settle(&mut h.app, 2).await;

    h.app.tap("p1");
    assert!(h.app.next_deadline().is_some());

    h.clock.set_millis(299);
    h.app.on_tick();
    assert_eq!(h.app.state.read().current_screen, Screen::Home);

    h.clock.set_millis(300);
    h.app.on_tick();
    assert_eq!(h.app.state.read().current_screen, Screen::ProductDetail);
    assert!(h.app.next_deadline().is_none());

    // Detail fetch and favorite check
    settle(&mut h.app, 2).await;
    let state = h.app.state.read();
    assert_eq!(state.detail.product_id.as_deref(), Some("p1"));
    assert_eq!(state.detail.product.as_ref().map(|p| p.id.as_str()), Some("p1"));
    assert!(!state.detail.loading);
    drop(state);
    assert!(!h.app.is_favorite("p1"));

    h.app.back();
    assert_eq!(h.app.state.read().current_screen, Screen::Home);
}

#[tokio::test]
async fn test_double_tap_toggles_favorite_without_navigating() {
    let mut h = harness(vec![MockApi::product("p1")]);
    h.app.start();
    settle(&mut h.app, 2).await;

    h.app.tap("p1");
    h.clock.set_millis(120);
    h.app.tap("p1");

    // Optimistic, before the request completes
    assert!(h.app.is_favorite("p1"));
    settle(&mut h.app, 1).await;
    assert!(h.app.is_favorite("p1"));

    h.clock.set_millis(1000);
    h.app.on_tick();
    assert_eq!(h.app.state.read().current_screen, Screen::Home);
    assert!(h.api.calls().contains(&"add_favorite dev-1 p1".to_string()));
}

#[tokio::test]
async fn test_failed_toggle_reverts() {
    let mut h = harness(vec![MockApi::product("p1")]);
    h.api.fail_favorites(true);

    assert!(h.app.toggle_favorite("p1"));
    assert!(h.app.is_favorite("p1"));
    settle(&mut h.app, 1).await;
    assert!(!h.app.is_favorite("p1"));
}

#[tokio::test]
async fn test_reels_feed_loops_and_checks_active_row() {
    let mut h = harness(vec![
        MockApi::product("p1"),
        MockApi::product("p2"),
        MockApi::product("p3"),
    ]);
    h.api.set_favorites(vec![MockApi::product("p2")]);

    h.app.navigate(Screen::Reels);
    settle(&mut h.app, 1).await; // reels
    settle(&mut h.app, 1).await; // active row check

    let (len, second) = {
        let state = h.app.state.read();
        let second = state.reels.entry(1).map(|e| e.product_id().to_string());
        (state.reels.len(), second)
    };
    assert_eq!(len, 30);
    let second = second.unwrap();

    h.app.reels_viewable_items_changed(&[
        ViewableItem { index: 0, visible_fraction: 0.3 },
        ViewableItem { index: 1, visible_fraction: 0.7 },
    ]);
    assert_eq!(h.app.state.read().reels.active_index(), 1);
    settle(&mut h.app, 1).await;
    assert!(h
        .api
        .calls()
        .contains(&format!("check_favorite dev-1 {}", second)));
    assert_eq!(h.app.is_favorite(&second), second == "p2");

    // Double tap on a row key favorites the underlying product
    let key = h.app.state.read().reels.entry(4).map(|e| e.key()).unwrap();
    let base = crate::feed::strip_loop_suffix(&key).to_string();
    let before = h.app.is_favorite(&base);
    h.app.tap(&key);
    h.clock.set_millis(50);
    h.app.tap(&key);
    assert_eq!(h.app.is_favorite(&base), !before);
    settle(&mut h.app, 1).await;
    assert_eq!(h.app.is_favorite(&base), !before);

    assert_eq!(h.app.reels_image_scroll(1, 0.0, 390.0), Some(0));
}

#[tokio::test]
async fn test_listing_requires_profile_then_posts() {
    let mut h = harness(vec![]);
    h.app.navigate(Screen::Sell);
    h.app.update_listing(ListingDraft {
        title: "Brass lamp".to_string(),
        description: "Works".to_string(),
        price: "450".to_string(),
        category: None,
        images: vec![JPEG.to_vec()],
    });

    h.app.submit_listing();
    let alert = h.app.state.read().alert.clone().unwrap();
    assert_eq!(alert.title, "Missing Information");
    assert!(!h.api.calls().iter().any(|c| c.starts_with("create_product")));
    h.app.dismiss_alert();

    h.app.navigate(Screen::Profile);
    h.app.edit_profile(SellerProfile::named(" Asha "));
    h.app.save_profile();
    assert_eq!(h.app.state.read().alert.clone().unwrap().title, "Success");
    let saved = LocalStore::open(h.dir.path()).unwrap().load_profile().unwrap();
    assert_eq!(saved.map(|p| p.name), Some("Asha".to_string()));

    h.app.navigate(Screen::Sell);
    h.app.submit_listing();
    assert!(h.app.state.read().submitting_listing);
    settle(&mut h.app, 2).await; // loading + created

    {
        let state = h.app.state.read();
        assert_eq!(state.current_screen, Screen::MyListings);
        assert_eq!(state.listing, ListingDraft::default());
        assert!(!state.submitting_listing);
        assert_eq!(state.alert.as_ref().map(|a| a.title.as_str()), Some("Success"));
    }

    settle(&mut h.app, 1).await; // my listings
    let mine = h.app.state.read().my_listings.clone();
    assert_eq!(mine.len(), 1);
    assert!(mine[0].is_owned_by("dev-1"));
    assert_eq!(mine[0].seller.name, "Asha");
    assert!(!mine[0].is_upside_down);
}

#[tokio::test]
async fn test_invalid_profile_is_not_saved() {
    let mut h = harness(vec![]);
    h.app.edit_profile(SellerProfile {
        name: "Asha".to_string(),
        email: Some("not-an-email".to_string()),
        ..Default::default()
    });
    h.app.save_profile();

    let state = h.app.state.read();
    assert_eq!(state.alert.as_ref().map(|a| a.message.as_str()), Some("Invalid email format"));
    assert!(state.profile.is_none());
    drop(state);
    assert!(LocalStore::open(h.dir.path()).unwrap().load_profile().unwrap().is_none());
}

#[tokio::test]
async fn test_permission_denied_alerts() {
    let mut h = harness(vec![]);
    h.app.pick_image(ImageSource::Camera, ImagePick::PermissionDenied);
    let alert = h.app.state.read().alert.clone().unwrap();
    assert_eq!(alert.title, "Permission Required");
    assert_eq!(alert.message, "Camera access is needed to take photos");

    h.app.pick_image(ImageSource::Gallery, ImagePick::Picked(JPEG.to_vec()));
    h.app.pick_image(ImageSource::Gallery, ImagePick::Cancelled);
    assert_eq!(h.app.state.read().listing.images.len(), 1);
    h.app.remove_image(0);
    assert!(h.app.state.read().listing.images.is_empty());
}

#[tokio::test]
async fn test_delete_only_own_listings() {
    let mut h = harness(vec![owned("mine", "dev-1"), owned("theirs", "dev-2")]);
    h.app.start();
    settle(&mut h.app, 2).await;

    h.app.delete_listing("theirs");
    assert_eq!(
        h.app.state.read().alert.as_ref().map(|a| a.title.as_str()),
        Some("Permission Required")
    );
    h.app.dismiss_alert();

    h.app.navigate(Screen::MyListings);
    settle(&mut h.app, 1).await;
    assert_eq!(h.app.state.read().my_listings.len(), 1);

    h.app.delete_listing("mine");
    settle(&mut h.app, 1).await;
    let state = h.app.state.read();
    assert!(state.my_listings.is_empty());
    assert_eq!(catalog_ids_of(&state), vec!["theirs"]);
    assert!(state.alert.is_none());
    assert!(h.api.calls().contains(&"delete_product mine dev-1".to_string()));
}

fn catalog_ids_of(state: &AppState) -> Vec<String> {
    state.catalog.products.iter().map(|p| p.id.clone()).collect()
}

#[tokio::test]
async fn test_favorites_screen_refetches_on_focus() {
    let mut h = harness(vec![MockApi::product("p1"), MockApi::product("p2")]);
    h.api.set_favorites(vec![MockApi::product("p2")]);

    h.app.navigate(Screen::Favorites);
    settle(&mut h.app, 1).await;
    let ids: Vec<String> = h.app.favorite_products().into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["p2"]);

    // Un-favoriting hides it at once
    assert!(!h.app.toggle_favorite("p2"));
    assert!(h.app.favorite_products().is_empty());
    settle(&mut h.app, 1).await;
    assert!(h.app.state.read().favorites.is_empty());

    h.api.set_favorites(vec![MockApi::product("p1")]);
    h.app.navigate(Screen::Home);
    h.app.navigate(Screen::Favorites);
    // Home fetch + favorites fetch
    settle(&mut h.app, 2).await;
    let ids: Vec<String> = h.app.favorite_products().into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["p1"]);
}

#[tokio::test]
async fn test_failed_reels_fetch_leaves_feed_empty() {
    let mut h = harness(vec![MockApi::product("p1")]);
    h.api.fail_products(true);

    h.app.navigate(Screen::Reels);
    settle(&mut h.app, 1).await;
    {
        let state = h.app.state.read();
        assert_eq!(state.reels.status(), crate::feed::FeedStatus::Failed);
        assert!(state.reels.is_empty());
    }
    assert!(!h.api.calls().iter().any(|c| c.starts_with("check_favorite")));

    // No automatic retry on refocus; pull-to-refresh retries
    h.app.navigate(Screen::Home);
    h.app.navigate(Screen::Reels);
    settle(&mut h.app, 1).await; // home page (failed)
    assert_eq!(h.app.state.read().reels.status(), crate::feed::FeedStatus::Failed);

    h.api.fail_products(false);
    h.app.refresh_reels();
    settle(&mut h.app, 2).await; // reels + active row check
    assert_eq!(h.app.state.read().reels.len(), 10);
}

#[tokio::test]
async fn test_favorites_fetched_before_a_toggle_keep_the_toggle() {
    let mut h = harness(vec![MockApi::product("p1")]);
    let release = h.api.hold_favorite_reads();

    h.app.start();
    while !h.api.calls().iter().any(|c| c.starts_with("list_favorites")) {
        tokio::task::yield_now().await;
    }
    settle(&mut h.app, 1).await; // home page; favorites still held

    assert!(h.app.toggle_favorite("p1"));
    settle(&mut h.app, 1).await;
    assert!(h.app.is_favorite("p1"));

    // The held list predates the add
    release.notify_one();
    settle(&mut h.app, 1).await;
    assert!(h.app.is_favorite("p1"));
    let ids: Vec<String> = h.app.favorite_products().into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["p1"]);
    assert!(h.app.favorite_cards().iter().all(|c| c.favorited));
}

#[tokio::test]
async fn test_returning_to_reels_rechecks_active_row() {
    let mut h = harness(vec![MockApi::product("p1"), MockApi::product("p2")]);

    h.app.navigate(Screen::Reels);
    settle(&mut h.app, 2).await; // reels + active row check

    h.app.navigate(Screen::Home);
    settle(&mut h.app, 1).await; // home page

    h.app.navigate(Screen::Reels);
    settle(&mut h.app, 1).await; // active row check again

    let checks = h
        .api
        .calls()
        .iter()
        .filter(|c| c.starts_with("check_favorite"))
        .count();
    assert_eq!(checks, 2);

    // Ready feed is not refetched: one reels fetch, one home fetch
    let fetches = h
        .api
        .calls()
        .iter()
        .filter(|c| c.starts_with("list_products"))
        .count();
    assert_eq!(fetches, 2);

    // Opening a row shows the cached product while the detail loads
    let (key, expected) = {
        let state = h.app.state.read();
        let entry = state.reels.entry(3).unwrap();
        (entry.key(), entry.product_id().to_string())
    };
    h.app.open_product(&key);
    let detail = h.app.state.read().detail.clone();
    assert_eq!(detail.product_id.as_deref(), Some(expected.as_str()));
    assert_eq!(detail.product.map(|p| p.id), Some(expected.clone()));
    settle(&mut h.app, 2).await; // product + favorite check
    assert_eq!(h.app.state.read().current_screen, Screen::ProductDetail);
}
