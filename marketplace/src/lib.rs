//! # Marketplace Client Core - Library Root
//!
//! View-model core of a mobile marketplace client: product catalog, a
//! swipeable "reels" feed, favorites, listing creation, and a hidden
//! alternate catalog unlocked by a gesture pattern. No GUI toolkit is
//! bundled; a renderer drives [`App`] and reads [`AppState`].
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              marketplace (this crate)                  │
//! ├────────────────────────────────────────────────────────┤
//! │  app        - orchestrator, state, handlers, tasks     │
//! │  gestures   - tap classifier, overscroll detector      │
//! │  feed       - looped reels feed + image carousels      │
//! │  services   - REST client, favorites store, storage    │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP (reqwest)
//!          ▼
//! ┌─────────────────┐
//! │  Marketplace    │
//! │  REST API       │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: event-driven orchestrator ([`App`]), shared [`AppState`],
//!   user-action handlers and spawned network tasks
//! - **core**: [`AppError`], the [`ApiService`](core::ApiService) trait and
//!   the injectable [`Clock`](core::Clock)
//! - **config**: [`AppConfig`] from environment variables
//! - **debug**: `tracing` subscriber setup
//! - **feed**: [`FeedState`](feed::FeedState) for the reels screen
//! - **gestures**: [`TapClassifier`](gestures::TapClassifier) and
//!   [`OverscrollGestureDetector`](gestures::OverscrollGestureDetector)
//! - **services**: [`ApiClient`](services::ApiClient),
//!   [`FavoriteStore`](services::FavoriteStore),
//!   [`LocalStore`](services::LocalStore)
//! - **utils**: form validation
//!
//! ## Gesture state machines
//!
//! Both gesture detectors take `now` explicitly instead of arming timers,
//! so they are deterministic under test:
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use marketplace::gestures::{TapClassifier, TapGesture};
//!
//! let mut taps = TapClassifier::default();
//! let t0 = Instant::now();
//!
//! assert_eq!(taps.tap("p1", t0), None);
//! assert_eq!(
//!     taps.tap("p1", t0 + Duration::from_millis(120)),
//!     Some(TapGesture::DoubleTap("p1"))
//! );
//! assert!(taps.poll(t0 + Duration::from_secs(1)).is_empty());
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod feed;
pub mod gestures;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppServices, AppState, Screen};
pub use config::AppConfig;
pub use core::{AppError, Result};
