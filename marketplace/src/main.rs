//! Headless client: boots the core against a backend, loads the home
//! catalog and favorites, and logs state changes until Ctrl+C.

use std::sync::Arc;
use std::time::Instant;

use marketplace::core::SystemClock;
use marketplace::debug::{self, LogConfig};
use marketplace::services::{ApiClient, LocalStore};
use marketplace::{App, AppConfig, AppServices, Result};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let _log_guard = debug::init(&LogConfig::from_env());

    let config = AppConfig::from_env()?;
    let store = LocalStore::open(&config.data_dir)?;
    let device = store.load_or_create_device_id()?;
    let api = Arc::new(ApiClient::new(&config)?);

    info!(
        api = %config.api_base_url,
        data_dir = %config.data_dir.display(),
        device_id = %device,
        "starting marketplace client"
    );

    let mut app = App::new(
        config,
        AppServices {
            api,
            store,
            device,
            clock: Arc::new(SystemClock),
        },
    );
    app.start();

    let events = app.event_rx.clone();
    loop {
        let deadline = app.next_deadline();
        tokio::select! {
            event = events.recv() => match event {
                Ok(event) => {
                    app.handle_event(event);
                    app.on_tick();
                    log_summary(&app);
                }
                Err(_) => break,
            },
            _ = wait_until(deadline) => app.on_tick(),
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                break;
            }
        }
    }

    Ok(())
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}

fn log_summary(app: &App) {
    let state = app.state.read();
    info!(
        screen = state.current_screen.title(),
        mode = state.mode.title(),
        catalog = state.catalog.products.len(),
        has_more = state.catalog.has_more,
        favorites = app.favorites().favorite_ids().len(),
        "state updated"
    );
}
