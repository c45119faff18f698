//! # Favorite Store
//!
//! App-wide favorites for this installation, constructed once at startup and
//! shared by every screen.
//!
//! Toggles are optimistic: the displayed state flips immediately and exactly
//! one add/remove request is sent. Each toggle carries a sequence number so
//! responses can be reconciled in any order:
//!
//! - the latest toggle succeeds: the optimistic state stands
//! - the latest toggle fails: the display reverts to the last state the
//!   server confirmed
//! - a superseded toggle resolves: its result only updates the confirmed
//!   state, and is discarded for display while newer toggles are in flight
//!
//! Once no request is outstanding for a product, its displayed state equals
//! the state from the highest-numbered successful toggle.
//!
//! Remote reads (`refresh`, `check`) take a watermark of the sequence counter
//! before the request goes out. Their answer is ignored for any product
//! toggled after that watermark or still in flight.
//!
//! Row keys from the reels feed (`id_loop3_7`) are accepted everywhere and
//! stripped before use.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use shared::dto::Product;

use crate::core::error::Result;
use crate::core::service::ApiService;
use crate::feed::keys::strip_loop_suffix;
use crate::services::storage::DeviceIdentity;

#[derive(Debug, Clone, Copy, Default)]
struct FavoriteEntry {
    /// What the UI shows
    favorited: bool,
    /// Last state the server acknowledged
    confirmed: bool,
    confirmed_seq: u64,
    latest_seq: u64,
    outstanding: u32,
}

impl FavoriteEntry {
    fn accepts_remote(&self, watermark: u64) -> bool {
        self.outstanding == 0 && self.latest_seq <= watermark
    }
}

#[derive(Debug, Default)]
struct FavoriteSet {
    entries: HashMap<String, FavoriteEntry>,
    next_seq: u64,
}

/// An optimistic toggle waiting for its network result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingToggle {
    pub product_id: String,
    /// State requested from the server
    pub favorited: bool,
    pub seq: u64,
}

/// How a finished toggle request affected the displayed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleResolution {
    /// Latest toggle acknowledged; optimistic state stands.
    Confirmed,
    /// Display reset to the server-confirmed state.
    Reverted { favorited: bool },
    /// Superseded by a newer toggle; display untouched.
    Stale,
}

pub struct FavoriteStore {
    api: Arc<dyn ApiService>,
    device: DeviceIdentity,
    set: RwLock<FavoriteSet>,
}

impl FavoriteStore {
    pub fn new(api: Arc<dyn ApiService>, device: DeviceIdentity) -> Self {
        Self {
            api,
            device,
            set: RwLock::new(FavoriteSet::default()),
        }
    }

    pub fn device(&self) -> &DeviceIdentity {
        &self.device
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.set
            .read()
            .entries
            .get(strip_loop_suffix(id))
            .map(|e| e.favorited)
            .unwrap_or(false)
    }

    /// Ids currently shown as favorited, sorted.
    pub fn favorite_ids(&self) -> Vec<String> {
        let set = self.set.read();
        let mut ids: Vec<String> = set
            .entries
            .iter()
            .filter(|(_, e)| e.favorited)
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }

    /// Whether a toggle for `id` is still waiting on the network.
    pub fn is_in_flight(&self, id: &str) -> bool {
        self.set
            .read()
            .entries
            .get(strip_loop_suffix(id))
            .map(|e| e.outstanding > 0)
            .unwrap_or(false)
    }

    /// Flip the displayed state and return the request to send.
    pub fn begin_toggle(&self, id: &str) -> PendingToggle {
        let product_id = strip_loop_suffix(id).to_string();
        let mut set = self.set.write();
        set.next_seq += 1;
        let seq = set.next_seq;

        let entry = set.entries.entry(product_id.clone()).or_default();
        entry.favorited = !entry.favorited;
        entry.latest_seq = seq;
        entry.outstanding += 1;

        tracing::debug!(
            product_id = %product_id,
            favorited = entry.favorited,
            seq,
            "optimistic favorite toggle"
        );

        PendingToggle {
            product_id,
            favorited: entry.favorited,
            seq,
        }
    }

    /// Send the add/remove request for a pending toggle.
    pub async fn send(&self, pending: &PendingToggle) -> Result<()> {
        let device_id = self.device.as_str();
        if pending.favorited {
            self.api.add_favorite(device_id, &pending.product_id).await
        } else {
            self.api.remove_favorite(device_id, &pending.product_id).await
        }
    }

    /// Reconcile a finished toggle request.
    pub fn complete_toggle(
        &self,
        pending: &PendingToggle,
        result: &std::result::Result<(), String>,
    ) -> ToggleResolution {
        let mut set = self.set.write();
        let Some(entry) = set.entries.get_mut(&pending.product_id) else {
            return ToggleResolution::Stale;
        };

        let before = entry.favorited;
        entry.outstanding = entry.outstanding.saturating_sub(1);

        let succeeded = result.is_ok();
        if succeeded && pending.seq > entry.confirmed_seq {
            entry.confirmed = pending.favorited;
            entry.confirmed_seq = pending.seq;
        }

        let latest = pending.seq == entry.latest_seq;
        if (latest && !succeeded) || entry.outstanding == 0 {
            entry.favorited = entry.confirmed;
        }

        if let Err(e) = result {
            tracing::warn!(
                product_id = %pending.product_id,
                seq = pending.seq,
                latest,
                error = %e,
                "favorite toggle failed"
            );
        }

        match (latest, succeeded) {
            (true, true) => ToggleResolution::Confirmed,
            (true, false) => ToggleResolution::Reverted {
                favorited: entry.favorited,
            },
            (false, _) if entry.favorited != before => ToggleResolution::Reverted {
                favorited: entry.favorited,
            },
            (false, _) => ToggleResolution::Stale,
        }
    }

    /// Optimistic toggle, network call and reconciliation in one step.
    ///
    /// Returns the state requested by this toggle; on failure the display
    /// has already been reverted.
    pub async fn toggle(&self, id: &str) -> Result<bool> {
        let pending = self.begin_toggle(id);
        let result = self.send(&pending).await;
        let reported = result.as_ref().map(|_| ()).map_err(|e| e.to_string());
        self.complete_toggle(&pending, &reported);
        result.map(|_| pending.favorited)
    }

    /// Current sequence counter; take it before issuing a remote read.
    pub fn watermark(&self) -> u64 {
        self.set.read().next_seq
    }

    /// Replace the set with a favorites list requested at `watermark`.
    ///
    /// Products toggled since then keep their local state.
    pub fn apply_remote_list(&self, products: &[Product], watermark: u64) {
        let mut set = self.set.write();
        let remote: std::collections::HashSet<&str> =
            products.iter().map(|p| p.id.as_str()).collect();

        set.entries
            .retain(|id, e| !e.accepts_remote(watermark) || remote.contains(id.as_str()));
        for id in remote {
            let entry = set.entries.entry(id.to_string()).or_default();
            if entry.accepts_remote(watermark) {
                entry.favorited = true;
                entry.confirmed = true;
            }
        }
    }

    /// Apply a single-product status check requested at `watermark`.
    pub fn apply_remote_status(&self, id: &str, favorited: bool, watermark: u64) {
        let product_id = strip_loop_suffix(id);
        let mut set = self.set.write();
        let entry = set.entries.entry(product_id.to_string()).or_default();
        if entry.accepts_remote(watermark) {
            entry.favorited = favorited;
            entry.confirmed = favorited;
        } else {
            tracing::debug!(product_id, watermark, "ignoring stale favorite status");
        }
    }

    /// Fetch the favorites list and replace the local set.
    pub async fn refresh(&self) -> Result<Vec<Product>> {
        let watermark = self.watermark();
        let products = self.api.list_favorites(self.device.as_str()).await?;
        self.apply_remote_list(&products, watermark);
        Ok(products)
    }

    /// Check one product against the server.
    ///
    /// Returns the server's answer, which may differ from [`is_favorite`]
    /// when a newer toggle won.
    ///
    /// [`is_favorite`]: Self::is_favorite
    pub async fn check(&self, id: &str) -> Result<bool> {
        let product_id = strip_loop_suffix(id);
        let watermark = self.watermark();
        let favorited = self
            .api
            .check_favorite(self.device.as_str(), product_id)
            .await?;
        self.apply_remote_status(product_id, favorited, watermark);
        Ok(favorited)
    }
}

impl std::fmt::Debug for FavoriteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoriteStore")
            .field("device", &self.device)
            .field("favorites", &self.favorite_ids())
            .finish()
    }
}
