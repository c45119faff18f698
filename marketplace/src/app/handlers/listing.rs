//! # Listing Handlers
//!
//! Sell form (image picking, validation, submit) and deletion of this
//! device's listings.

use std::sync::Arc;

use lib_utils::{image_data_uri, parse_price};
use parking_lot::RwLock;
use shared::dto::{CreateProductRequest, Product, SellerProfile};

use crate::app::state::{Alert, AppState, CatalogMode, ListingDraft, Screen};
use crate::app::tasks;
use crate::app::AppContext;
use crate::core::error::{AppError, Result};
use crate::services::storage::DeviceIdentity;
use crate::utils::validation::{
    validate_images, validate_price, validate_seller, validate_title, MAX_LISTING_IMAGES,
};

/// Where an image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Camera,
    Gallery,
}

impl ImageSource {
    fn permission_message(&self) -> &'static str {
        match self {
            ImageSource::Camera => "Camera access is needed to take photos",
            ImageSource::Gallery => "Photo library access is needed to choose images",
        }
    }
}

/// Result of asking the platform for an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePick {
    Picked(Vec<u8>),
    Cancelled,
    PermissionDenied,
}

/// Attach a picked image to the draft, or alert on a denied permission.
pub(crate) fn handle_image_picked(state: &Arc<RwLock<AppState>>, source: ImageSource, pick: ImagePick) {
    let mut state = state.write();
    match pick {
        ImagePick::Picked(bytes) => {
            if state.listing.images.len() >= MAX_LISTING_IMAGES {
                state.alert = Some(Alert::new(
                    "Too Many Images",
                    format!("You can add at most {} images", MAX_LISTING_IMAGES),
                ));
                return;
            }
            state.listing.images.push(bytes);
        }
        ImagePick::Cancelled => {}
        ImagePick::PermissionDenied => {
            tracing::warn!(?source, "image permission denied");
            let err = AppError::Permission(source.permission_message().to_string());
            state.alert = Some(Alert::from(&err));
        }
    }
}

pub(crate) fn handle_remove_image(state: &Arc<RwLock<AppState>>, index: usize) {
    let mut state = state.write();
    if index < state.listing.images.len() {
        state.listing.images.remove(index);
    }
}

/// Validate a draft and turn it into the create request.
///
/// Images are encoded as data URIs; the hidden-catalog flag follows the
/// current mode.
pub fn build_listing_request(
    draft: &ListingDraft,
    profile: Option<&SellerProfile>,
    device: &DeviceIdentity,
    mode: CatalogMode,
) -> Result<CreateProductRequest> {
    validate_title(&draft.title).into_result()?;
    validate_price(&draft.price).into_result()?;
    validate_images(draft.images.len()).into_result()?;
    validate_seller(profile).into_result()?;

    let price = parse_price(&draft.price).map_err(AppError::Validation)?;
    let seller = profile.cloned().unwrap_or_default();
    let category = draft
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string);

    Ok(CreateProductRequest {
        title: draft.title.trim().to_string(),
        description: draft.description.trim().to_string(),
        price,
        category,
        images: draft.images.iter().map(|bytes| image_data_uri(bytes)).collect(),
        device_id: device.as_str().to_string(),
        seller,
        is_upside_down: mode.is_upside_down(),
    })
}

/// Submit the sell form. Validation failures alert without touching the
/// network.
pub(crate) fn handle_listing_submit(state: &Arc<RwLock<AppState>>, ctx: &AppContext) {
    let request = {
        let mut state = state.write();
        if state.submitting_listing {
            return;
        }

        match build_listing_request(
            &state.listing,
            state.profile.as_ref(),
            ctx.favorites.device(),
            state.mode,
        ) {
            Ok(request) => {
                state.submitting_listing = true;
                request
            }
            Err(e) => {
                tracing::info!(error = %e, "listing rejected");
                state.alert = Some(Alert::from(&e));
                return;
            }
        }
    };

    tasks::products::create_listing(ctx, request);
}

pub(crate) fn handle_listing_created(
    state: &Arc<RwLock<AppState>>,
    ctx: &AppContext,
    result: std::result::Result<Product, String>,
) {
    let created = {
        let mut state = state.write();
        state.submitting_listing = false;
        state.loading_message = None;

        match result {
            Ok(product) => {
                state.listing = ListingDraft::default();
                state.alert = Some(Alert::success("Your listing is live"));
                state.my_listings.insert(0, product);
                true
            }
            Err(e) => {
                state.alert = Some(Alert::from(&AppError::Api(e)));
                false
            }
        }
    };

    if created {
        super::navigation::handle_screen_change(state, ctx, Screen::MyListings);
    }
}

/// Delete one of this device's listings.
pub(crate) fn handle_delete_listing(state: &Arc<RwLock<AppState>>, ctx: &AppContext, product_id: &str) {
    {
        let mut state = state.write();
        if state.deleting.iter().any(|id| id == product_id) {
            return;
        }

        let device_id = ctx.favorites.device().as_str();
        let owned = state
            .find_product(product_id)
            .map(|p| p.is_owned_by(device_id))
            .unwrap_or(false);
        if !owned {
            let err = AppError::Permission("You can only delete your own listings".to_string());
            state.alert = Some(Alert::from(&err));
            return;
        }

        state.deleting.push(product_id.to_string());
    }

    tasks::products::delete_listing(ctx, product_id.to_string());
}

pub(crate) fn handle_listing_deleted(
    state: &Arc<RwLock<AppState>>,
    product_id: String,
    result: std::result::Result<(), String>,
) {
    let mut state = state.write();
    state.deleting.retain(|id| *id != product_id);

    match result {
        Ok(()) => {
            state.my_listings.retain(|p| p.id != product_id);
            state.catalog.products.retain(|p| p.id != product_id);
            state.favorites.retain(|p| p.id != product_id);
            if state.detail.product_id.as_deref() == Some(product_id.as_str()) {
                state.detail.product = None;
            }
        }
        Err(e) => {
            state.alert = Some(Alert::from(&AppError::Api(e)));
        }
    }
}
