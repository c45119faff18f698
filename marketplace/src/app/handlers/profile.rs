//! # Profile Handlers

use std::sync::Arc;

use parking_lot::RwLock;
use shared::dto::SellerProfile;

use crate::app::state::{Alert, AppState};
use crate::app::AppContext;
use crate::core::error::Result;
use crate::utils::validation::validate_profile;

/// Replace the profile form contents.
pub(crate) fn handle_profile_edit(state: &Arc<RwLock<AppState>>, form: SellerProfile) {
    state.write().profile_form = form;
}

/// Validate, persist and apply the profile form.
pub(crate) fn handle_profile_save(state: &Arc<RwLock<AppState>>, ctx: &AppContext) {
    let form = state.read().profile_form.clone();

    match save_profile(ctx, form) {
        Ok(profile) => {
            let mut state = state.write();
            state.profile_form = profile.clone();
            state.profile = Some(profile);
            state.alert = Some(Alert::success("Profile saved"));
            tracing::info!("profile saved");
        }
        Err(e) => {
            tracing::warn!(error = %e, "profile not saved");
            state.write().alert = Some(Alert::from(&e));
        }
    }
}

fn save_profile(ctx: &AppContext, form: SellerProfile) -> Result<SellerProfile> {
    let profile = normalize(form);
    validate_profile(&profile).into_result()?;
    ctx.store.save_profile(&profile)?;
    Ok(profile)
}

/// Trim fields and drop the blank optional ones.
fn normalize(profile: SellerProfile) -> SellerProfile {
    let clean = |value: Option<String>| {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };
    SellerProfile {
        name: profile.name.trim().to_string(),
        email: clean(profile.email),
        contact_number: clean(profile.contact_number),
        address: clean(profile.address),
        upi_id: clean(profile.upi_id),
        qr_image_url: clean(profile.qr_image_url),
    }
}
