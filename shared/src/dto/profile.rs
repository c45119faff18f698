//! # Seller Profile
//!
//! Profile stored locally on the device and attached to every created listing.

use serde::{Deserialize, Serialize};

/// Seller contact details shown on a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// UPI payment handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upi_id: Option<String>,
    /// Hosted payment QR code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_image_url: Option<String>,
}

impl SellerProfile {
    /// Profile carrying only a display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// A profile with a blank name is treated as not set up.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_omits_empty_optionals() {
        let json = serde_json::to_string(&SellerProfile::named("Asha")).unwrap();
        assert_eq!(json, r#"{"name":"Asha"}"#);
    }

    #[test]
    fn test_profile_completeness() {
        assert!(SellerProfile::named("Asha").is_complete());
        assert!(!SellerProfile::named("   ").is_complete());
        assert!(!SellerProfile::default().is_complete());
    }
}
