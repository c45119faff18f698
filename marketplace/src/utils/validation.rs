/// Validation utilities for the listing and profile forms
use lib_utils::validation as fields;
use shared::dto::SellerProfile;

use crate::core::error::AppError;

pub const MAX_TITLE_CHARS: usize = 80;
pub const MAX_LISTING_IMAGES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into an [`AppError::Validation`] for the alert path.
    pub fn into_result(self) -> Result<(), AppError> {
        match self.error {
            Some(message) if !self.is_valid => Err(AppError::Validation(message)),
            _ => Ok(()),
        }
    }

    fn and_then(self, next: impl FnOnce() -> ValidationResult) -> ValidationResult {
        if self.is_valid {
            next()
        } else {
            self
        }
    }
}

impl From<Result<(), String>> for ValidationResult {
    fn from(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(message) => Self::err(message),
        }
    }
}

/// Validate a listing title
pub fn validate_title(title: &str) -> ValidationResult {
    if title.trim().is_empty() {
        return ValidationResult::err("Please enter a title");
    }

    if title.trim().chars().count() > MAX_TITLE_CHARS {
        return ValidationResult::err(format!(
            "Title must be at most {} characters",
            MAX_TITLE_CHARS
        ));
    }

    ValidationResult::ok()
}

/// Validate a user-entered price
pub fn validate_price(price: &str) -> ValidationResult {
    fields::parse_price(price).map(|_| ()).into()
}

/// Validate the number of attached images
pub fn validate_images(count: usize) -> ValidationResult {
    if count == 0 {
        return ValidationResult::err("Please add at least one image");
    }

    if count > MAX_LISTING_IMAGES {
        return ValidationResult::err(format!(
            "You can add at most {} images",
            MAX_LISTING_IMAGES
        ));
    }

    ValidationResult::ok()
}

/// A listing can only be posted once the seller profile has a name
pub fn validate_seller(profile: Option<&SellerProfile>) -> ValidationResult {
    match profile {
        Some(profile) if profile.is_complete() => ValidationResult::ok(),
        _ => ValidationResult::err("Please complete your profile before selling"),
    }
}

/// Validate the profile form. Only the name is required; optional fields
/// are checked when present.
pub fn validate_profile(profile: &SellerProfile) -> ValidationResult {
    ValidationResult::from(fields::validate_not_empty(&profile.name, "Name"))
        .and_then(|| match profile.email.as_deref().map(str::trim) {
            Some(email) if !email.is_empty() => fields::validate_email(email).into(),
            _ => ValidationResult::ok(),
        })
        .and_then(|| match profile.contact_number.as_deref().map(str::trim) {
            Some(phone) if !phone.is_empty() => fields::validate_phone(phone).into(),
            _ => ValidationResult::ok(),
        })
}
