//! Form guards
//!
//! Checks run before any request leaves the client.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{CatalogError, CatalogResult, ValidationError};
use crate::session::SessionStore;

// Accepts any number of integer digits and up to two decimals; magnitude is not bounded.
static PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d{1,2})?$").expect("price pattern is valid"));

/// Minimum catalog title length, in characters
pub const MIN_TITLE_CHARS: usize = 2;

pub fn is_valid_price(value: &str) -> bool {
    PRICE.is_match(value.trim())
}

pub fn require_token(session: &dyn SessionStore) -> CatalogResult<String> {
    session.token().ok_or(CatalogError::Unauthenticated)
}

pub fn require_catalog_id(catalog_id: Option<&str>) -> CatalogResult<String> {
    catalog_id
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or_else(|| CatalogError::NotFound("catalog".to_string()))
}

/// Trimmed value, or `missing` when nothing is left
pub fn require_non_empty(value: &str, missing: ValidationError) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(missing);
    }
    Ok(trimmed.to_string())
}

pub fn require_valid_price(value: &str) -> Result<String, ValidationError> {
    let trimmed = require_non_empty(value, ValidationError::MissingPrice)?;
    if !is_valid_price(&trimmed) {
        return Err(ValidationError::InvalidPrice);
    }
    Ok(trimmed)
}

pub fn require_title(value: &str) -> Result<String, ValidationError> {
    let trimmed = require_non_empty(value, ValidationError::MissingTitle)?;
    if trimmed.chars().count() < MIN_TITLE_CHARS {
        return Err(ValidationError::TitleTooShort);
    }
    Ok(trimmed)
}

/// Only `image/*` uploads are accepted
pub fn require_image_type(mime: &str) -> Result<(), ValidationError> {
    if mime.starts_with("image/") {
        Ok(())
    } else {
        Err(ValidationError::InvalidImageType)
    }
}

/// Trim; an empty description means "no description"
pub fn normalize_optional_description(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
