//! Field checks shared by the HTTP DTOs and the service layer.

use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

use crate::error::AppError;

/// Matches `#RGB` or `#RRGGBB` hex colors.
pub static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// Rejects an empty required field.
///
/// Only the empty string fails; whitespace-only values are accepted.
///
/// # Errors
///
/// Returns [`AppError::Validation`] naming the field.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::bad_request(
            format!("{field} must not be empty"),
            json!({ "field": field }),
        ));
    }
    Ok(())
}

/// Rejects a color that is not a `#RGB` / `#RRGGBB` hex string.
pub fn require_hex_color(color: &str) -> Result<(), AppError> {
    if !HEX_COLOR.is_match(color) {
        return Err(AppError::bad_request(
            "color must be a hex color like #3B82F6",
            json!({ "field": "color", "provided": color }),
        ));
    }
    Ok(())
}
