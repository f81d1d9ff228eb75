//! Pre-persistence checks for submitted restaurant forms.
//!
//! Nothing here fails with an error value: callers branch on the returned
//! boolean and decide how to surface the problem (usually by re-rendering the
//! form with the user's input).

use crate::models::restaurant::RestaurantForm;

/// Schemes accepted as-is for image and map links.
const HTTP_SCHEMES: &[&str] = &["http://", "https://"];

/// Scheme prepended to image links submitted without one.
pub const DEFAULT_IMAGE_SCHEME: &str = "http://";

/// Returns `true` iff `name`, `category` and `location` are all non-empty
/// after trimming. Optional fields are ignored.
pub fn check_required(form: &RestaurantForm) -> bool {
    [&form.name, &form.category, &form.location]
        .iter()
        .all(|value| !value.trim().is_empty())
}

/// Returns `true` iff `value` starts with `http://` or `https://`.
pub fn is_http_url(value: &str) -> bool {
    HTTP_SCHEMES
        .iter()
        .any(|scheme| value.starts_with(scheme))
}

/// Returns `true` iff `value` already starts with a recognized URL scheme.
pub fn check_image_url(value: &str) -> bool {
    is_http_url(value)
}

/// Trim an image reference and prepend [`DEFAULT_IMAGE_SCHEME`] when it has
/// no recognized scheme. Blank input yields `None`.
pub fn normalize_image(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if check_image_url(value) {
        Some(value.to_string())
    } else {
        Some(format!("{DEFAULT_IMAGE_SCHEME}{value}"))
    }
}
