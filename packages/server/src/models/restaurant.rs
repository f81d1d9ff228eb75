use serde::Deserialize;

use crate::store::Restaurant;
use crate::validator::{check_required, normalize_image};

/// Form body posted by the create and edit pages.
///
/// Every field defaults to an empty string so a missing input behaves like a
/// blank one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RestaurantForm {
    pub name: String,
    pub name_en: String,
    pub category: String,
    pub image: String,
    pub location: String,
    pub phone: String,
    pub google_map: String,
    pub rating: String,
    pub description: String,
}

impl RestaurantForm {
    /// Check required fields and normalize the rest.
    ///
    /// Returns `None` when any required field is blank; the form itself is
    /// left untouched so it can be rendered back to the user.
    pub fn validate(&self) -> Option<RestaurantFields> {
        if !check_required(self) {
            return None;
        }
        Some(RestaurantFields {
            name: self.name.trim().to_string(),
            name_en: optional(&self.name_en),
            category: self.category.trim().to_string(),
            image: normalize_image(&self.image),
            location: self.location.trim().to_string(),
            phone: optional(&self.phone),
            google_map: optional(&self.google_map),
            rating: optional(&self.rating),
            description: optional(&self.description),
        })
    }
}

impl From<&Restaurant> for RestaurantForm {
    fn from(r: &Restaurant) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            name: r.name.clone(),
            name_en: text(&r.name_en),
            category: r.category.clone(),
            image: text(&r.image),
            location: r.location.clone(),
            phone: text(&r.phone),
            google_map: text(&r.google_map),
            rating: text(&r.rating),
            description: text(&r.description),
        }
    }
}

/// Validated field set written by `create` and `update`.
///
/// Updates replace every field with these values; nothing is merged from the
/// stored record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantFields {
    pub name: String,
    pub name_en: Option<String>,
    pub category: String,
    pub image: Option<String>,
    pub location: String,
    pub phone: Option<String>,
    pub google_map: Option<String>,
    pub rating: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub keyword: String,
}

/// Trimmed text, or `None` when blank.
pub fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Keep the restaurants whose name contains `keyword`, ignoring case.
///
/// The keyword is matched as given; surrounding whitespace is significant.
pub fn filter_by_name(restaurants: Vec<Restaurant>, keyword: &str) -> Vec<Restaurant> {
    let needle = keyword.to_lowercase();
    restaurants
        .into_iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .collect()
}
