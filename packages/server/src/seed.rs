use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::restaurant::RestaurantForm;
use crate::store::{RecordStore, StoreError};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid seed file: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Top-level layout of a seed file: `{ "results": [ ... ] }`.
#[derive(Deserialize)]
struct SeedFile {
    results: Vec<SeedRestaurant>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct SeedRestaurant {
    name: String,
    name_en: String,
    category: String,
    image: String,
    location: String,
    phone: String,
    google_map: String,
    /// Either a JSON number or a string.
    rating: Option<Value>,
    description: String,
}

impl From<SeedRestaurant> for RestaurantForm {
    fn from(s: SeedRestaurant) -> Self {
        let rating = match s.rating {
            Some(Value::String(text)) => text,
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        Self {
            name: s.name,
            name_en: s.name_en,
            category: s.category,
            image: s.image,
            location: s.location,
            phone: s.phone,
            google_map: s.google_map,
            rating,
            description: s.description,
        }
    }
}

/// Parse seed JSON into form values, in file order.
pub fn parse_seed(json: &str) -> Result<Vec<RestaurantForm>, serde_json::Error> {
    let file: SeedFile = serde_json::from_str(json)?;
    Ok(file.results.into_iter().map(RestaurantForm::from).collect())
}

/// Create a record for every valid entry. Entries missing a required field
/// are skipped. Returns the number of records created.
pub async fn seed_restaurants(
    store: &dyn RecordStore,
    forms: Vec<RestaurantForm>,
) -> Result<usize, StoreError> {
    let mut inserted = 0;
    for (index, form) in forms.into_iter().enumerate() {
        match form.validate() {
            Some(fields) => {
                store.create(fields).await?;
                inserted += 1;
            }
            None => warn!(index, name = %form.name, "Skipping seed entry with missing required fields"),
        }
    }
    Ok(inserted)
}

/// Load `path` into the store, but only when the store holds no records.
pub async fn seed_if_empty(store: &dyn RecordStore, path: &Path) -> Result<usize, SeedError> {
    if !store.list_all().await?.is_empty() {
        info!("Store already has restaurants, skipping seed");
        return Ok(0);
    }

    let json = tokio::fs::read_to_string(path).await?;
    let forms = parse_seed(&json)?;
    Ok(seed_restaurants(store, forms).await?)
}
