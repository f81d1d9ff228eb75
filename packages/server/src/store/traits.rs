use async_trait::async_trait;
use uuid::Uuid;

use super::Restaurant;
use super::error::StoreError;
use crate::models::restaurant::RestaurantFields;

/// Persistence boundary for restaurant records.
///
/// There is no concurrency control: two updates to the same id race and the
/// last write wins.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Every stored record, oldest first.
    async fn list_all(&self) -> Result<Vec<Restaurant>, StoreError>;

    /// Fetch one record, or [`StoreError::NotFound`].
    async fn find_by_id(&self, id: Uuid) -> Result<Restaurant, StoreError>;

    /// Assign a fresh id and persist `fields`.
    async fn create(&self, fields: RestaurantFields) -> Result<Restaurant, StoreError>;

    /// Overwrite every field of an existing record with `fields`.
    async fn update(&self, id: Uuid, fields: RestaurantFields)
    -> Result<Restaurant, StoreError>;

    /// Permanently remove a record.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}
