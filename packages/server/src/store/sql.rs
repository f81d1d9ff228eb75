use async_trait::async_trait;
use sea_orm::*;
use tracing::instrument;
use uuid::Uuid;

use super::Restaurant;
use super::error::StoreError;
use super::traits::RecordStore;
use crate::entity::restaurant;
use crate::models::restaurant::RestaurantFields;

/// [`RecordStore`] backed by a sea-orm connection pool.
#[derive(Clone)]
pub struct SqlStore {
    db: DatabaseConnection,
}

impl SqlStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn assign(active: &mut restaurant::ActiveModel, fields: RestaurantFields) {
    active.name = Set(fields.name);
    active.name_en = Set(fields.name_en);
    active.category = Set(fields.category);
    active.image = Set(fields.image);
    active.location = Set(fields.location);
    active.phone = Set(fields.phone);
    active.google_map = Set(fields.google_map);
    active.rating = Set(fields.rating);
    active.description = Set(fields.description);
}

#[async_trait]
impl RecordStore for SqlStore {
    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Restaurant>, StoreError> {
        let list = restaurant::Entity::find()
            .order_by_asc(restaurant::Column::CreatedAt)
            .order_by_asc(restaurant::Column::Id)
            .all(&self.db)
            .await?;
        Ok(list)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> Result<Restaurant, StoreError> {
        restaurant::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    #[instrument(skip(self, fields), fields(name = %fields.name))]
    async fn create(&self, fields: RestaurantFields) -> Result<Restaurant, StoreError> {
        let now = chrono::Utc::now();
        let mut active = restaurant::ActiveModel {
            id: Set(Uuid::now_v7()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        assign(&mut active, fields);

        let model = active.insert(&self.db).await?;
        tracing::info!(id = %model.id, "restaurant created");
        Ok(model)
    }

    #[instrument(skip(self, fields))]
    async fn update(
        &self,
        id: Uuid,
        fields: RestaurantFields,
    ) -> Result<Restaurant, StoreError> {
        let existing = self.find_by_id(id).await?;
        let mut active: restaurant::ActiveModel = existing.into();
        assign(&mut active, fields);
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await?;
        tracing::info!(%id, "restaurant updated");
        Ok(model)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let result = restaurant::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(id));
        }
        tracing::info!(%id, "restaurant deleted");
        Ok(())
    }
}
