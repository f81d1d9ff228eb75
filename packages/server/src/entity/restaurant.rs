use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restaurant")]
pub struct Model {
    /// UUIDv7 primary key, assigned by the store on create.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,
    pub name_en: Option<String>,
    pub category: String,

    /// Absolute `http://` or `https://` URL.
    pub image: Option<String>,

    pub location: String,
    pub phone: Option<String>,

    /// Map link or embed string.
    #[sea_orm(column_type = "Text", nullable)]
    pub google_map: Option<String>,

    pub rating: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
