use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// Errors returned by [`RecordStore`](super::RecordStore) operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("restaurant not found: {0}")]
    NotFound(Uuid),

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}
