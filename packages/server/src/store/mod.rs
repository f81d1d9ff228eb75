mod error;
mod sql;
mod traits;

pub use crate::entity::restaurant::Model as Restaurant;
pub use error::StoreError;
pub use sql::SqlStore;
pub use traits::RecordStore;
