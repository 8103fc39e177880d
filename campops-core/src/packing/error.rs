use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum PackingError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("packing item {item_id} not found")]
    NotFound { item_id: String },
}

pub type PackingResult<T> = std::result::Result<T, PackingError>;
