use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum TripError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("trip {trip_id} not found")]
    NotFound { trip_id: String },
    #[error("unknown trip type: {0}")]
    InvalidTripType(String),
    #[error("trip name must not be empty")]
    EmptyName,
    #[error("group size must be at least 1, got {0}")]
    InvalidGroupSize(i64),
}

pub type TripResult<T> = std::result::Result<T, TripError>;
