pub mod error;
pub mod models;
pub mod store;

pub use error::{TripError, TripResult};
pub use models::{NewTrip, Trip, TripType, TripUpdate};
pub use store::TripRepository;
