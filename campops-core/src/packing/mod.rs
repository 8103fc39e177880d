pub mod error;
pub mod models;
pub mod store;

pub use error::{PackingError, PackingResult};
pub use models::{CategoryMissing, PackingItem, ReadinessStats};
pub use store::PackingRepository;
