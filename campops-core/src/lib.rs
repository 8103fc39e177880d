pub mod config;
pub mod error;
pub mod packing;
pub mod sqlite;
pub mod storage;
pub mod templates;
pub mod trip;

pub use config::{load_campops_config, CampopsConfig, PathsSection, SystemSection};
pub use error::{ConfigError, Result};
pub use packing::{
    CategoryMissing, PackingError, PackingItem, PackingRepository, PackingResult, ReadinessStats,
};
pub use storage::{StorageEngine, StorageEngineBuilder, StorageError, StorageResult};
pub use templates::{builtin_templates, template_for_trip_type, PackingTemplate, TemplateItem};
pub use trip::{NewTrip, Trip, TripError, TripRepository, TripResult, TripType, TripUpdate};
