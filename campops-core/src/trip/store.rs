use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use tracing::info;
use uuid::Uuid;

use crate::storage::StorageEngine;

use super::models::{NewTrip, Trip, TripUpdate};
use super::{TripError, TripResult};

#[derive(Debug, Clone)]
pub struct TripRepository {
    engine: StorageEngine,
}

impl TripRepository {
    pub fn new(engine: StorageEngine) -> Self {
        Self { engine }
    }

    /// All trips, most recently updated first. Personal-use trip counts stay
    /// small, so no pagination.
    pub fn list(&self) -> TripResult<Vec<Trip>> {
        let conn = self.engine.open()?;
        let mut stmt = conn.prepare("SELECT * FROM trips ORDER BY updated_at DESC")?;
        let trips = stmt
            .query_map([], |row| Trip::from_row(row))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(trips)
    }

    pub fn fetch_by_id(&self, trip_id: &str) -> TripResult<Option<Trip>> {
        let conn = self.engine.open()?;
        let mut stmt = conn.prepare("SELECT * FROM trips WHERE id = ?1")?;
        let trip = stmt
            .query_row([trip_id], |row| Trip::from_row(row))
            .optional()?;
        Ok(trip)
    }

    /// Persist a new trip and return its generated id. Created and updated
    /// timestamps are stamped identically.
    pub fn create(&self, input: &NewTrip) -> TripResult<String> {
        if input.name.trim().is_empty() {
            return Err(TripError::EmptyName);
        }
        if input.group_size < 1 {
            return Err(TripError::InvalidGroupSize(input.group_size));
        }

        let conn = self.engine.open()?;
        let id = format!("trip-{}", Uuid::new_v4().simple());
        let now = Utc::now();
        conn.execute(
            "INSERT INTO trips (id, name, start_date, end_date, trip_type, group_size, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                &id,
                &input.name,
                input.start_date,
                input.end_date,
                input.trip_type.as_str(),
                input.group_size,
                now,
                now,
            ],
        )?;
        info!(target: "trips", trip_id = %id, "trip created");
        Ok(id)
    }

    /// Apply a partial update. Always refreshes `updated_at`; never alters
    /// the id or `created_at`.
    pub fn update(&self, trip_id: &str, changes: &TripUpdate) -> TripResult<()> {
        if let Some(name) = &changes.name {
            if name.trim().is_empty() {
                return Err(TripError::EmptyName);
            }
        }
        if let Some(group_size) = changes.group_size {
            if group_size < 1 {
                return Err(TripError::InvalidGroupSize(group_size));
            }
        }

        let conn = self.engine.open()?;
        let affected = conn.execute(
            "UPDATE trips SET
                name = COALESCE(?2, name),
                start_date = COALESCE(?3, start_date),
                end_date = COALESCE(?4, end_date),
                trip_type = COALESCE(?5, trip_type),
                group_size = COALESCE(?6, group_size),
                updated_at = ?7
             WHERE id = ?1",
            params![
                trip_id,
                &changes.name,
                changes.start_date,
                changes.end_date,
                changes.trip_type.map(|t| t.as_str()),
                changes.group_size,
                Utc::now(),
            ],
        )?;
        if affected == 0 {
            return Err(TripError::NotFound {
                trip_id: trip_id.to_string(),
            });
        }
        Ok(())
    }

    /// Delete a trip; its packing items go with it via the cascade.
    pub fn delete(&self, trip_id: &str) -> TripResult<()> {
        let conn = self.engine.open()?;
        let affected = conn.execute("DELETE FROM trips WHERE id = ?1", [trip_id])?;
        if affected == 0 {
            return Err(TripError::NotFound {
                trip_id: trip_id.to_string(),
            });
        }
        info!(target: "trips", trip_id, "trip deleted");
        Ok(())
    }
}
