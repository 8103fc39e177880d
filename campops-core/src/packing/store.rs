use chrono::Utc;
use rusqlite::params;
use tracing::info;
use uuid::Uuid;

use crate::storage::StorageEngine;
use crate::templates::TemplateItem;

use super::models::{CategoryMissing, PackingItem, ReadinessStats};
use super::{PackingError, PackingResult};

#[derive(Debug, Clone)]
pub struct PackingRepository {
    engine: StorageEngine,
}

impl PackingRepository {
    pub fn new(engine: StorageEngine) -> Self {
        Self { engine }
    }

    /// Number of items owned by the trip; 0 when the trip has none or does
    /// not exist.
    pub fn count_items(&self, trip_id: &str) -> PackingResult<i64> {
        let conn = self.engine.open()?;
        let count = conn.query_row(
            "SELECT COUNT(*) FROM packing_items WHERE trip_id = ?1",
            [trip_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// All items for the trip. The ordering (category, then sort order, then
    /// name) is what keeps grouped display sections stable.
    pub fn list_items(&self, trip_id: &str) -> PackingResult<Vec<PackingItem>> {
        let conn = self.engine.open()?;
        let mut stmt = conn.prepare(
            "SELECT * FROM packing_items
             WHERE trip_id = ?1
             ORDER BY category ASC, sort_order ASC, name ASC",
        )?;
        let items = stmt
            .query_map([trip_id], |row| PackingItem::from_row(row))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }

    /// Set the packed flag and refresh the updated timestamp. Setting the
    /// same value again is a no-op in effect.
    pub fn set_packed(&self, item_id: &str, packed: bool) -> PackingResult<()> {
        let conn = self.engine.open()?;
        let affected = conn.execute(
            "UPDATE packing_items SET packed = ?2, updated_at = ?3 WHERE id = ?1",
            params![item_id, packed as i64, Utc::now()],
        )?;
        if affected == 0 {
            return Err(PackingError::NotFound {
                item_id: item_id.to_string(),
            });
        }
        Ok(())
    }

    /// Bulk-insert one unpacked item per template definition, all sharing a
    /// single creation timestamp. Runs as one transaction: a failure anywhere
    /// in the batch rolls back every insert and re-raises the error.
    ///
    /// Does not check whether the trip already has items; callers that want
    /// to avoid duplicate sets check `count_items` first.
    pub fn apply_template(&self, trip_id: &str, items: &[TemplateItem]) -> PackingResult<usize> {
        let mut conn = self.engine.open()?;
        let tx = conn.transaction()?;
        let now = Utc::now();
        for item in items {
            tx.execute(
                "INSERT INTO packing_items
                    (id, trip_id, name, category, quantity, packed, note, sort_order, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6, ?7, ?8, ?9)",
                params![
                    format!("item-{}", Uuid::new_v4().simple()),
                    trip_id,
                    &item.name,
                    &item.category,
                    item.quantity.unwrap_or(1),
                    &item.note,
                    item.sort_order.unwrap_or(0),
                    now,
                    now,
                ],
            )?;
        }
        tx.commit()?;
        info!(target: "packing", trip_id, items = items.len(), "template applied");
        Ok(items.len())
    }

    /// Readiness of the trip's checklist: counts, packed percentage, and
    /// unpacked items grouped by category. Read-only projection, consistent
    /// with `list_items` and `count_items` at the same point in time.
    pub fn readiness(&self, trip_id: &str) -> PackingResult<ReadinessStats> {
        let conn = self.engine.open()?;
        let (total, packed): (i64, i64) = conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(packed), 0) FROM packing_items WHERE trip_id = ?1",
            [trip_id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        let mut stmt = conn.prepare(
            "SELECT category, COUNT(*) FROM packing_items
             WHERE trip_id = ?1 AND packed = 0
             GROUP BY category
             ORDER BY category ASC",
        )?;
        let missing_by_category = stmt
            .query_map([trip_id], |row| {
                Ok(CategoryMissing {
                    category: row.get(0)?,
                    missing_count: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ReadinessStats::new(total, packed, missing_by_category))
    }
}
