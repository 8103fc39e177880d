use chrono::{DateTime, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PackingItem {
    pub id: String,
    pub trip_id: String,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub packed: bool,
    pub note: Option<String>,
    pub sort_order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PackingItem {
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            trip_id: row.get("trip_id")?,
            name: row.get("name")?,
            category: row.get("category")?,
            quantity: row.get("quantity")?,
            packed: row.get::<_, i64>("packed")? != 0,
            note: row.get("note")?,
            sort_order: row.get::<_, Option<i64>>("sort_order")?.unwrap_or(0),
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

/// Unpacked-item count for a single category. Only categories with at least
/// one missing item are reported.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryMissing {
    pub category: String,
    pub missing_count: i64,
}

/// Derived readiness of a trip's checklist; never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReadinessStats {
    pub total_count: i64,
    pub packed_count: i64,
    pub missing_count: i64,
    pub percent_packed: i64,
    pub missing_by_category: Vec<CategoryMissing>,
}

impl ReadinessStats {
    pub fn new(total_count: i64, packed_count: i64, missing_by_category: Vec<CategoryMissing>) -> Self {
        Self {
            total_count,
            packed_count,
            missing_count: total_count - packed_count,
            percent_packed: percent_packed(packed_count, total_count),
            missing_by_category,
        }
    }
}

/// Whole-number packed percentage, round half up. An empty checklist is 0%.
pub(crate) fn percent_packed(packed: i64, total: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    ((packed as f64 / total as f64) * 100.0).round() as i64
}
