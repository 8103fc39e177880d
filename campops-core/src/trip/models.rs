use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::TripError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripType {
    CarCamping,
    Backpacking,
}

impl TripType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripType::CarCamping => "car_camping",
            TripType::Backpacking => "backpacking",
        }
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TripType {
    type Err = TripError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "car_camping" => Ok(TripType::CarCamping),
            "backpacking" => Ok(TripType::Backpacking),
            other => Err(TripError::InvalidTripType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub trip_type: TripType,
    pub group_size: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Trip {
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let trip_type: String = row.get("trip_type")?;
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            start_date: row.get("start_date")?,
            end_date: row.get("end_date")?,
            trip_type: trip_type.parse().map_err(|_| {
                rusqlite::Error::InvalidColumnType(
                    0,
                    "trip_type".to_string(),
                    rusqlite::types::Type::Text,
                )
            })?,
            group_size: row.get("group_size")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

/// Input for creating a trip. Ids and timestamps are stamped by the
/// repository.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTrip {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub trip_type: TripType,
    pub group_size: i64,
}

/// Partial update; `None` fields keep their stored value. `id` and
/// `created_at` are never touched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TripUpdate {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub trip_type: Option<TripType>,
    pub group_size: Option<i64>,
}
