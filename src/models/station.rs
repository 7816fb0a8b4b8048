use std::io::Write;

use diesel::deserialize::{self, FromSql};
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::serialize::{self, Output, ToSql};
use diesel::sql_types::Text;
use diesel::{AsExpression, FromSqlRow};
use jiff_diesel::DateTime;
use serde::{Deserialize, Serialize};

/// Operational status of a charging station, stored as lowercase text.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
    AsExpression,
    FromSqlRow,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum StationStatus {
    #[default]
    Online,
    Offline,
    Maintenance,
}

impl StationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StationStatus::Online => "online",
            StationStatus::Offline => "offline",
            StationStatus::Maintenance => "maintenance",
        }
    }

    /// Case-insensitive match against the three known values.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "online" => Some(StationStatus::Online),
            "offline" => Some(StationStatus::Offline),
            "maintenance" => Some(StationStatus::Maintenance),
            _ => None,
        }
    }

    /// Missing or unrecognized input is stored as `online`.
    pub fn coerce(raw: Option<&str>) -> Self {
        raw.and_then(Self::parse).unwrap_or_default()
    }
}

impl diesel::query_builder::QueryId for StationStatus {
    type QueryId = StationStatus;
    const HAS_STATIC_QUERY_ID: bool = false;
}

impl ToSql<Text, Pg> for StationStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(serialize::IsNull::No)
    }
}

impl FromSql<Text, Pg> for StationStatus {
    fn from_sql(bytes: <Pg as diesel::backend::Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        Self::parse(&s).ok_or_else(|| format!("Unrecognized station status: {}", s).into())
    }
}

#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::stations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Station {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub available_slots: i32,
    pub total_slots: i32,
    pub power: Option<String>,
    pub price: Option<String>,
    pub rating: Option<f64>,
    pub amenities: Option<String>,
    pub status: StationStatus,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// Every writable station column. Used as-is for INSERT and as a full
/// overwrite for UPDATE, so `None` clears the column.
#[derive(Debug, Insertable, AsChangeset, Clone)]
#[diesel(table_name = crate::schema::stations)]
#[diesel(treat_none_as_null = true)]
pub struct StationFields {
    pub name: String,
    pub address: String,
    pub available_slots: i32,
    pub total_slots: i32,
    pub power: Option<String>,
    pub price: Option<String>,
    pub rating: Option<f64>,
    pub amenities: Option<String>,
    pub status: StationStatus,
}
