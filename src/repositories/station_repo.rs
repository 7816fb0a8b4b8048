use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Station, StationFields};

#[derive(Clone)]
pub struct StationRepository {
    pool: AsyncDbPool,
}

impl StationRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// All stations ordered by id. No filtering or paging.
    pub async fn list_all(&self) -> Result<Vec<Station>, AppError> {
        use crate::schema::stations::dsl::*;
        let mut conn = self.pool.get().await?;

        stations
            .order(id.asc())
            .select(Station::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn create(&self, fields: StationFields) -> Result<Station, AppError> {
        use crate::schema::stations::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(stations)
            .values(&fields)
            .returning(Station::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Full overwrite; `None` when no station has this id.
    pub async fn update(
        &self,
        station_id: i32,
        fields: StationFields,
    ) -> Result<Option<Station>, AppError> {
        use crate::schema::stations::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(stations.filter(id.eq(station_id)))
            .set((&fields, updated_at.eq(utc_now())))
            .returning(Station::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Number of rows removed (0 or 1).
    pub async fn delete(&self, station_id: i32) -> Result<usize, AppError> {
        use crate::schema::stations::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(stations.filter(id.eq(station_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}

/// Wall-clock UTC, matching the column defaults regardless of the session zone.
fn utc_now() -> diesel::expression::SqlLiteral<diesel::sql_types::Timestamp> {
    diesel::dsl::sql::<diesel::sql_types::Timestamp>("(NOW() AT TIME ZONE 'utc')")
}
