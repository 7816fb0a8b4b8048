use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Vehicle, VehicleChanges};

#[derive(Clone)]
pub struct VehicleRepository {
    pool: AsyncDbPool,
}

impl VehicleRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// The user's earliest registered vehicle.
    pub async fn find_by_user_id(&self, owner_id: i32) -> Result<Option<Vehicle>, AppError> {
        use crate::schema::vehicles::dsl::*;
        let mut conn = self.pool.get().await?;

        vehicles
            .filter(user_id.eq(owner_id))
            .order(id.asc())
            .select(Vehicle::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Overwrites every vehicle owned by `owner_id`. Returns the updated rows,
    /// empty when the user has none.
    pub async fn update_by_user_id(
        &self,
        owner_id: i32,
        changes: VehicleChanges,
    ) -> Result<Vec<Vehicle>, AppError> {
        use crate::schema::vehicles::dsl::*;
        let mut conn = self.pool.get().await?;

        let mut updated: Vec<Vehicle> = diesel::update(vehicles.filter(user_id.eq(owner_id)))
            .set(&changes)
            .returning(Vehicle::as_returning())
            .get_results(&mut conn)
            .await?;

        updated.sort_by_key(|v| v.id);
        Ok(updated)
    }

    pub async fn list_all(&self) -> Result<Vec<Vehicle>, AppError> {
        use crate::schema::vehicles::dsl::*;
        let mut conn = self.pool.get().await?;

        vehicles
            .order(id.asc())
            .select(Vehicle::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
