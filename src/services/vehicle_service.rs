use crate::error::{AppError, AppResult};
use crate::models::{Vehicle, VehicleChanges};
use crate::repositories::VehicleRepository;
use crate::services::account_service::non_blank;

#[derive(Clone)]
pub struct VehicleService {
    repo: VehicleRepository,
}

impl VehicleService {
    pub fn new(repo: VehicleRepository) -> Self {
        Self { repo }
    }

    /// The vehicle registered by `user_id`, or `NotFound`.
    pub async fn get_vehicle(&self, user_id: i32) -> AppResult<Vehicle> {
        self.repo
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("vehicle", "user_id", user_id))
    }

    /// Overwrites the user's vehicle details. Never inserts: a user without
    /// a vehicle row gets `NotFound` and nothing is written.
    pub async fn update_vehicle(&self, user_id: i32, changes: VehicleChanges) -> AppResult<Vehicle> {
        let changes = VehicleChanges {
            model: non_blank(changes.model),
            brand: non_blank(changes.brand),
            year: non_blank(changes.year),
            ..changes
        };

        let updated = self.repo.update_by_user_id(user_id, changes).await?;
        let count = updated.len();
        let vehicle = updated
            .into_iter()
            .next()
            .ok_or_else(|| AppError::not_found("vehicle", "user_id", user_id))?;

        tracing::info!(user_id, vehicle_id = vehicle.id, rows = count, "vehicle updated");
        Ok(vehicle)
    }

    pub async fn list_vehicles(&self) -> AppResult<Vec<Vehicle>> {
        self.repo.list_all().await
    }
}
