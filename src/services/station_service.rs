//! Station catalogue maintenance.
//!
//! There is no check that `available_slots <= total_slots` or that either
//! is non-negative; admins may store whatever counts they send.

use crate::error::{AppError, AppResult};
use crate::models::{Station, StationFields};
use crate::repositories::StationRepository;

#[derive(Clone)]
pub struct StationService {
    repo: StationRepository,
}

impl StationService {
    pub fn new(repo: StationRepository) -> Self {
        Self { repo }
    }

    /// Every station ordered by id.
    pub async fn list(&self) -> AppResult<Vec<Station>> {
        self.repo.list_all().await
    }

    pub async fn create(&self, fields: StationFields) -> AppResult<Station> {
        let station = self.repo.create(fields).await?;
        tracing::info!(
            station_id = station.id,
            name = %station.name,
            status = station.status.as_str(),
            "station created"
        );
        Ok(station)
    }

    /// Full overwrite of the station's writable columns.
    pub async fn update(&self, id: i32, fields: StationFields) -> AppResult<Station> {
        let station = self
            .repo
            .update(id, fields)
            .await?
            .ok_or_else(|| AppError::not_found("station", "id", id))?;

        tracing::info!(station_id = id, status = station.status.as_str(), "station updated");
        Ok(station)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let affected = self.repo.delete(id).await?;
        if affected == 0 {
            return Err(AppError::not_found("station", "id", id));
        }

        tracing::info!(station_id = id, "station deleted");
        Ok(())
    }
}
