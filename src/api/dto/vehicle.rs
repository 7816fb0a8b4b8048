use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::dto::format_timestamp;
use crate::models::{Vehicle, VehicleChanges};
use crate::utils::validate::not_blank;

/// Full overwrite of the user's vehicle. Omitted optional fields are cleared.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[schema(example = json!({
    "vehicle_number": "KA01AB1234",
    "model": "Nexon EV",
    "brand": "Tata",
    "year": "2023"
}))]
pub struct UpdateVehicleRequest {
    #[validate(
        required(message = "Vehicle number is required."),
        custom(function = "not_blank", message = "Vehicle number is required.")
    )]
    pub vehicle_number: Option<String>,
    pub model: Option<String>,
    pub brand: Option<String>,
    /// Free text, e.g. `"2023"`.
    pub year: Option<String>,
}

impl UpdateVehicleRequest {
    pub fn into_changes(self) -> VehicleChanges {
        VehicleChanges {
            vehicle_number: self.vehicle_number.unwrap_or_default().trim().to_string(),
            model: self.model,
            brand: self.brand,
            year: self.year,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VehicleResponse {
    pub id: i32,
    pub user_id: i32,
    #[schema(example = "KA01AB1234")]
    pub vehicle_number: String,
    pub model: Option<String>,
    pub brand: Option<String>,
    pub year: Option<String>,
    pub created_at: String,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            user_id: vehicle.user_id,
            vehicle_number: vehicle.vehicle_number,
            model: vehicle.model,
            brand: vehicle.brand,
            year: vehicle.year,
            created_at: format_timestamp(&vehicle.created_at.to_jiff()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VehicleEnvelope {
    pub vehicle: VehicleResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VehicleUpdatedResponse {
    #[schema(example = "Vehicle updated successfully.")]
    pub message: String,
    pub vehicle: VehicleResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VehiclesResponse {
    pub vehicles: Vec<VehicleResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_number_required() {
        let request: UpdateVehicleRequest =
            serde_json::from_value(serde_json::json!({"model": "Kona"})).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("vehicle_number"));
    }

    #[test]
    fn test_into_changes_keeps_absent_fields_empty() {
        let request: UpdateVehicleRequest =
            serde_json::from_value(serde_json::json!({"vehicle_number": " MH12 XY 9 "})).unwrap();
        let changes = request.into_changes();
        assert_eq!(changes.vehicle_number, "MH12 XY 9");
        assert_eq!(changes.model, None);
        assert_eq!(changes.year, None);
    }
}
