//! Station DTOs. The client speaks camelCase for this resource.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::dto::format_timestamp;
use crate::models::{Station, StationFields, StationStatus};
use crate::utils::validate::not_blank;

/// Body for both create and full-overwrite update.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "name": "MG Road Supercharger",
    "address": "12 MG Road, Bengaluru",
    "availableSlots": 3,
    "totalSlots": 4,
    "power": "150 kW",
    "price": "₹18/kWh",
    "rating": 4.5,
    "amenities": "Cafe, Wi-Fi",
    "status": "online"
}))]
pub struct StationRequest {
    #[validate(
        required(message = "Name, address, availableSlots and totalSlots are required."),
        custom(
            function = "not_blank",
            message = "Name, address, availableSlots and totalSlots are required."
        )
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Name, address, availableSlots and totalSlots are required."),
        custom(
            function = "not_blank",
            message = "Name, address, availableSlots and totalSlots are required."
        )
    )]
    pub address: Option<String>,
    #[validate(required(message = "Name, address, availableSlots and totalSlots are required."))]
    pub available_slots: Option<i32>,
    #[validate(required(message = "Name, address, availableSlots and totalSlots are required."))]
    pub total_slots: Option<i32>,
    pub power: Option<String>,
    pub price: Option<String>,
    pub rating: Option<f64>,
    pub amenities: Option<String>,
    /// `online`, `offline` or `maintenance`; anything else is stored as `online`.
    pub status: Option<String>,
}

impl StationRequest {
    pub fn into_fields(self) -> StationFields {
        StationFields {
            status: StationStatus::coerce(self.status.as_deref()),
            name: self.name.unwrap_or_default().trim().to_string(),
            address: self.address.unwrap_or_default().trim().to_string(),
            available_slots: self.available_slots.unwrap_or_default(),
            total_slots: self.total_slots.unwrap_or_default(),
            power: self.power,
            price: self.price,
            rating: self.rating,
            amenities: self.amenities,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StationResponse {
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
    pub created_at: String,
    pub updated_at: String,
}

impl From<Station> for StationResponse {
    fn from(station: Station) -> Self {
        Self {
            id: station.id,
            name: station.name,
            address: station.address,
            available_slots: station.available_slots,
            total_slots: station.total_slots,
            power: station.power,
            price: station.price,
            rating: station.rating,
            amenities: station.amenities,
            status: station.status,
            created_at: format_timestamp(&station.created_at.to_jiff()),
            updated_at: format_timestamp(&station.updated_at.to_jiff()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StationsResponse {
    pub stations: Vec<StationResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StationSavedResponse {
    #[schema(example = "Station added successfully.")]
    pub message: String,
    pub station: StationResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_request() {
        let request: StationRequest = serde_json::from_value(serde_json::json!({
            "name": "Hub",
            "address": "1 Main St",
            "availableSlots": 2,
            "totalSlots": 4,
            "status": "active"
        }))
        .unwrap();

        assert!(request.validate().is_ok());
        let fields = request.into_fields();
        assert_eq!(fields.available_slots, 2);
        assert_eq!(fields.total_slots, 4);
        assert_eq!(fields.status, StationStatus::Online);
    }

    #[test]
    fn test_missing_slots_rejected() {
        let request: StationRequest = serde_json::from_value(serde_json::json!({
            "name": "Hub",
            "address": "1 Main St",
            "availableSlots": 0
        }))
        .unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("total_slots"));
    }

    #[test]
    fn test_counts_are_not_range_checked() {
        let request: StationRequest = serde_json::from_value(serde_json::json!({
            "name": "Hub",
            "address": "1 Main St",
            "availableSlots": 9,
            "totalSlots": -1,
            "status": "MAINTENANCE"
        }))
        .unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.into_fields().status, StationStatus::Maintenance);
    }
}
