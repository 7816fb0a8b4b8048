use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::dto::format_timestamp;
use crate::models::{Booking, NewBooking};
use crate::utils::validate::not_blank;

/// `date`, `time` and `duration` are stored exactly as sent.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[schema(example = json!({
    "user_id": 1,
    "station_id": 2,
    "station_name": "MG Road Supercharger",
    "date": "2025-02-01",
    "time": "10:00",
    "duration": "60"
}))]
pub struct CreateBookingRequest {
    #[validate(required(message = "All fields are required."))]
    pub user_id: Option<i32>,
    #[validate(required(message = "All fields are required."))]
    pub station_id: Option<i32>,
    #[validate(
        required(message = "All fields are required."),
        custom(function = "not_blank", message = "All fields are required.")
    )]
    pub station_name: Option<String>,
    #[validate(
        required(message = "All fields are required."),
        custom(function = "not_blank", message = "All fields are required.")
    )]
    pub date: Option<String>,
    #[validate(
        required(message = "All fields are required."),
        custom(function = "not_blank", message = "All fields are required.")
    )]
    pub time: Option<String>,
    #[validate(
        required(message = "All fields are required."),
        custom(function = "not_blank", message = "All fields are required.")
    )]
    pub duration: Option<String>,
}

impl CreateBookingRequest {
    pub fn into_new_booking(self) -> NewBooking {
        NewBooking {
            user_id: self.user_id.unwrap_or_default(),
            station_id: self.station_id.unwrap_or_default(),
            station_name: self.station_name.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            time: self.time.unwrap_or_default(),
            duration: self.duration.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingResponse {
    pub id: i32,
    pub user_id: i32,
    pub station_id: i32,
    pub station_name: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub created_at: String,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            user_id: booking.user_id,
            station_id: booking.station_id,
            station_name: booking.station_name,
            date: booking.date,
            time: booking.time,
            duration: booking.duration,
            created_at: format_timestamp(&booking.created_at.to_jiff()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingCreatedResponse {
    #[schema(example = "Booking confirmed.")]
    pub message: String,
    pub booking: BookingResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingsResponse {
    pub bookings: Vec<BookingResponse>,
}
