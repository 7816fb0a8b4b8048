//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `account` - signup, login and the admin user listing
//! - `vehicle`, `station`, `booking`, `feedback`, `payment` - per resource
//! - `health` - health probe payloads
//! - `error`, `common` - shared envelopes

mod account;
mod booking;
mod common;
mod error;
mod feedback;
mod health;
mod payment;
mod station;
mod vehicle;

pub use account::{LoginRequest, LoginResponse, SignupRequest, UserInfo, UserResponse, UsersResponse};
pub use booking::{BookingCreatedResponse, BookingResponse, BookingsResponse, CreateBookingRequest};
pub use common::{CreatedResponse, MessageResponse};
pub use error::ErrorResponse;
pub use feedback::{CreateFeedbackRequest, FeedbackListResponse, ReviewResponse};
pub use health::{ComponentHealth, HealthResponse, HealthStatus};
pub use payment::{PaymentRequestBody, PaymentResponse};
pub use station::{StationRequest, StationResponse, StationSavedResponse, StationsResponse};
pub use vehicle::{
    UpdateVehicleRequest, VehicleEnvelope, VehicleResponse, VehicleUpdatedResponse,
    VehiclesResponse,
};

/// Renders a stored (UTC, zone-less) timestamp the way every response does.
pub(crate) fn format_timestamp(value: &jiff::civil::DateTime) -> String {
    value.strftime("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}
