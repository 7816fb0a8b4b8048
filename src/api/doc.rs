use utoipa::OpenApi;

pub const HEALTH_TAG: &str = "Health";
pub const ACCOUNT_TAG: &str = "Account";
pub const VEHICLE_TAG: &str = "Vehicles";
pub const ADMIN_TAG: &str = "Admin";
pub const STATION_TAG: &str = "Stations";
pub const BOOKING_TAG: &str = "Bookings";
pub const FEEDBACK_TAG: &str = "Feedback";
pub const PAYMENT_TAG: &str = "Payment";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EV Charge",
        description = "Backend for the EV charging station locator and booking app",
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::models::StationStatus,
            crate::models::Experience,
        )
    ),
    tags(
        (name = HEALTH_TAG, description = "Liveness and readiness probes"),
        (name = ACCOUNT_TAG, description = "Signup and login"),
        (name = VEHICLE_TAG, description = "A user's registered vehicle"),
        (name = ADMIN_TAG, description = "Listings for the admin dashboard"),
        (name = STATION_TAG, description = "Charging station catalogue"),
        (name = BOOKING_TAG, description = "Slot bookings"),
        (name = FEEDBACK_TAG, description = "User reviews"),
        (name = PAYMENT_TAG, description = "Payment acknowledgement"),
    )
)]
pub struct ApiDoc;
