use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::BOOKING_TAG;
use crate::api::dto::{
    BookingCreatedResponse, BookingResponse, BookingsResponse, CreateBookingRequest,
    ErrorResponse,
};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

pub fn booking_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_booking))
        .routes(routes!(list_bookings))
}

/// POST /api/booking - reserve a slot. Overlapping bookings are accepted.
#[utoipa::path(
    post,
    path = "/booking",
    tag = BOOKING_TAG,
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking stored", body = BookingCreatedResponse),
        (status = 400, description = "A required field is missing", body = ErrorResponse)
    )
)]
async fn create_booking(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingCreatedResponse>)> {
    let booking = state
        .services
        .bookings
        .create(payload.into_new_booking())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingCreatedResponse {
            message: "Booking confirmed.".to_string(),
            booking: booking.into(),
        }),
    ))
}

/// GET /api/bookings/{user_id} - the user's bookings, latest first.
#[utoipa::path(
    get,
    path = "/bookings/{user_id}",
    tag = BOOKING_TAG,
    params(("user_id" = i32, Path, description = "Owner's user id")),
    responses((status = 200, description = "The user's bookings", body = BookingsResponse))
)]
async fn list_bookings(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<BookingsResponse>> {
    let bookings = state.services.bookings.list_for_user(user_id).await?;
    Ok(Json(BookingsResponse {
        bookings: bookings.into_iter().map(BookingResponse::from).collect(),
    }))
}
