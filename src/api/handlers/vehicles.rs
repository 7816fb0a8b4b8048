use axum::{
    extract::{Path, State},
    Json,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::VEHICLE_TAG;
use crate::api::dto::{
    ErrorResponse, UpdateVehicleRequest, VehicleEnvelope, VehicleResponse, VehicleUpdatedResponse,
    VehiclesResponse,
};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// # Routes
/// - `GET /vehicle/{user_id}` - The user's vehicle
/// - `PUT /vehicle/{user_id}` - Overwrite the user's vehicle
/// - `GET /vehicles` - Every vehicle (admin)
pub fn vehicle_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_vehicle, update_vehicle))
        .routes(routes!(list_vehicles))
}

#[utoipa::path(
    get,
    path = "/vehicle/{user_id}",
    tag = VEHICLE_TAG,
    params(("user_id" = i32, Path, description = "Owner's user id")),
    responses(
        (status = 200, description = "The user's vehicle", body = VehicleEnvelope),
        (status = 404, description = "User has no vehicle", body = ErrorResponse)
    )
)]
async fn get_vehicle(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<VehicleEnvelope>> {
    let vehicle = state.services.vehicles.get_vehicle(user_id).await?;
    Ok(Json(VehicleEnvelope {
        vehicle: vehicle.into(),
    }))
}

#[utoipa::path(
    put,
    path = "/vehicle/{user_id}",
    tag = VEHICLE_TAG,
    params(("user_id" = i32, Path, description = "Owner's user id")),
    request_body = UpdateVehicleRequest,
    responses(
        (status = 200, description = "Vehicle updated", body = VehicleUpdatedResponse),
        (status = 400, description = "Vehicle number missing", body = ErrorResponse),
        (status = 404, description = "User has no vehicle", body = ErrorResponse)
    )
)]
async fn update_vehicle(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateVehicleRequest>,
) -> AppResult<Json<VehicleUpdatedResponse>> {
    let vehicle = state
        .services
        .vehicles
        .update_vehicle(user_id, payload.into_changes())
        .await?;

    Ok(Json(VehicleUpdatedResponse {
        message: "Vehicle updated successfully.".to_string(),
        vehicle: vehicle.into(),
    }))
}

#[utoipa::path(
    get,
    path = "/vehicles",
    tag = VEHICLE_TAG,
    responses((status = 200, description = "All vehicles", body = VehiclesResponse))
)]
async fn list_vehicles(State(state): State<AppState>) -> AppResult<Json<VehiclesResponse>> {
    let vehicles = state.services.vehicles.list_vehicles().await?;
    Ok(Json(VehiclesResponse {
        vehicles: vehicles.into_iter().map(VehicleResponse::from).collect(),
    }))
}
