//! Station catalogue handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::STATION_TAG;
use crate::api::dto::{
    ErrorResponse, MessageResponse, StationRequest, StationResponse, StationSavedResponse,
    StationsResponse,
};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// # Routes
/// - `GET /stations` - List all stations
/// - `POST /stations` - Add a station
/// - `PUT /stations/{id}` - Overwrite a station
/// - `DELETE /stations/{id}` - Remove a station
pub fn station_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_stations, create_station))
        .routes(routes!(update_station, delete_station))
}

#[utoipa::path(
    get,
    path = "/stations",
    tag = STATION_TAG,
    responses((status = 200, description = "All stations ordered by id", body = StationsResponse))
)]
async fn list_stations(State(state): State<AppState>) -> AppResult<Json<StationsResponse>> {
    let stations = state.services.stations.list().await?;
    Ok(Json(StationsResponse {
        stations: stations.into_iter().map(StationResponse::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/stations",
    tag = STATION_TAG,
    request_body = StationRequest,
    responses(
        (status = 201, description = "Station added", body = StationSavedResponse),
        (status = 400, description = "A required field is missing", body = ErrorResponse)
    )
)]
async fn create_station(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<StationRequest>,
) -> AppResult<(StatusCode, Json<StationSavedResponse>)> {
    let station = state.services.stations.create(payload.into_fields()).await?;
    Ok((
        StatusCode::CREATED,
        Json(StationSavedResponse {
            message: "Station added successfully.".to_string(),
            station: station.into(),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/stations/{id}",
    tag = STATION_TAG,
    params(("id" = i32, Path, description = "Station id")),
    request_body = StationRequest,
    responses(
        (status = 200, description = "Station updated", body = StationSavedResponse),
        (status = 400, description = "A required field is missing", body = ErrorResponse),
        (status = 404, description = "Station not found", body = ErrorResponse)
    )
)]
async fn update_station(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<StationRequest>,
) -> AppResult<Json<StationSavedResponse>> {
    let station = state
        .services
        .stations
        .update(id, payload.into_fields())
        .await?;

    Ok(Json(StationSavedResponse {
        message: "Station updated successfully.".to_string(),
        station: station.into(),
    }))
}

#[utoipa::path(
    delete,
    path = "/stations/{id}",
    tag = STATION_TAG,
    params(("id" = i32, Path, description = "Station id")),
    responses(
        (status = 200, description = "Station deleted", body = MessageResponse),
        (status = 404, description = "Station not found", body = ErrorResponse)
    )
)]
async fn delete_station(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.stations.delete(id).await?;
    Ok(Json(MessageResponse::new("Station deleted successfully.")))
}
