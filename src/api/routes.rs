//! Router configuration for the API.
//!
//! Resource routers are collected into one `OpenApiRouter` so the generated
//! document and the served routes cannot drift apart.

use axum::{http::StatusCode, middleware, response::IntoResponse, Json, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::dto::ErrorResponse;
use crate::api::handlers;
use crate::api::middleware::{global_error_handler, logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Layers run outermost first:
/// 1. CORS - answers preflights and stamps allow headers
/// 2. Request ID - generates/propagates `x-request-id`
/// 3. Logging - one span per request carrying the request id
/// 4. Error normalizer - rewrites plain-text 4xx/5xx into JSON
///
/// # Routes
/// - `/api/...` - resource endpoints
/// - `/health`, `/health/ready`, `/health/live` - probes
/// - `/swagger-ui`, `/api-docs/openapi.json` - API documentation
pub fn create_router(state: AppState) -> Router {
    let api_routes = OpenApiRouter::new()
        .merge(handlers::account::account_routes())
        .merge(handlers::vehicles::vehicle_routes())
        .merge(handlers::users::user_routes())
        .merge(handlers::stations::station_routes())
        .merge(handlers::bookings::booking_routes())
        .merge(handlers::feedback::feedback_routes())
        .merge(handlers::payment::payment_routes());

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api", api_routes)
        .merge(handlers::health::health_routes())
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .fallback(route_not_found)
        // Last added runs first
        .layer(middleware::from_fn(global_error_handler))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Route not found.")),
    )
}
