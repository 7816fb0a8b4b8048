//! Admin user listing.

use axum::{extract::State, Json};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::ADMIN_TAG;
use crate::api::dto::{UserResponse, UsersResponse};
use crate::error::AppResult;
use crate::state::AppState;

pub fn user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(list_users))
}

/// GET /api/users - every user ordered by id, without password hashes.
#[utoipa::path(
    get,
    path = "/users",
    tag = ADMIN_TAG,
    responses((status = 200, description = "All users", body = UsersResponse))
)]
async fn list_users(State(state): State<AppState>) -> AppResult<Json<UsersResponse>> {
    let users = state.services.accounts.list_users().await?;
    Ok(Json(UsersResponse {
        users: users.into_iter().map(UserResponse::from).collect(),
    }))
}
