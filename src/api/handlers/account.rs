//! Signup and login.
//!
//! Login only checks credentials and returns the identity payload; no token
//! or session is issued.

use axum::{extract::State, http::StatusCode, Json};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::ACCOUNT_TAG;
use crate::api::dto::{ErrorResponse, LoginRequest, LoginResponse, MessageResponse, SignupRequest};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// # Routes
/// - `POST /signup` - Register a user and their vehicle
/// - `POST /login` - Check credentials
pub fn account_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(signup))
        .routes(routes!(login))
}

#[utoipa::path(
    post,
    path = "/signup",
    tag = ACCOUNT_TAG,
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User and vehicle registered", body = MessageResponse),
        (status = 400, description = "A required field is missing", body = ErrorResponse),
        (status = 409, description = "Email or username already taken", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    )
)]
async fn signup(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SignupRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state
        .services
        .accounts
        .register(payload.into_registration())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User and vehicle registered successfully.")),
    ))
}

#[utoipa::path(
    post,
    path = "/login",
    tag = ACCOUNT_TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "A required field is missing", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (email, password) = payload.credentials();
    let user = state.services.accounts.authenticate(email, password).await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user: user.into(),
    }))
}
