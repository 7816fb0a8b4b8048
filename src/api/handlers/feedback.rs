use axum::{extract::State, http::StatusCode, Json};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::FEEDBACK_TAG;
use crate::api::dto::{
    CreateFeedbackRequest, CreatedResponse, ErrorResponse, FeedbackListResponse, ReviewResponse,
};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

pub fn feedback_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(submit_feedback))
        .routes(routes!(list_feedback))
}

#[utoipa::path(
    post,
    path = "/feedback",
    tag = FEEDBACK_TAG,
    request_body = CreateFeedbackRequest,
    responses(
        (status = 201, description = "Feedback stored", body = CreatedResponse),
        (status = 400, description = "Feedback missing or rating out of range", body = ErrorResponse)
    )
)]
async fn submit_feedback(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateFeedbackRequest>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let entry = state.services.feedback.create(payload.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Feedback submitted successfully.".to_string(),
            id: entry.id,
        }),
    ))
}

/// GET /api/feedbacks - every entry, newest first, with stars and
/// description resolved.
#[utoipa::path(
    get,
    path = "/feedbacks",
    tag = FEEDBACK_TAG,
    responses((status = 200, description = "All feedback", body = FeedbackListResponse))
)]
async fn list_feedback(State(state): State<AppState>) -> AppResult<Json<FeedbackListResponse>> {
    let reviews = state.services.feedback.list_all().await?;
    Ok(Json(FeedbackListResponse {
        feedbacks: reviews.into_iter().map(ReviewResponse::from).collect(),
    }))
}
