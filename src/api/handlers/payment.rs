use axum::{extract::State, Json};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::PAYMENT_TAG;
use crate::api::dto::{ErrorResponse, PaymentRequestBody, PaymentResponse};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

pub fn payment_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(capture_payment))
}

/// POST /api/payment - acknowledge a payment. No gateway is involved.
#[utoipa::path(
    post,
    path = "/payment",
    tag = PAYMENT_TAG,
    request_body = PaymentRequestBody,
    responses(
        (status = 200, description = "Payment acknowledged", body = PaymentResponse),
        (status = 400, description = "A required field is missing", body = ErrorResponse)
    )
)]
async fn capture_payment(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PaymentRequestBody>,
) -> AppResult<Json<PaymentResponse>> {
    let receipt = state.services.payments.capture(payload.into_request()).await?;
    Ok(Json(receipt.into()))
}
