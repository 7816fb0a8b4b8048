//! Error handler for converting AppError to HTTP responses.
//!
//! Every error body has the shape `{ "message": ..., "error": ... }`.
//! Internal failures answer `"Server error"` with the raw error text in
//! `error`; everything else carries a message the client can show as-is.

use axum::{
    body::Bytes,
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

const SERVER_ERROR: &str = "Server error";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);

        if status.is_server_error() {
            tracing::error!(code = error_to_code(&self), error = ?self, "Request failed");
        } else {
            tracing::debug!(code = error_to_code(&self), error = %self, "Request rejected");
        }

        (status, Json(error_body(&self))).into_response()
    }
}

/// Builds the JSON body for an error without consuming it.
pub fn error_body(error: &AppError) -> ErrorResponse {
    match error {
        AppError::NotFound { entity, field, value } => {
            ErrorResponse::not_found_error(entity, field, value)
        }
        AppError::Duplicate { entity, field, .. } => ErrorResponse::duplicate_error(entity, field),
        AppError::Validation { field, reason } => ErrorResponse::validation_error(field, reason),
        AppError::ValidationErrors { errors } => {
            let message = errors
                .first()
                .map(|e| e.message.as_str())
                .unwrap_or("Invalid request.");
            let mut fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
            fields.dedup();
            ErrorResponse::new(message).with_error(fields.join(", "))
        }
        AppError::BadRequest { message } => ErrorResponse::new(message),
        AppError::Unauthorized { message } => ErrorResponse::new(message),
        AppError::Database { source, .. }
        | AppError::Configuration { source, .. }
        | AppError::ConnectionPool { source }
        | AppError::Internal { source } => {
            ErrorResponse::new(SERVER_ERROR).with_error(format!("{}: {:#}", error, source))
        }
    }
}

/// Maps an AppError variant to its HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Duplicate { .. } => StatusCode::CONFLICT,
        AppError::Validation { .. }
        | AppError::ValidationErrors { .. }
        | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
        AppError::Database { .. }
        | AppError::Configuration { .. }
        | AppError::ConnectionPool { .. }
        | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Stable code for an AppError variant, used in logs.
pub fn error_to_code(error: &AppError) -> &'static str {
    match error {
        AppError::NotFound { .. } => "NOT_FOUND",
        AppError::Duplicate { .. } => "DUPLICATE_ENTRY",
        AppError::Validation { .. } | AppError::ValidationErrors { .. } => "VALIDATION_ERROR",
        AppError::BadRequest { .. } => "BAD_REQUEST",
        AppError::Unauthorized { .. } => "UNAUTHORIZED",
        AppError::Database { .. } => "DATABASE_ERROR",
        AppError::Configuration { .. } => "CONFIGURATION_ERROR",
        AppError::ConnectionPool { .. } => "CONNECTION_POOL_ERROR",
        AppError::Internal { .. } => "INTERNAL_ERROR",
    }
}

/// Rewrites non-JSON 4xx/5xx responses into the standard error body.
///
/// Catches axum's plain-text rejections (bad path params, unknown routes,
/// wrong methods) that never pass through `AppError`.
pub async fn global_error_handler(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    let status = response.status();

    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"));
    if is_json {
        return response;
    }

    let (parts, body) = response.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_else(|_| Bytes::new());
    let original = String::from_utf8_lossy(&body_bytes).trim().to_string();

    let error_response = if status.is_server_error() {
        let body = ErrorResponse::new(SERVER_ERROR);
        if original.is_empty() {
            body
        } else {
            body.with_error(original)
        }
    } else if original.is_empty() {
        ErrorResponse::new(default_message(status))
    } else {
        ErrorResponse::new(&original)
    };

    let mut rewritten = (status, Json(error_response)).into_response();
    for (name, value) in parts.headers.iter() {
        if name != header::CONTENT_TYPE && name != header::CONTENT_LENGTH {
            rewritten.headers_mut().insert(name.clone(), value.clone());
        }
    }
    rewritten
}

fn default_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "Bad request.",
        StatusCode::NOT_FOUND => "Not found.",
        StatusCode::METHOD_NOT_ALLOWED => "Method not allowed.",
        StatusCode::UNSUPPORTED_MEDIA_TYPE => "Unsupported media type.",
        StatusCode::PAYLOAD_TOO_LARGE => "Request payload too large.",
        _ => "Request failed.",
    }
}
