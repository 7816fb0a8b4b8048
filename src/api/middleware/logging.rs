//! Request/response logging.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{Instrument, Level};

use super::RequestId;

/// Opens an `http_request` span around the handler and logs the outcome.
/// 5xx responses are logged at `error`, 4xx at `warn`.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|r| r.0.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let span = tracing::span!(
        Level::INFO,
        "http_request",
        method = %method,
        uri = %uri,
        request_id = %request_id
    );

    async move {
        tracing::debug!(path = %uri.path(), "Request received");

        let start = Instant::now();
        let response = next.run(request).await;
        let status = response.status();
        let duration_ms = start.elapsed().as_millis() as u64;

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), duration_ms, "Response sent");
        } else if status.is_client_error() {
            tracing::warn!(status = status.as_u16(), duration_ms, "Response sent");
        } else {
            tracing::info!(status = status.as_u16(), duration_ms, "Response sent");
        }

        response
    }
    .instrument(span)
    .await
}
