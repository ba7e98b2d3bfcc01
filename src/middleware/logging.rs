//! Logging middleware
//!
//! Records HTTP request and response information

use axum::{
    extract::Request,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn, Instrument};
use uuid::Uuid;

/// Requests slower than this are reported
const SLOW_REQUEST_SECS: u64 = 5;

/// Request logging middleware
///
/// Wraps each request in a span carrying a generated request id
pub async fn request_logging_middleware(
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Response {
    let request_id = Uuid::new_v4().to_string();

    let span = tracing::info_span!(
        "http_request",
        request_id = %request_id,
        method = %method,
        path = %uri.path(),
    );

    async move {
        let start_time = Instant::now();

        info!(
            "Request started: {} {} - User-Agent: {}",
            method,
            uri,
            headers
                .get(header::USER_AGENT)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("unknown")
        );

        if let Some(length) = content_length(&headers) {
            info!("Request body size: {} bytes", length);
        }

        let response = next.run(request).await;

        let duration = start_time.elapsed();
        let status = response.status();
        let millis = duration.as_secs_f64() * 1000.0;

        if status.is_client_error() {
            warn!("Client error: {} - Duration: {:.2}ms", status, millis);
        } else if status.is_server_error() {
            warn!("Server error: {} - Duration: {:.2}ms", status, millis);
        } else {
            info!("Request completed: {} - Duration: {:.2}ms", status, millis);
        }

        if duration.as_secs() > SLOW_REQUEST_SECS {
            warn!(
                "Slow request detected: {} {} - Duration: {:.2}s",
                method,
                uri,
                duration.as_secs_f64()
            );
        }

        response
    }
    .instrument(span)
    .await
}

/// Error logging middleware
///
/// Logs responses that signal an upstream vendor or internal failure
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    match response.status() {
        StatusCode::PAYLOAD_TOO_LARGE => {
            warn!("Request body rejected as too large: {} {}", method, uri);
        }
        status if status.is_server_error() => {
            tracing::error!("Request failed: {} {} - Status code: {}", method, uri, status);
        }
        _ => {}
    }

    response
}

/// Declared request body size, if the client sent a usable Content-Length
fn content_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}
