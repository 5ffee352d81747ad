/// Shared response helpers for route handlers
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Uniform JSON error envelope
///
/// ```json
/// { "error": { "code": "VALIDATION_FAILED", "message": "...", "detail": "..." } }
/// ```
pub fn error_response(
    status: StatusCode,
    code: &str,
    message: &str,
    detail: Option<&str>,
) -> Response {
    let body = json!({
        "error": {
            "code": code,
            "message": message,
            "detail": detail,
        }
    });
    (status, Json(body)).into_response()
}
