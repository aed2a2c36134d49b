//! Answers for requests that match no route.

use axum::extract::OriginalUri;
use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::error::AppError;

/// Handles unknown paths and unsupported methods on known paths.
///
/// Both are reported as `404` with `Cannot <METHOD> <path>`, e.g.
/// `Cannot POST /api/v1/health`.
pub async fn not_found_handler(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    let message = format!("Cannot {} {}", method, uri.path());

    AppError::http(
        StatusCode::NOT_FOUND,
        json!({
            "message": message,
            "error": "Not Found",
            "statusCode": 404,
        }),
    )
}
