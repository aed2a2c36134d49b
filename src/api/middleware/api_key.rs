//! Shared-secret API key gate.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Rejects requests that do not present the configured API key.
///
/// # Header Format
///
/// ```text
/// x-api-key: <secret>
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` with:
/// - `Missing API Key` when the header is absent or empty
/// - `Invalid API Key` when the value differs from `API_KEY`
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::api_key;
///
/// let gated = Router::new()
///     .route("/health/database", get(database_health_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), api_key::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    verify(req.headers(), &st.config.api_key)?;

    Ok(next.run(req).await)
}

/// Checks the `x-api-key` header against the expected secret.
pub fn verify(headers: &HeaderMap, expected: &str) -> Result<(), AppError> {
    let provided = headers
        .get(API_KEY_HEADER)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::unauthorized("Missing API Key"))?;

    // Plain equality, not constant time.
    if provided.as_bytes() != expected.as_bytes() {
        return Err(AppError::unauthorized("Invalid API Key"));
    }

    Ok(())
}
