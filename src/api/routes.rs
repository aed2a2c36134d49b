//! API route configuration.
//!
//! Routes are mounted under `/api/v1` by [`crate::routes::router`].

use crate::api::handlers::{liveness_handler, not_found_handler, readiness_handler, root_handler};
use crate::api::middleware::api_key;
use crate::state::AppState;
use axum::{Router, middleware, routing::get};

/// Version 1 of the API.
///
/// # Endpoints
///
/// - `GET /`                 - Service name and version (public)
/// - `GET /health`           - Liveness (public)
/// - `GET /health/database`  - Readiness with database ping (`x-api-key` required)
///
/// A known path requested with an unsupported method is answered like an
/// unknown path.
pub fn v1_routes(state: AppState) -> Router<AppState> {
    let gated = gated_routes()
        .route_layer(middleware::from_fn_with_state(state, api_key::layer));

    public_routes()
        .merge(gated)
        .method_not_allowed_fallback(not_found_handler)
}

/// Routes reachable without credentials.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(liveness_handler))
}

/// Routes behind the API key gate.
pub fn gated_routes() -> Router<AppState> {
    Router::new().route("/health/database", get(readiness_handler))
}
