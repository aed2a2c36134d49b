//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/api/v1/*`   - REST API (see [`crate::api::routes`])
//! - `/api-docs`   - OpenAPI document (only when `SWAGGER_ENABLED`)
//! - anything else - `404` envelope, `Cannot <METHOD> <path>`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - Panics become a `500` envelope
//! - **CORS** - Exact-match origin allow-list
//! - **API key** - `x-api-key` on gated routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{not_found_handler, openapi_handler};
use crate::api::middleware::{cors, panic, tracing};
use crate::config::Config;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Global prefix and URI version of the API.
pub const API_PREFIX: &str = "/api/v1";

/// Path of the OpenAPI document.
pub const DOCS_PATH: &str = "/api-docs";

/// Builds the router with every route and middleware, without path
/// normalization.
pub fn router(state: AppState) -> Router {
    let config = state.config.clone();

    let mut router = Router::new().nest(API_PREFIX, api::routes::v1_routes(state.clone()));

    if config.swagger_enabled {
        router = router.route(DOCS_PATH, get(openapi_handler));
    }

    let router = router.fallback(not_found_handler).with_state(state);

    with_middleware(router, &config)
}

/// Wraps a router in the global middleware stack.
///
/// Outermost first: tracing, CORS, panic recovery. CORS sits outside panic
/// recovery so a recovered `500` still carries the CORS headers.
pub fn with_middleware(router: Router, config: &Config) -> Router {
    router
        .layer(panic::layer())
        .layer(cors::layer(&config.allowed_origins))
        .layer(tracing::layer())
}

/// Constructs the application router with trailing-slash normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
