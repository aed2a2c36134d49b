//! Handler for the API root.

use axum::{Json, extract::State};

use crate::api::dto::health::ServiceInfo;
use crate::state::AppState;

/// Identifies the service.
///
/// # Endpoint
///
/// `GET /api/v1`
///
/// # Response
///
/// ```json
/// { "name": "api-scaffold", "version": "0.1.0", "docs": "/api-docs" }
/// ```
///
/// `docs` is omitted when the OpenAPI document is disabled.
pub async fn root_handler(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        docs: state
            .config
            .swagger_enabled
            .then(|| crate::routes::DOCS_PATH.to_string()),
    })
}
