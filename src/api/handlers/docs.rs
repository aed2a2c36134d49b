//! OpenAPI document for the HTTP surface.

use axum::Json;
use serde_json::{Value, json};

use crate::api::middleware::api_key::API_KEY_HEADER;

/// Serves the OpenAPI 3 description of the API.
///
/// # Endpoint
///
/// `GET /api-docs` (mounted only when `SWAGGER_ENABLED=true`)
pub async fn openapi_handler() -> Json<Value> {
    Json(openapi_document())
}

/// Builds the OpenAPI document.
///
/// Declares two security schemes: `API-Key` (the `x-api-key` header checked
/// by the gate) and `Authorization` (bearer JWT, for routes behind an external
/// authentication layer).
pub fn openapi_document() -> Value {
    let error_response = |description: &str| {
        json!({
            "description": description,
            "content": {
                "application/json": {
                    "schema": { "$ref": "#/components/schemas/ErrorEnvelope" }
                }
            }
        })
    };

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "API Documentation",
            "description": "REST API Documentation",
            "version": "1.0"
        },
        "paths": {
            "/api/v1": {
                "get": {
                    "summary": "Service name and version",
                    "responses": { "200": { "description": "Service information" } }
                }
            },
            "/api/v1/health": {
                "get": {
                    "summary": "Liveness probe",
                    "responses": { "200": { "description": "Process is up" } }
                }
            },
            "/api/v1/health/database": {
                "get": {
                    "summary": "Readiness probe with database ping",
                    "security": [ { "API-Key": [] } ],
                    "responses": {
                        "200": { "description": "Database reachable" },
                        "401": error_response("Missing or invalid API key"),
                        "503": { "description": "Database unreachable" }
                    }
                }
            }
        },
        "components": {
            "securitySchemes": {
                "Authorization": {
                    "type": "http",
                    "scheme": "bearer",
                    "bearerFormat": "JWT",
                    "in": "header"
                },
                "API-Key": {
                    "type": "apiKey",
                    "name": API_KEY_HEADER,
                    "in": "header"
                }
            },
            "schemas": {
                "ErrorEnvelope": {
                    "type": "object",
                    "required": ["success", "message"],
                    "properties": {
                        "success": { "type": "boolean", "example": false },
                        "message": { "type": "string", "example": "Missing API Key" }
                    }
                }
            }
        }
    })
}
