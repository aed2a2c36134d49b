//! Application error taxonomy and the response normalizer.
//!
//! Every failure that reaches the request boundary is an [`AppError`]. Its
//! [`IntoResponse`] implementation is the single place where failures become
//! HTTP responses, always in the same envelope:
//!
//! ```json
//! { "success": false, "message": "Missing API Key" }
//! ```
//!
//! # Resolution order
//!
//! 1. Classified variants (`BadRequest`, `Unauthorized`, `Forbidden`,
//!    `NotFound`) use their fixed status and message verbatim.
//! 2. [`AppError::Http`] carries a framework-level status and payload; the
//!    message is taken from the payload.
//! 3. [`AppError::Internal`] is answered with `500` and a generic message. The
//!    underlying error is logged and never serialized.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_aux::serde_introspection::serde_introspect;
use serde_json::Value;

use crate::utils::validation;

/// Message returned for every failure that was not classified.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Uniform JSON body written for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed input (400).
    #[error("{message}")]
    BadRequest { message: String },

    /// Missing or invalid credentials (401).
    #[error("{message}")]
    Unauthorized { message: String },

    /// Authenticated but not allowed (403).
    #[error("{message}")]
    Forbidden { message: String },

    /// Requested resource does not exist (404).
    #[error("{message}")]
    NotFound { message: String },

    /// Framework-level HTTP failure with its own status and payload.
    ///
    /// The payload is either a plain string or a JSON object, usually with a
    /// `message` field.
    #[error("HTTP {status}: {payload}")]
    Http { status: StatusCode, payload: Value },

    /// Anything not classified above.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn http(status: StatusCode, payload: impl Into<Value>) -> Self {
        Self::Http {
            status,
            payload: payload.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(anyhow::Error::msg(message.into()))
    }

    /// Validation failure of a `T`, with top-level fields reported in the
    /// order `T` declares them.
    pub fn from_validation<T>(errors: &validator::ValidationErrors) -> Self
    where
        T: DeserializeOwned,
    {
        let declared = serde_introspect::<T>();
        let failures = validation::from_validation_errors_in(errors, declared);
        AppError::bad_request(validation::combine(&failures))
    }

    /// HTTP status this error is answered with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Http { status, .. } => *status,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Resolves the status and the client-facing message.
    pub fn resolve(&self) -> (StatusCode, String) {
        let message = match self {
            AppError::BadRequest { message }
            | AppError::Unauthorized { message }
            | AppError::Forbidden { message }
            | AppError::NotFound { message } => message.clone(),
            AppError::Http { payload, .. } => payload_message(payload),
            AppError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        };

        (self.status_code(), message)
    }

    pub fn is_classified(&self) -> bool {
        !matches!(self, AppError::Http { .. } | AppError::Internal(_))
    }
}

/// Extracts the message of a framework-level failure payload.
///
/// A string is used as is. An object contributes its `message` field when that
/// field is truthy, otherwise the whole object is serialized.
fn payload_message(payload: &Value) -> String {
    match payload {
        Value::String(text) => text.clone(),
        Value::Object(map) => match map.get("message") {
            Some(Value::String(text)) if !text.is_empty() => text.clone(),
            Some(value) if is_truthy(value) => value.to_string(),
            _ => payload.to_string(),
        },
        Value::Array(_) => payload.to_string(),
        _ => INTERNAL_ERROR_MESSAGE.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.resolve();

        match &self {
            AppError::Internal(err) => {
                tracing::error!(status = status.as_u16(), error = ?err, "Unhandled error");
            }
            _ => {
                tracing::error!(status = status.as_u16(), error = %self, "Request failed");
            }
        }

        metrics::counter!("http_errors_total", "status" => status.as_u16().to_string())
            .increment(1);

        (status, Json(ErrorEnvelope::failure(message))).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Internal(anyhow::Error::new(e).context("Database error"))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let failures = validation::from_validation_errors(&errors);
        AppError::bad_request(validation::combine(&failures))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}
