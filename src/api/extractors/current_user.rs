//! Authenticated user passed explicitly to handlers.
//!
//! An authentication layer in front of the handler verifies the caller and
//! inserts a [`UserPayload`] into the request extensions. Handlers receive it
//! as a parameter:
//!
//! ```rust,ignore
//! async fn profile(CurrentUser(user): CurrentUser) -> Json<UserPayload> {
//!     Json(user)
//! }
//!
//! async fn greeting(user: Option<CurrentUser>) -> String {
//!     match user {
//!         Some(CurrentUser(u)) => format!("Hello, {}", u.name),
//!         None => "Hello, guest".to_string(),
//!     }
//! }
//! ```

use std::convert::Infallible;

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Identity attached to a request by the authentication layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    pub id: i64,
    pub user_id: i64,
    pub email: String,
    pub name: String,
    pub picture: String,
}

/// Extractor for the authenticated [`UserPayload`].
///
/// Rejects with `401 Unauthorized` when no user is attached. Use
/// `Option<CurrentUser>` for routes that also serve anonymous callers.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserPayload);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<UserPayload>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| AppError::unauthorized("Unauthorized"))
    }
}

impl<S> OptionalFromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(parts.extensions.get::<UserPayload>().cloned().map(CurrentUser))
    }
}
