//! Extractors that deserialize and validate request input in one step.
//!
//! Both reject with [`AppError::BadRequest`]: deserialization failures carry
//! the framework's rejection text, rule violations carry the flattened
//! validation message (`"page: must be an integer; limit: ..."`), with
//! fields in the order the target type declares them.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that passed its `validator` rules.
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn list_handler(
///     ValidatedJson(pagination): ValidatedJson<PaginationRequest>,
/// ) -> Result<Json<PaginateGetAllResponse<Item>>, AppError> {
///     let (offset, limit) = pagination.offset_and_limit();
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value
            .validate()
            .map_err(|errors| AppError::from_validation::<T>(&errors))?;
        Ok(Self(value))
    }
}

/// Query string that passed its `validator` rules.
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        value
            .validate()
            .map_err(|errors| AppError::from_validation::<T>(&errors))?;
        Ok(Self(value))
    }
}
