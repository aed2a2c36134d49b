//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod health;
pub mod list;
pub mod pagination;

pub use list::{GetAllResponse, PaginateGetAllResponse};
pub use pagination::{IntegerInput, PaginationRequest};
