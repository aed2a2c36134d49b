//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod docs;
pub mod fallback;
pub mod health;
pub mod root;

pub use docs::openapi_handler;
pub use fallback::not_found_handler;
pub use health::{liveness_handler, readiness_handler};
pub use root::root_handler;
