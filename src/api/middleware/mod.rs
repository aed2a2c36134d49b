//! HTTP middleware for request processing and protection.
//!
//! Provides the API key gate, CORS, panic recovery and request tracing.

pub mod api_key;
pub mod cors;
pub mod panic;
pub mod tracing;
