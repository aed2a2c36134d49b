//! REST API layer for HTTP request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extractors`] - Validated input and current-user extractors
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - API key gate, CORS, panic recovery and tracing
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
