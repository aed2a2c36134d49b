//! Utility functions shared across the application.
//!
//! - [`validation`] - Flattening of validation failure trees into messages

pub mod validation;
