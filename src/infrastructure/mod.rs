//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`database`] - PostgreSQL connection pool and health probe

pub mod database;

pub use database::{DatabaseClient, PgDatabase};

#[cfg(test)]
pub use database::MockDatabaseClient;
