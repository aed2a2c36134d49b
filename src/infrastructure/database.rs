//! PostgreSQL connection pool wrapper.
//!
//! The pool is opened once at startup and closed after the HTTP server has
//! drained, so every request shares the same set of connections.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::config::Config;
use crate::error::AppError;

/// Database operations needed by the HTTP layer.
///
/// # Implementations
///
/// - [`PgDatabase`] - PostgreSQL pool
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatabaseClient: Send + Sync {
    /// Round-trips a trivial query to prove a connection can be used.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when no connection can be acquired or
    /// the query fails.
    async fn ping(&self) -> Result<(), AppError>;
}

/// Shared PostgreSQL pool.
#[derive(Clone)]
pub struct PgDatabase {
    pool: PgPool,
}

impl PgDatabase {
    /// Opens a pool using the connection string and pool settings of `config`.
    ///
    /// When a schema is configured it is put on the `search_path` of every
    /// connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed or the first connection
    /// cannot be established.
    pub async fn connect(config: &Config) -> Result<Self, sqlx::Error> {
        let mut options = PgConnectOptions::from_str(&config.database_url)?;
        if let Some(schema) = &config.database_schema {
            options = options.options([("search_path", schema.as_str())]);
        }

        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
            .idle_timeout(Duration::from_secs(config.db_idle_timeout))
            .max_lifetime(Duration::from_secs(config.db_max_lifetime))
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Wraps an existing pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Closes every connection. Further acquires fail immediately.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}

#[async_trait]
impl DatabaseClient for PgDatabase {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
