//! Shared application state injected into handlers and middleware.

use std::sync::Arc;

use crate::config::Config;
use crate::infrastructure::DatabaseClient;

/// Immutable state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub database: Arc<dyn DatabaseClient>,
}

impl AppState {
    pub fn new(config: Arc<Config>, database: Arc<dyn DatabaseClient>) -> Self {
        Self { config, database }
    }
}
