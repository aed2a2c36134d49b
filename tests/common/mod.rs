#![allow(dead_code)]

use api_scaffold::config::Config;
use api_scaffold::error::AppError;
use api_scaffold::infrastructure::DatabaseClient;
use api_scaffold::state::AppState;
use async_trait::async_trait;
use std::sync::Arc;

pub const TEST_API_KEY: &str = "test-api-key";

/// Database stand-in whose ping outcome is fixed.
pub struct StubDatabase {
    pub healthy: bool,
}

#[async_trait]
impl DatabaseClient for StubDatabase {
    async fn ping(&self) -> Result<(), AppError> {
        if self.healthy {
            Ok(())
        } else {
            Err(AppError::internal("connection refused"))
        }
    }
}

pub fn test_config() -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        api_key: TEST_API_KEY.to_string(),
        allowed_origins: vec!["https://app.example.com".to_string()],
        swagger_enabled: true,
        database_url: "postgresql://localhost/test".to_string(),
        database_schema: None,
        db_max_connections: 1,
        db_connect_timeout: 1,
        db_idle_timeout: 1,
        db_max_lifetime: 1,
    }
}

pub fn create_test_state_with(config: Config, healthy: bool) -> AppState {
    AppState::new(Arc::new(config), Arc::new(StubDatabase { healthy }))
}

pub fn create_test_state() -> AppState {
    create_test_state_with(test_config(), true)
}
