mod common;

use std::sync::Arc;

use api_scaffold::infrastructure::{DatabaseClient, PgDatabase};
use api_scaffold::routes::router;
use api_scaffold::state::AppState;
use axum_test::TestServer;
use sqlx::PgPool;

#[sqlx::test(migrations = false)]
async fn test_ping_succeeds(pool: PgPool) {
    let database = PgDatabase::from_pool(pool);

    assert!(database.ping().await.is_ok());
}

#[sqlx::test(migrations = false)]
async fn test_ping_fails_after_close(pool: PgPool) {
    let database = PgDatabase::from_pool(pool);
    database.close().await;

    assert!(database.ping().await.is_err());
}

#[sqlx::test(migrations = false)]
async fn test_readiness_with_real_database(pool: PgPool) {
    let state = AppState::new(
        Arc::new(common::test_config()),
        Arc::new(PgDatabase::from_pool(pool)),
    );
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .get("/api/v1/health/database")
        .add_header("x-api-key", common::TEST_API_KEY)
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["database"]["message"], "Connected");
}
