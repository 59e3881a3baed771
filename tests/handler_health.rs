mod common;

use axum_test::TestServer;
use sqlx::PgPool;
use shortify::routes::router;

#[sqlx::test]
async fn test_probe(pool: PgPool) {
    let server = TestServer::new(router(common::create_test_state(pool))).unwrap();

    let response = server.get("/test").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "test request");
}

#[sqlx::test]
async fn test_health_endpoint_success(pool: PgPool) {
    let server = TestServer::new(router(common::create_test_state(pool))).unwrap();

    let response = server.get("/api/v1/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert!(json.get("version").is_some());
}
