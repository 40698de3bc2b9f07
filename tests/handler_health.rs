mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use std::sync::Arc;
use map_coordinates::api::handlers::health_handler;

use common::{InMemoryCoordinateRepository, StubResolver};

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::create_test_state(
        Arc::new(InMemoryCoordinateRepository::new()),
        Arc::new(StubResolver::default()),
    );
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_endpoint_degraded_when_database_down() {
    let state = common::create_test_state(
        Arc::new(InMemoryCoordinateRepository::unhealthy()),
        Arc::new(StubResolver::default()),
    );
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
    assert_eq!(
        json["checks"]["database"]["message"],
        "Database connection failed"
    );
}
