mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use sqlx::PgPool;
use adposts::api::handlers::health_handler;
use adposts::domain::size_catalog::SizeCatalog;
use std::sync::Arc;

#[sqlx::test]
async fn test_health_endpoint_success(pool: PgPool) {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["sizes"]["status"], "ok");
    assert_eq!(
        json["checks"]["sizes"]["message"],
        "Enabled: 300x250, 468x60, 728x90"
    );
}

#[sqlx::test]
async fn test_health_counts_ads(pool: PgPool) {
    common::create_embed_ad(&pool, "one", "x", None).await;
    common::create_embed_ad(&pool, "two", "y", None).await;

    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert_eq!(json["checks"]["database"]["message"], "Connected, 2 ads");
}

#[sqlx::test]
async fn test_health_endpoint_structure(pool: PgPool) {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("database").is_some());
    assert!(json["checks"].get("sizes").is_some());
}

#[sqlx::test]
async fn test_health_lists_sizes_loaded_at_startup(pool: PgPool) {
    let mut state = common::create_test_state(pool);
    state.catalog = Arc::new(SizeCatalog::new(["728x90", "160x600"]));

    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["checks"]["sizes"]["status"], "ok");
    assert_eq!(json["checks"]["sizes"]["message"], "Enabled: 728x90, 160x600");
}
