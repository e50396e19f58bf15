mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;
use adposts::api::handlers::{
    create_location_handler, delete_location_handler, get_location_handler,
    location_list_handler, sizes_handler, update_location_handler,
};

fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/sizes", get(sizes_handler))
        .route(
            "/api/locations",
            get(location_list_handler).post(create_location_handler),
        )
        .route(
            "/api/locations/{id}",
            get(get_location_handler)
                .patch(update_location_handler)
                .delete(delete_location_handler),
        )
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_create_location_with_size(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/locations")
        .json(&json!({ "name": "Main Sidebar", "size_id": "300x250" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["slug"], "main-sidebar");
    assert_eq!(json["name"], "Main Sidebar");
    assert_eq!(json["size_id"], "300x250");
    assert!(json["width"].is_null());
}

#[sqlx::test]
async fn test_create_location_strips_units(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/locations")
        .json(&json!({
            "name": "Banner",
            "slug": "banner",
            "width": "970px",
            "height": "90 px"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["width"], "970");
    assert_eq!(json["height"], "90");
}

#[sqlx::test]
async fn test_create_location_keeps_percent(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/locations")
        .json(&json!({ "name": "Fluid", "width": "100%" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["width"], "100%");
}

#[sqlx::test]
async fn test_create_location_unknown_size(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/locations")
        .json(&json!({ "name": "Odd", "size_id": "123x456" }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_create_location_duplicate_slug(pool: PgPool) {
    let server = make_server(pool.clone());
    common::create_test_location(&pool, "footer", None).await;

    let response = server
        .post("/api/locations")
        .json(&json!({ "name": "Footer" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[sqlx::test]
async fn test_list_and_get_locations(pool: PgPool) {
    let server = make_server(pool.clone());
    let first = common::create_test_location(&pool, "first", Some("728x90")).await;
    common::create_test_location(&pool, "second", None).await;

    let json = server
        .get("/api/locations")
        .await
        .json::<serde_json::Value>();
    assert_eq!(json["items"].as_array().unwrap().len(), 2);

    let response = server.get(&format!("/api/locations/{first}")).await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["slug"], "first");

    server
        .get("/api/locations/999999")
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_update_location(pool: PgPool) {
    let server = make_server(pool.clone());
    let id = common::create_test_location(&pool, "slot", Some("300x250")).await;

    let response = server
        .patch(&format!("/api/locations/{id}"))
        .json(&json!({ "size_id": null, "width": "320px", "name": "Slot" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert!(json["size_id"].is_null());
    assert_eq!(json["width"], "320");
    assert_eq!(json["name"], "Slot");
    assert_eq!(json["slug"], "slot");
}

#[sqlx::test]
async fn test_update_location_unknown_size(pool: PgPool) {
    let server = make_server(pool.clone());
    let id = common::create_test_location(&pool, "slot", None).await;

    let response = server
        .patch(&format!("/api/locations/{id}"))
        .json(&json!({ "size_id": "9x9" }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_delete_location_unassigns_ads(pool: PgPool) {
    let server = make_server(pool.clone());
    let id = common::create_test_location(&pool, "retired", None).await;
    let ad_id = common::create_embed_ad(&pool, "homeless", "x", Some(id)).await;

    server
        .delete(&format!("/api/locations/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let location_id: Option<i64> = sqlx::query_scalar("SELECT location_id FROM ads WHERE id = $1")
        .bind(ad_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(location_id.is_none());

    server
        .delete(&format!("/api/locations/{id}"))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_sizes_endpoint(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/api/sizes").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["enabled"], json!(["300x250", "468x60", "728x90"]));
    assert!(
        json["standard"]
            .as_array()
            .unwrap()
            .iter()
            .any(|s| s["id"] == "160x600")
    );
    assert_eq!(json["image_variants"][0]["name"], "ad-300x250");
    assert_eq!(json["image_variants"][0]["crop"], true);
}
