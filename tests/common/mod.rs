#![allow(dead_code)]

use adposts::application::services::{
    AdRenderer, AdSelector, AdService, AuthService, CounterService, DeliveryService,
    ImageService, LocationService, hash_token,
};
use adposts::domain::size_catalog::SizeCatalog;
use adposts::infrastructure::media::MediaUrls;
use adposts::infrastructure::persistence::{
    PgAdRepository, PgImageRepository, PgLocationRepository, PgTokenRepository,
};
use adposts::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_SECRET: &str = "test-signing-secret";
pub const MEDIA_BASE_URL: &str = "https://cdn.example.com/uploads";

pub async fn create_test_location(pool: &PgPool, slug: &str, size_id: Option<&str>) -> i64 {
    sqlx::query_scalar("INSERT INTO locations (slug, name, size_id) VALUES ($1, $2, $3) RETURNING id")
        .bind(slug)
        .bind(slug.to_uppercase())
        .bind(size_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_custom_location(
    pool: &PgPool,
    slug: &str,
    width: Option<&str>,
    height: Option<&str>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO locations (slug, name, width, height) VALUES ($1, $1, $2, $3) RETURNING id",
    )
    .bind(slug)
    .bind(width)
    .bind(height)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_image(pool: &PgPool, file_name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO ad_images (file_name) VALUES ($1) RETURNING id")
        .bind(file_name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_embed_ad(
    pool: &PgPool,
    slug: &str,
    content: &str,
    location_id: Option<i64>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO ads (slug, title, content, location_id) VALUES ($1, $1, $2, $3) RETURNING id",
    )
    .bind(slug)
    .bind(content)
    .bind(location_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_image_ad(
    pool: &PgPool,
    slug: &str,
    title: &str,
    image_id: i64,
    link: Option<&str>,
    location_id: i64,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO ads (slug, title, image_id, link, location_id) \
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(slug)
    .bind(title)
    .bind(image_id)
    .bind(link)
    .bind(location_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn set_published(pool: &PgPool, ad_id: i64, published: bool) {
    sqlx::query("UPDATE ads SET published = $2 WHERE id = $1")
        .bind(ad_id)
        .bind(published)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn set_counters(pool: &PgPool, ad_id: i64, views: i64, clicks: i64) {
    sqlx::query("UPDATE ads SET view_count = $2, click_count = $3 WHERE id = $1")
        .bind(ad_id)
        .bind(views)
        .bind(clicks)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn counters(pool: &PgPool, ad_id: i64) -> (i64, i64) {
    sqlx::query_as("SELECT view_count, click_count FROM ads WHERE id = $1")
        .bind(ad_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Inserts an admin token and returns the raw value to send as Bearer.
pub async fn create_admin_token(pool: &PgPool, name: &str) -> String {
    let raw = format!("raw-{name}");
    sqlx::query("INSERT INTO admin_tokens (name, token_hash) VALUES ($1, $2)")
        .bind(name)
        .bind(hash_token(TEST_SECRET, &raw))
        .execute(pool)
        .await
        .unwrap();
    raw
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    let ad_repo = Arc::new(PgAdRepository::new(pool.clone()));
    let location_repo = Arc::new(PgLocationRepository::new(pool.clone()));
    let image_repo = Arc::new(PgImageRepository::new(pool.clone()));
    let token_repo = Arc::new(PgTokenRepository::new(pool));

    let catalog = Arc::new(SizeCatalog::default());
    let location_service = Arc::new(LocationService::new(location_repo));
    let counter_service = Arc::new(CounterService::new(ad_repo.clone()));
    let delivery_service = Arc::new(DeliveryService::new(
        location_service.clone(),
        AdSelector::new(ad_repo.clone()),
        AdRenderer::new(image_repo.clone(), MediaUrls::new(MEDIA_BASE_URL), catalog.clone()),
        counter_service.clone(),
    ));

    AppState {
        delivery_service,
        counter_service,
        ad_service: Arc::new(AdService::new(ad_repo)),
        location_service,
        image_service: Arc::new(ImageService::new(
            image_repo,
            MediaUrls::new(MEDIA_BASE_URL),
            catalog.clone(),
        )),
        auth_service: Arc::new(AuthService::new(token_repo, TEST_SECRET.to_string())),
        catalog,
    }
}
