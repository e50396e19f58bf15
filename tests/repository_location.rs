mod common;

use sqlx::PgPool;
use std::sync::Arc;
use adposts::domain::entities::{LocationPatch, NewLocation};
use adposts::domain::repositories::LocationRepository;
use adposts::infrastructure::persistence::PgLocationRepository;

fn new_location(slug: &str) -> NewLocation {
    NewLocation {
        slug: slug.to_string(),
        name: slug.to_uppercase(),
        size_id: None,
        width: None,
        height: None,
    }
}

#[sqlx::test]
async fn test_create_and_find_by_slug(pool: PgPool) {
    let repo = PgLocationRepository::new(Arc::new(pool));

    let created = repo
        .create(NewLocation {
            size_id: Some("728x90".to_string()),
            ..new_location("header")
        })
        .await
        .unwrap();

    let found = repo.find_by_slug("header").await.unwrap().unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.name, "HEADER");
    assert_eq!(found.size_id.as_deref(), Some("728x90"));
    assert!(repo.find_by_slug("footer").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let repo = PgLocationRepository::new(Arc::new(pool));

    let created = repo.create(new_location("side")).await.unwrap();

    assert!(repo.find_by_id(created.id).await.unwrap().is_some());
    assert!(repo.find_by_id(999_999).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_duplicate_slug_conflicts(pool: PgPool) {
    let repo = PgLocationRepository::new(Arc::new(pool));

    repo.create(new_location("dup")).await.unwrap();
    let result = repo.create(new_location("dup")).await;

    assert!(matches!(
        result,
        Err(adposts::error::AppError::Conflict { .. })
    ));
}

#[sqlx::test]
async fn test_list_locations(pool: PgPool) {
    let repo = PgLocationRepository::new(Arc::new(pool));

    repo.create(new_location("one")).await.unwrap();
    repo.create(new_location("two")).await.unwrap();

    let slugs: Vec<String> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.slug)
        .collect();

    assert_eq!(slugs.len(), 2);
    assert!(slugs.contains(&"one".to_string()));
    assert!(slugs.contains(&"two".to_string()));
}

#[sqlx::test]
async fn test_update_patch_semantics(pool: PgPool) {
    let repo = PgLocationRepository::new(Arc::new(pool));

    let created = repo
        .create(NewLocation {
            size_id: Some("300x250".to_string()),
            width: Some("300".to_string()),
            ..new_location("box")
        })
        .await
        .unwrap();

    let updated = repo
        .update(
            created.id,
            LocationPatch {
                size_id: Some(None),
                height: Some(Some("250".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(updated.size_id.is_none());
    assert_eq!(updated.width.as_deref(), Some("300"));
    assert_eq!(updated.height.as_deref(), Some("250"));
    assert_eq!(updated.name, "BOX");
}

#[sqlx::test]
async fn test_update_missing_location(pool: PgPool) {
    let repo = PgLocationRepository::new(Arc::new(pool));

    let result = repo.update(999_999, LocationPatch::default()).await;

    assert!(matches!(
        result,
        Err(adposts::error::AppError::NotFound { .. })
    ));
}

#[sqlx::test]
async fn test_delete_location(pool: PgPool) {
    let repo = PgLocationRepository::new(Arc::new(pool.clone()));

    let created = repo.create(new_location("temp")).await.unwrap();
    let ad_id = common::create_embed_ad(&pool, "placed", "x", Some(created.id)).await;

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());

    // Ads survive with no location.
    assert_eq!(common::counters(&pool, ad_id).await, (0, 0));
}
