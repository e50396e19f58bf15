use sqlx::PgPool;
use std::sync::Arc;
use adposts::application::services::hash_token;
use adposts::domain::repositories::TokenRepository;
use adposts::infrastructure::persistence::PgTokenRepository;

const SECRET: &str = "repository-test-secret";

#[sqlx::test]
async fn test_create_token(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));
    let hash = hash_token(SECRET, "deploy-raw");

    let token = repo.create_token("deploy", &hash).await.unwrap();

    assert_eq!(token.name, "deploy");
    assert_eq!(token.token_hash, hash);
    assert!(!token.is_revoked());
    assert!(token.last_used_at.is_none());
}

#[sqlx::test]
async fn test_validate_token(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));
    let hash = hash_token(SECRET, "valid-raw");

    repo.create_token("valid", &hash).await.unwrap();

    assert!(repo.validate_token(&hash).await.unwrap());
    assert!(!repo.validate_token(&hash_token(SECRET, "other")).await.unwrap());
    assert!(!repo.validate_token(&hash_token("other-secret", "valid-raw")).await.unwrap());
}

#[sqlx::test]
async fn test_validate_token_revoked(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));
    let hash = hash_token(SECRET, "revoked-raw");

    let token = repo.create_token("revoked", &hash).await.unwrap();
    repo.revoke_token(token.id).await.unwrap();

    assert!(!repo.validate_token(&hash).await.unwrap());
}

#[sqlx::test]
async fn test_update_last_used(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));
    let hash = hash_token(SECRET, "used-raw");

    let token = repo.create_token("used", &hash).await.unwrap();
    repo.update_last_used(&hash).await.unwrap();

    let reloaded = repo.find_by_id(token.id).await.unwrap().unwrap();
    assert!(reloaded.last_used_at.is_some());
}

#[sqlx::test]
async fn test_update_last_used_skips_revoked(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));
    let hash = hash_token(SECRET, "stale-raw");

    let token = repo.create_token("stale", &hash).await.unwrap();
    repo.revoke_token(token.id).await.unwrap();
    repo.update_last_used(&hash).await.unwrap();

    let reloaded = repo.find_by_id(token.id).await.unwrap().unwrap();
    assert!(reloaded.last_used_at.is_none());
}

#[sqlx::test]
async fn test_list_tokens_newest_first(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    repo.create_token("first", &hash_token(SECRET, "1")).await.unwrap();
    repo.create_token("second", &hash_token(SECRET, "2")).await.unwrap();
    repo.create_token("third", &hash_token(SECRET, "3")).await.unwrap();

    let names: Vec<String> = repo
        .list_tokens()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();

    assert_eq!(names, ["third", "second", "first"]);
}

#[sqlx::test]
async fn test_find_by_name_returns_latest(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    repo.create_token("ci", &hash_token(SECRET, "old")).await.unwrap();
    let newer = repo.create_token("ci", &hash_token(SECRET, "new")).await.unwrap();

    let found = repo.find_by_name("ci").await.unwrap().unwrap();

    assert_eq!(found.id, newer.id);
    assert!(repo.find_by_name("missing").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_duplicate_hash_conflicts(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));
    let hash = hash_token(SECRET, "same");

    repo.create_token("a", &hash).await.unwrap();
    let result = repo.create_token("b", &hash).await;

    assert!(matches!(
        result,
        Err(adposts::error::AppError::Conflict { .. })
    ));
}

#[sqlx::test]
async fn test_revoke_is_idempotent(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    let token = repo
        .create_token("twice", &hash_token(SECRET, "twice"))
        .await
        .unwrap();

    repo.revoke_token(token.id).await.unwrap();
    let first_revocation = repo.find_by_id(token.id).await.unwrap().unwrap().revoked_at;
    repo.revoke_token(token.id).await.unwrap();
    let second_revocation = repo.find_by_id(token.id).await.unwrap().unwrap().revoked_at;

    assert!(first_revocation.is_some());
    assert_eq!(first_revocation, second_revocation);
}
