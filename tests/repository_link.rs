mod common;

use sqlx::PgPool;
use std::sync::Arc;
use shortify::domain::entities::NewLink;
use shortify::domain::repositories::LinkRepository;
use shortify::error::AppError;
use shortify::infrastructure::persistence::PgLinkRepository;

fn new_link(code: &str, url: &str) -> NewLink {
    NewLink {
        code: code.to_string(),
        long_url: url.to_string(),
        expires_at: None,
    }
}

#[sqlx::test]
async fn test_create_link(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo
        .create(new_link("test123", "https://example.com"))
        .await
        .unwrap();

    assert_eq!(link.code, "test123");
    assert_eq!(link.long_url, "https://example.com");
    assert!(link.expires_at.is_none());
}

#[sqlx::test]
async fn test_create_link_with_expiry(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    let expiry = chrono::DateTime::parse_from_rfc3339("2030-01-01T00:00:00Z")
        .unwrap()
        .with_timezone(&chrono::Utc);

    let link = repo
        .create(NewLink {
            expires_at: Some(expiry),
            ..new_link("expiring", "https://example.com")
        })
        .await
        .unwrap();

    assert_eq!(link.expires_at, Some(expiry));
}

#[sqlx::test]
async fn test_duplicate_code_is_rejected(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool.clone()));

    repo.create(new_link("dup", "https://first.com"))
        .await
        .unwrap();

    let result = repo.create(new_link("dup", "https://second.com")).await;
    assert!(matches!(result, Err(AppError::DuplicateKey { code }) if code == "dup"));

    let stored = repo.find_by_code("dup").await.unwrap().unwrap();
    assert_eq!(stored.long_url, "https://first.com");
    assert_eq!(common::count_links(&pool).await, 1);
}

#[sqlx::test]
async fn test_find_by_code(pool: PgPool) {
    common::create_test_link(&pool, "abc123", "https://example.com").await;

    let repo = PgLinkRepository::new(Arc::new(pool));
    let link = repo.find_by_code("abc123").await.unwrap();

    assert_eq!(link.unwrap().code, "abc123");
}

#[sqlx::test]
async fn test_find_by_code_is_exact(pool: PgPool) {
    common::create_test_link(&pool, "abc123", "https://example.com").await;

    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.find_by_code("ABC123").await.unwrap().is_none());
    assert!(repo.find_by_code("abc").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_find_by_code_not_found(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.find_by_code("notfound").await.unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_count_and_ping(pool: PgPool) {
    common::create_test_link(&pool, "one", "https://example.com/1").await;
    common::create_test_link(&pool, "two", "https://example.com/2").await;

    let repo = PgLinkRepository::new(Arc::new(pool));

    assert_eq!(repo.count().await.unwrap(), 2);
    assert!(repo.ping().await.is_ok());
}

#[sqlx::test]
async fn test_closed_pool_is_store_unavailable(pool: PgPool) {
    pool.close().await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.find_by_code("anything").await;

    assert!(matches!(result, Err(AppError::StoreUnavailable(_))));
}
