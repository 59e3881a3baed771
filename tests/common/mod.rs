#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use shortify::application::services::LinkService;
use shortify::application::services::link_service::DEFAULT_CODE_ATTEMPTS;
use shortify::infrastructure::persistence::PgLinkRepository;
use shortify::state::AppState;

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO urls (short_code, long_url) VALUES ($1, $2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_links(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_service(pool: PgPool) -> Arc<LinkService> {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    Arc::new(LinkService::new(repo, DEFAULT_CODE_ATTEMPTS))
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(create_test_service(pool))
}
