#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use shorter::application::services::LinkService;
use shorter::domain::probe::ReachabilityProbe;
use shorter::infrastructure::persistence::SqliteLinkRepository;
use shorter::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Probe stand-in with a fixed answer, so tests never touch the network.
pub struct StubProbe {
    reachable: bool,
}

#[async_trait]
impl ReachabilityProbe for StubProbe {
    async fn is_reachable(&self, _url: &str) -> bool {
        self.reachable
    }
}

pub fn create_test_state(pool: SqlitePool, reachable: bool) -> AppState {
    let repository = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));
    let probe = Arc::new(StubProbe { reachable });

    AppState::new(Arc::new(LinkService::new(repository, probe)))
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) {
    let now = Utc::now();
    insert_link(pool, code, url, now, now + Duration::days(7)).await;
}

pub async fn create_expired_link(pool: &SqlitePool, code: &str, url: &str) {
    let now = Utc::now();
    insert_link(pool, code, url, now - Duration::days(8), now - Duration::days(1)).await;
}

async fn insert_link(
    pool: &SqlitePool,
    code: &str,
    url: &str,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
) {
    sqlx::query(
        "INSERT INTO urls (original_url, short_code, created_at, expires_at) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(url)
    .bind(code)
    .bind(created_at)
    .bind(expires_at)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
