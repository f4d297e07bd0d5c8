//! SQLite implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::error;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;

/// Row shape of the `urls` table.
#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    original_url: String,
    short_code: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl From<UrlRow> for ShortLink {
    fn from(row: UrlRow) -> Self {
        ShortLink::new(
            row.id,
            row.short_code,
            row.original_url,
            row.created_at,
            row.expires_at,
        )
    }
}

/// SQLite repository for link storage and retrieval.
///
/// Storage errors are logged and converted into `bool` / `Option` outcomes
/// at this boundary; they never propagate to the service layer. The table
/// itself is created by the idempotent startup migration
/// (`migrations/0001_create_urls.sql`).
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn add_url(&self, new_link: NewShortLink) -> bool {
        let result = sqlx::query(
            r#"
            INSERT INTO urls (original_url, short_code, created_at, expires_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&new_link.original_url)
        .bind(&new_link.short_code)
        .bind(new_link.created_at)
        .bind(new_link.expires_at)
        .execute(self.pool.as_ref())
        .await;

        match result {
            Ok(_) => true,
            Err(e) => {
                error!("Failed to insert short link {}: {e}", new_link.short_code);
                false
            }
        }
    }

    async fn find_by_code(&self, short_code: &str) -> Option<ShortLink> {
        let result = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_code, created_at, expires_at
            FROM urls
            WHERE short_code = ?1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await;

        match result {
            Ok(row) => row.map(ShortLink::from),
            Err(e) => {
                error!("Failed to look up short code {short_code}: {e}");
                None
            }
        }
    }

    async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }
}
