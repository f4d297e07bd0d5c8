//! HTTP server initialization and runtime setup.
//!
//! Handles database setup, collaborator wiring, and the Axum server lifecycle.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::persistence::SqliteLinkRepository;
use crate::infrastructure::probe::HttpProbe;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (creating the database file if absent)
/// - Schema migrations
/// - Reachability probe
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if database setup, probe construction, or the server
/// bind fails.
pub async fn run(config: Config) -> Result<()> {
    prepare_database_dir(&config.database_url)?;

    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let repository = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));
    let probe = Arc::new(HttpProbe::new(Duration::from_secs(
        config.probe_timeout_secs,
    ))?);

    let link_service = Arc::new(LinkService::new(repository, probe));
    let state = AppState::new(link_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}

/// Creates the parent directory of a file-backed SQLite database.
///
/// In-memory URLs (no `sqlite://` path component) are left untouched.
fn prepare_database_dir(database_url: &str) -> Result<()> {
    if let Some(path) = database_url.strip_prefix("sqlite://")
        && let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_database_dir_creates_parent() {
        let dir = std::env::temp_dir().join("shorter-server-test");
        let _ = std::fs::remove_dir_all(&dir);

        let url = format!("sqlite://{}/links.db", dir.display());
        prepare_database_dir(&url).unwrap();

        assert!(dir.exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_prepare_database_dir_ignores_memory_url() {
        assert!(prepare_database_dir("sqlite::memory:").is_ok());
    }
}
