//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`              - Create a short link
//! - `GET  /qr_code/{short_code}` - QR-code PNG for a stored link
//! - `GET  /health`               - Health check
//! - `GET  /{short_code}`         - Short link redirect
//!
//! Trailing slashes are accepted on every route via trailing-slash
//! normalization.

use axum::routing::{get, post};
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::{health_handler, qr_code_handler, redirect_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/qr_code/{short_code}", get(qr_code_handler))
        .route("/health", get(health_handler))
        .route("/{short_code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
