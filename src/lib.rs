//! # Shorter
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and collaborator traits
//! - **Application Layer** ([`application`]) - Link lifecycle orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence and the HTTP reachability probe
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Format and live-reachability validation before a URL is shortened
//! - Random 8-character short codes with a 7-day link expiry
//! - 301 redirects for active links, 410 for expired ones
//! - QR-code PNG rendering for any stored link
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional - defaults to sqlite://data/shorter.db
//! export DATABASE_URL="sqlite://data/shorter.db"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{NewShortLink, ShortLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
