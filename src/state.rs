//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    /// Creates the state from its service dependencies.
    pub fn new(link_service: Arc<LinkService>) -> Self {
        Self { link_service }
    }
}
