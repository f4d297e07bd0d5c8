//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use async_trait::async_trait;

/// Repository interface for the persistent short link table.
///
/// Storage-level failures never escape this boundary: implementations log
/// them and collapse the outcome into `bool` / `Option` signals, so the
/// service layer only ever sees "it worked" or "it did not".
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new short link row.
    ///
    /// Returns `false` on any storage error, including a uniqueness violation
    /// on the short code.
    async fn add_url(&self, new_link: NewShortLink) -> bool;

    /// Looks up a link by its short code.
    ///
    /// The lookup is exact-match and case-sensitive; no normalization is
    /// applied. Returns `None` when the code is unknown or the query fails.
    async fn find_by_code(&self, short_code: &str) -> Option<ShortLink>;

    /// Returns `true` when the backing store answers a trivial query.
    async fn health_check(&self) -> bool;
}
