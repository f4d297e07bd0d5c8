//! Reachability probe contract used during shortening.

use async_trait::async_trait;

/// Checks whether a candidate URL is live before it is shortened.
///
/// Implementations must count exactly an HTTP 200 response as reachable;
/// any other status, a timeout, or a transport error is unreachable.
///
/// # Implementations
///
/// - [`crate::infrastructure::probe::HttpProbe`] - HEAD request via reqwest
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    async fn is_reachable(&self, url: &str) -> bool;
}
