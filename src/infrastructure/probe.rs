//! HTTP HEAD reachability probe.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, redirect};
use std::time::Duration;
use tracing::debug;

use crate::domain::probe::ReachabilityProbe;

/// Probes target URLs with a bounded-timeout HEAD request.
///
/// Redirects are not followed, so a 301/302 answer counts as unreachable;
/// only a direct HTTP 200 qualifies. The probe runs on the async runtime
/// and suspends only the request's own task while waiting.
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    /// Builds a probe whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ReachabilityProbe for HttpProbe {
    async fn is_reachable(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            Ok(response) => response.status() == StatusCode::OK,
            Err(e) => {
                debug!("Reachability probe failed for {url}: {e}");
                false
            }
        }
    }
}
