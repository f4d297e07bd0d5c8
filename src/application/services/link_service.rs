//! Short link lifecycle service: creation, resolution, QR rendering.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde_json::json;

use crate::domain::entities::NewShortLink;
use crate::domain::probe::ReachabilityProbe;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::qr;
use crate::utils::url_validator::validate_url_format;

/// How long a link stays resolvable after creation.
const LINK_TTL_DAYS: i64 = 7;

/// Service owning the short link lifecycle.
///
/// Validates candidate URLs (format, then live reachability), allocates
/// random short codes, enforces expiry on resolution, and renders QR images
/// for stored links.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    probe: Arc<dyn ReachabilityProbe>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(repository: Arc<dyn LinkRepository>, probe: Arc<dyn ReachabilityProbe>) -> Self {
        Self { repository, probe }
    }

    /// Shortens a candidate URL and returns the allocated short code.
    ///
    /// # Validation
    ///
    /// 1. The URL must parse into a scheme and a host
    /// 2. A HEAD probe against the URL must observe exactly HTTP 200
    ///
    /// Nothing is persisted unless both checks pass.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidFormat`] if the URL does not parse
    /// - [`AppError::Unreachable`] if the probe does not observe HTTP 200
    /// - [`AppError::Persistence`] if code allocation or the insert fails
    pub async fn shorten(&self, long_url: String) -> Result<String, AppError> {
        validate_url_format(&long_url)?;

        if !self.probe.is_reachable(&long_url).await {
            return Err(AppError::unreachable(
                "Target URL is not reachable",
                json!({ "url": long_url }),
            ));
        }

        let short_code = self.generate_unique_code().await?;

        let created_at = Utc::now();
        let new_link = NewShortLink {
            short_code: short_code.clone(),
            original_url: long_url,
            created_at,
            expires_at: created_at + Duration::days(LINK_TTL_DAYS),
        };

        if self.repository.add_url(new_link).await {
            Ok(short_code)
        } else {
            Err(AppError::persistence(
                "Failed to store short link",
                json!({ "code": short_code }),
            ))
        }
    }

    /// Resolves a short code to its original URL.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if no link matches the code
    /// - [`AppError::Expired`] if the link's expiry has passed; the row
    ///   itself stays stored
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        let link = self
            .repository
            .find_by_code(short_code)
            .await
            .ok_or_else(|| {
                AppError::not_found("Short code not found", json!({ "code": short_code }))
            })?;

        if link.is_expired() {
            return Err(AppError::expired(
                "Short link has expired",
                json!({ "code": short_code, "expired_at": link.expires_at }),
            ));
        }

        Ok(link.original_url)
    }

    /// Renders a QR-code PNG for the link's original URL.
    ///
    /// Expiry is not checked here: an expired link no longer redirects but
    /// its QR image stays renderable.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if no link matches the code
    /// - [`AppError::Internal`] if QR encoding or PNG rendering fails
    pub async fn generate_qr(&self, short_code: &str) -> Result<Vec<u8>, AppError> {
        let link = self
            .repository
            .find_by_code(short_code)
            .await
            .ok_or_else(|| {
                AppError::not_found("Short code not found", json!({ "code": short_code }))
            })?;

        qr::render_png(&link.original_url)
    }

    /// Reports whether the backing store is reachable.
    pub async fn health_check(&self) -> bool {
        self.repository.health_check().await
    }

    /// Generates a short code not currently present in the store.
    ///
    /// Attempts up to 10 times before failing.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code();

            if self.repository.find_by_code(&code).await.is_none() {
                return Ok(code);
            }
        }

        Err(AppError::persistence(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}
