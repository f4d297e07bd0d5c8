//! ShortLink entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping between a short code and its original URL.
///
/// Links are immutable after creation: they are written once by the shorten
/// operation and only ever read afterwards. Expired links stay stored; expiry
/// is enforced at resolution time, not by deletion.
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        id: i64,
        short_code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_code,
            original_url,
            created_at,
            expires_at,
        }
    }

    /// Returns true once the link's expiry time has passed.
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// Input data for creating a new link.
///
/// Timestamps are assigned by the service so that the invariant
/// `expires_at = created_at + 7 days` is established in one place.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_short_link_creation() {
        let now = Utc::now();
        let link = ShortLink::new(
            1,
            "abc12345".to_string(),
            "https://example.com".to_string(),
            now,
            now + Duration::days(7),
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.short_code, "abc12345");
        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.created_at, now);
        assert_eq!(link.expires_at, now + Duration::days(7));
    }

    #[test]
    fn test_fresh_link_is_not_expired() {
        let now = Utc::now();
        let link = ShortLink::new(
            1,
            "abc12345".to_string(),
            "https://example.com".to_string(),
            now,
            now + Duration::days(7),
        );
        assert!(!link.is_expired());
    }

    #[test]
    fn test_link_with_past_expiry_is_expired() {
        let now = Utc::now();
        let link = ShortLink::new(
            1,
            "abc12345".to_string(),
            "https://example.com".to_string(),
            now - Duration::days(8),
            now - Duration::seconds(1),
        );
        assert!(link.is_expired());
    }

    #[test]
    fn test_link_expiring_in_the_future_is_active() {
        let now = Utc::now();
        let link = ShortLink::new(
            1,
            "abc12345".to_string(),
            "https://example.com".to_string(),
            now - Duration::days(6),
            now + Duration::hours(1),
        );
        assert!(!link.is_expired());
    }
}
