//! Candidate URL format validation.

use serde_json::json;
use url::Url;

use crate::error::AppError;

/// Checks that a candidate URL parses into a scheme and a host.
///
/// This is a pure syntax check; liveness is the reachability probe's job.
/// Schemes other than HTTP(S) pass here as long as they carry a host and
/// are rejected later by the probe.
///
/// # Errors
///
/// Returns [`AppError::InvalidFormat`] when the input does not parse or
/// has no network location.
pub fn validate_url_format(input: &str) -> Result<(), AppError> {
    let parsed = Url::parse(input)
        .map_err(|e| AppError::invalid_format("Invalid URL format", json!({ "reason": e.to_string() })))?;

    if parsed.host_str().is_none() {
        return Err(AppError::invalid_format(
            "URL must have a host",
            json!({ "url": input }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_https_url_is_valid() {
        assert!(validate_url_format("https://example.com").is_ok());
    }

    #[test]
    fn test_http_url_with_path_and_query_is_valid() {
        assert!(validate_url_format("http://example.com:8080/path?q=1").is_ok());
    }

    #[test]
    fn test_non_http_scheme_with_host_is_well_formed() {
        // Format-wise acceptable; the reachability probe rejects it later.
        assert!(validate_url_format("ftp://example.com/file.txt").is_ok());
    }

    #[test]
    fn test_missing_scheme_is_invalid() {
        let result = validate_url_format("example.com");
        assert!(matches!(
            result.unwrap_err(),
            AppError::InvalidFormat { .. }
        ));
    }

    #[test]
    fn test_garbage_is_invalid() {
        assert!(validate_url_format("not_a_valid_url").is_err());
    }

    #[test]
    fn test_empty_string_is_invalid() {
        assert!(validate_url_format("").is_err());
    }

    #[test]
    fn test_scheme_without_host_is_invalid() {
        assert!(validate_url_format("mailto:user@example.com").is_err());
    }

    #[test]
    fn test_empty_host_is_invalid() {
        assert!(validate_url_format("https://").is_err());
    }
}
