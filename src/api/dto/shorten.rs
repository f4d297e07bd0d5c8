//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    #[validate(length(min = 1, message = "long_url must not be empty"))]
    pub long_url: String,
}

/// Response carrying the short path of the created link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    /// Short path, e.g. `/abc12345`.
    pub shortened_url: String,
}
