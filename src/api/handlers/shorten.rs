//! Handler for the link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "shortened_url": "/abc12345" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when the URL is malformed, unreachable, or the
/// link could not be stored; the error body names the failure kind.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let code = state.link_service.shorten(payload.long_url).await?;

    Ok(Json(ShortenResponse {
        shortened_url: format!("/{code}"),
    }))
}
