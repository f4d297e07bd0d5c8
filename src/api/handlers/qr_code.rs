//! Handler for QR-code rendering.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Renders the QR-code PNG for a stored short link.
///
/// # Endpoint
///
/// `GET /qr_code/{short_code}`
///
/// # Responses
///
/// - **200 OK** with `Content-Type: image/png` and the raw image bytes.
///   Expired links still render; only resolution enforces expiry.
/// - **404 Not Found** when the code is unknown
pub async fn qr_code_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let png = state.link_service.generate_qr(&short_code).await?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}
