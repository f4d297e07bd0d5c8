//! QR-code PNG rendering.

use std::io::Cursor;

use image::{ImageFormat, Luma};
use qrcode::QrCode;
use serde_json::json;

use crate::error::AppError;

/// Renders `text` as a QR code and returns the encoded PNG bytes.
///
/// Pure function of the input string; no I/O beyond the in-memory encode.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if QR encoding or PNG serialization fails
/// (e.g. the input exceeds QR capacity).
pub fn render_png(text: &str) -> Result<Vec<u8>, AppError> {
    let code = QrCode::new(text.as_bytes()).map_err(|e| {
        AppError::internal("Failed to encode QR code", json!({ "reason": e.to_string() }))
    })?;

    let image = code.render::<Luma<u8>>().build();

    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| {
            AppError::internal("Failed to render PNG", json!({ "reason": e.to_string() }))
        })?;

    Ok(bytes)
}
