//! BMP image decoder
//!
//! BMP files go through the `image` crate, which handles the format's many
//! header and palette variants; the decoded frame is collapsed to 8-bit
//! luma.

use std::path::Path;

use crate::models::GrayImage;

/// Decode a BMP file to 8-bit grayscale
pub(crate) fn decode_bmp<P: AsRef<Path>>(path: P) -> Result<GrayImage, String> {
    let reader = image::ImageReader::open(path.as_ref())
        .map_err(|e| format!("Failed to open BMP file: {}", e))?;

    let decoded = reader
        .decode()
        .map_err(|e| format!("Failed to decode BMP file: {}", e))?;

    let luma = decoded.to_luma8();
    let (width, height) = (luma.width(), luma.height());

    GrayImage::from_raw(width, height, luma.into_raw())
}
