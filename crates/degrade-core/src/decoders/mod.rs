//! Image decoders for various formats
//!
//! Support for PNG, TIFF, and BMP input files. Every decoder produces an
//! 8-bit grayscale [`GrayImage`]; color PNG/TIFF sources are converted with
//! BT.601 luma weights, matching the common grayscale-read behavior of
//! image processing toolkits.

mod bmp;
mod png;
mod tiff;


use std::path::Path;

use crate::models::GrayImage;

/// Decode an image file into an 8-bit grayscale image.
pub fn decode_gray_image<P: AsRef<Path>>(path: P) -> Result<GrayImage, String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(format!("Image file '{}' not found", path.display()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| "No file extension found".to_string())?;

    match extension.as_str() {
        "png" => png::decode_png(path),
        "tif" | "tiff" => tiff::decode_tiff(path),
        "bmp" => bmp::decode_bmp(path),
        _ => Err(format!("Unsupported file format: {}", extension)),
    }
}

/// BT.601 luma from 8-bit RGB, rounded to the nearest integer.
#[inline]
pub(crate) fn luma601(r: u8, g: u8, b: u8) -> u8 {
    let y = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
    y.round().min(255.0) as u8
}
