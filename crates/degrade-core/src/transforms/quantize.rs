//! Intensity-level quantization
//!
//! Reduces the number of distinct gray levels in an image while keeping the
//! output displayable at the original 8-bit depth.

use crate::models::{GrayImage, BITS_PER_CHANNEL, MAX_INTENSITY};

/// Quantize an 8-bit grayscale image down to `bit_depth` bits of precision.
///
/// Floor-bin policy: each sample is assigned to one of `2^bit_depth`
/// uniformly spaced bins spanning the full intensity range, then the bin
/// index is re-expanded back to `[0, 255]` so the precision loss is visible
/// when the output is displayed next to the original.
///
/// `bit_depth == 8` reproduces the input exactly.
pub fn quantize(image: &GrayImage, bit_depth: u32) -> Result<GrayImage, String> {
    if bit_depth < 1 || bit_depth > BITS_PER_CHANNEL {
        return Err(format!(
            "Bit depth must be between 1 and {}, got {}",
            BITS_PER_CHANNEL, bit_depth
        ));
    }

    let levels = 1u32 << bit_depth;
    let max = MAX_INTENSITY as u32;

    let data: Vec<u8> = image
        .data
        .iter()
        .map(|&v| {
            // bin < levels holds for every v <= 255, so no clamp is needed
            let bin = (v as u32) * levels / (max + 1);
            let out = (bin * max + (levels - 1) / 2) / (levels - 1);
            out as u8
        })
        .collect();

    GrayImage::from_raw(image.width, image.height, data)
}
