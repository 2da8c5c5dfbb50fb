//! Spatial-resolution reduction
//!
//! Coarsens an image's effective resolution without changing its canvas
//! size: the image is partitioned into `factor x factor` blocks, each block
//! is collapsed to a single representative value, and that value is written
//! back into every cell of the block.

use crate::models::{BlockPolicy, GrayImage};

/// Reduce the effective spatial resolution of an image by `factor`.
///
/// The output has the same dimensions as the input. Boundary blocks where
/// the dimensions are not an exact multiple of `factor` shrink to the
/// remaining rows/columns (`min(factor, remaining)`), so no block ever reads
/// out of range.
///
/// `factor == 1` is the identity under either block policy.
pub fn reduce_resolution(
    image: &GrayImage,
    factor: u32,
    policy: BlockPolicy,
) -> Result<GrayImage, String> {
    if factor < 1 {
        return Err(format!("Reduction factor must be >= 1, got {}", factor));
    }

    let width = image.width as usize;
    let height = image.height as usize;
    let factor = factor as usize;
    let mut data = vec![0u8; width * height];

    for block_y in (0..height).step_by(factor) {
        let block_h = factor.min(height - block_y);
        for block_x in (0..width).step_by(factor) {
            let block_w = factor.min(width - block_x);

            let value = match policy {
                BlockPolicy::Mean => block_mean(image, block_x, block_y, block_w, block_h),
                BlockPolicy::TopLeft => image.sample(block_x as u32, block_y as u32),
            };

            for y in block_y..block_y + block_h {
                let row = &mut data[y * width + block_x..y * width + block_x + block_w];
                row.fill(value);
            }
        }
    }

    GrayImage::from_raw(image.width, image.height, data)
}

/// Integer-rounded mean of one block.
fn block_mean(image: &GrayImage, x0: usize, y0: usize, w: usize, h: usize) -> u8 {
    let width = image.width as usize;
    let mut sum = 0u32;
    for y in y0..y0 + h {
        for &v in &image.data[y * width + x0..y * width + x0 + w] {
            sum += v as u32;
        }
    }
    let count = (w * h) as u32;
    ((sum + count / 2) / count) as u8
}
