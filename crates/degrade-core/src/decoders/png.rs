//! PNG image decoder

use std::path::Path;

use super::luma601;
use crate::models::GrayImage;

/// Decode a PNG file to 8-bit grayscale
pub(crate) fn decode_png<P: AsRef<Path>>(path: P) -> Result<GrayImage, String> {
    use std::fs::File;
    use std::io::BufReader;

    let file = File::open(path.as_ref()).map_err(|e| format!("Failed to open PNG file: {}", e))?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e| format!("Failed to read PNG info: {}", e))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame_info = reader
        .next_frame(&mut buf)
        .map_err(|e| format!("Failed to read PNG frame: {}", e))?;
    let bytes = &buf[..frame_info.buffer_size()];

    let data = match (color_type, bit_depth) {
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            expect_len(bytes, width, height, 1)?;
            bytes.to_vec()
        }
        (png::ColorType::Grayscale, png::BitDepth::Sixteen) => {
            expect_len(bytes, width, height, 2)?;
            // PNG 16-bit is big-endian; keep the high byte
            bytes.chunks_exact(2).map(|chunk| chunk[0]).collect()
        }
        (png::ColorType::Rgb, png::BitDepth::Eight) => {
            expect_len(bytes, width, height, 3)?;
            bytes
                .chunks_exact(3)
                .map(|rgb| luma601(rgb[0], rgb[1], rgb[2]))
                .collect()
        }
        (png::ColorType::Rgb, png::BitDepth::Sixteen) => {
            expect_len(bytes, width, height, 6)?;
            bytes
                .chunks_exact(6)
                .map(|rgb| luma601(rgb[0], rgb[2], rgb[4]))
                .collect()
        }
        (png::ColorType::Rgba, png::BitDepth::Eight) => {
            expect_len(bytes, width, height, 4)?;
            bytes
                .chunks_exact(4)
                .map(|rgba| luma601(rgba[0], rgba[1], rgba[2]))
                .collect()
        }
        (png::ColorType::Rgba, png::BitDepth::Sixteen) => {
            expect_len(bytes, width, height, 8)?;
            bytes
                .chunks_exact(8)
                .map(|rgba| luma601(rgba[0], rgba[2], rgba[4]))
                .collect()
        }
        (png::ColorType::GrayscaleAlpha, _) => {
            return Err("Grayscale+Alpha PNG not supported".to_string());
        }
        (png::ColorType::Indexed, _) => {
            return Err("Indexed PNG not supported".to_string());
        }
        _ => {
            return Err(format!(
                "Unsupported PNG format: {:?} with bit depth {:?}",
                color_type, bit_depth
            ));
        }
    };

    GrayImage::from_raw(width, height, data)
}

fn expect_len(bytes: &[u8], width: u32, height: u32, bytes_per_pixel: u32) -> Result<(), String> {
    let expected = (width * height * bytes_per_pixel) as usize;
    if bytes.len() != expected {
        return Err(format!(
            "PNG buffer size mismatch: expected {}, got {}",
            expected,
            bytes.len()
        ));
    }
    Ok(())
}
