//! TIFF image decoder

use std::path::Path;

use super::luma601;
use crate::models::GrayImage;

/// Decode a TIFF file to 8-bit grayscale
pub(crate) fn decode_tiff<P: AsRef<Path>>(path: P) -> Result<GrayImage, String> {
    use std::fs::File;
    use std::io::BufReader;

    let file = File::open(path.as_ref()).map_err(|e| format!("Failed to open TIFF file: {}", e))?;

    let mut decoder = tiff::decoder::Decoder::new(BufReader::new(file))
        .map_err(|e| format!("Failed to create TIFF decoder: {}", e))?;

    let (width, height) = decoder
        .dimensions()
        .map_err(|e| format!("Failed to get TIFF dimensions: {}", e))?;

    let color_type = decoder
        .colortype()
        .map_err(|e| format!("Failed to get TIFF color type: {}", e))?;

    let image_data = decoder
        .read_image()
        .map_err(|e| format!("Failed to read TIFF image data: {}", e))?;

    let channels = match color_type {
        tiff::ColorType::Gray(_) => 1usize,
        tiff::ColorType::RGB(_) => 3,
        tiff::ColorType::RGBA(_) => 4,
        other => return Err(format!("Unsupported TIFF color type: {:?}", other)),
    };

    let data = match image_data {
        tiff::decoder::DecodingResult::U8(buf) => {
            expect_len(buf.len(), width, height, channels)?;
            samples_to_gray(&buf, channels)
        }
        tiff::decoder::DecodingResult::U16(buf) => {
            expect_len(buf.len(), width, height, channels)?;
            // Narrow 16-bit samples by keeping the high byte
            let narrowed: Vec<u8> = buf.iter().map(|&v| (v >> 8) as u8).collect();
            samples_to_gray(&narrowed, channels)
        }
        _ => {
            return Err("Only 8-bit and 16-bit unsigned TIFF samples are supported".to_string());
        }
    };

    GrayImage::from_raw(width, height, data)
}

/// Collapse an 8-bit sample buffer to one gray sample per pixel.
fn samples_to_gray(buf: &[u8], channels: usize) -> Vec<u8> {
    match channels {
        1 => buf.to_vec(),
        // RGBA drops alpha; both RGB layouts share the luma conversion
        _ => buf
            .chunks_exact(channels)
            .map(|px| luma601(px[0], px[1], px[2]))
            .collect(),
    }
}

fn expect_len(len: usize, width: u32, height: u32, channels: usize) -> Result<(), String> {
    let expected = (width as usize) * (height as usize) * channels;
    if len != expected {
        return Err(format!(
            "TIFF buffer size mismatch: expected {}, got {}",
            expected, len
        ));
    }
    Ok(())
}
