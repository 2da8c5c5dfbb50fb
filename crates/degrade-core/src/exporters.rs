//! Image exporters
//!
//! PNG writers for the report artifacts: grayscale for comparison
//! composites, RGB for the performance plot.

use std::path::Path;

/// Export an 8-bit grayscale buffer as a PNG file.
pub fn export_png_gray8<P: AsRef<Path>>(
    path: P,
    width: u32,
    height: u32,
    data: &[u8],
) -> Result<(), String> {
    export_png(path, width, height, data, png::ColorType::Grayscale, 1)
}

/// Export an 8-bit RGB buffer as a PNG file.
pub fn export_png_rgb8<P: AsRef<Path>>(
    path: P,
    width: u32,
    height: u32,
    data: &[u8],
) -> Result<(), String> {
    export_png(path, width, height, data, png::ColorType::Rgb, 3)
}

fn export_png<P: AsRef<Path>>(
    path: P,
    width: u32,
    height: u32,
    data: &[u8],
    color: png::ColorType,
    channels: u32,
) -> Result<(), String> {
    use std::fs::File;
    use std::io::BufWriter;

    let expected = (width as usize) * (height as usize) * (channels as usize);
    if data.len() != expected {
        return Err(format!(
            "PNG export buffer size mismatch: expected {} bytes for {}x{}, got {}",
            expected,
            width,
            height,
            data.len()
        ));
    }

    let file =
        File::create(path.as_ref()).map_err(|e| format!("Failed to create PNG file: {}", e))?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(color);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| format!("Failed to write PNG header: {}", e))?;
    png_writer
        .write_image_data(data)
        .map_err(|e| format!("Failed to write PNG image data: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_export_gray8_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gray.png");
        let data: Vec<u8> = (0..64).map(|i| i * 4).collect();

        export_png_gray8(&path, 8, 8, &data).unwrap();

        let decoded = crate::decoders::decode_gray_image(&path).unwrap();
        assert_eq!(decoded.width, 8);
        assert_eq!(decoded.height, 8);
        assert_eq!(decoded.data, data);
    }

    #[test]
    fn test_export_rgb8_succeeds() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rgb.png");
        let data = vec![128u8; 4 * 4 * 3];

        let result = export_png_rgb8(&path, 4, 4, &data);
        assert!(result.is_ok(), "RGB export should succeed: {:?}", result);
        assert!(path.exists(), "PNG file should exist");
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_export_rejects_wrong_buffer_size() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.png");

        let result = export_png_gray8(&path, 4, 4, &[0u8; 15]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("size mismatch"));
    }

    #[test]
    fn test_export_invalid_path() {
        let result = export_png_gray8("/nonexistent/directory/out.png", 2, 2, &[0u8; 4]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to create PNG file"));
    }
}
