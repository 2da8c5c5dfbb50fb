//! Input file handling and the interactive filename prompt.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Ask the user for an image filename on stdin.
///
/// One filename per run; everything else comes from the study config.
pub fn prompt_for_filename() -> Result<PathBuf, String> {
    print!("Enter the image filename (e.g., barbara.bmp, cameraman.tif, lena.png): ");
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush prompt: {}", e))?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| format!("Failed to read filename: {}", e))?;

    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err("No filename entered".to_string());
    }
    Ok(PathBuf::from(trimmed))
}

/// Input filename without directory or extension, used to derive the
/// deterministic artifact names.
pub fn base_name(input: &Path) -> Result<String, String> {
    Ok(input
        .file_stem()
        .ok_or("Invalid input filename")?
        .to_string_lossy()
        .into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name_strips_extension() {
        assert_eq!(base_name(Path::new("lena.png")).unwrap(), "lena");
        assert_eq!(base_name(Path::new("cameraman.tif")).unwrap(), "cameraman");
    }

    #[test]
    fn test_base_name_strips_directories() {
        assert_eq!(
            base_name(Path::new("scans/august/barbara.bmp")).unwrap(),
            "barbara"
        );
    }

    #[test]
    fn test_base_name_without_extension() {
        assert_eq!(base_name(Path::new("lena")).unwrap(), "lena");
    }
}
