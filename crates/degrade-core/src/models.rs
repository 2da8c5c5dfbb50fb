//! Data models for degradation studies
//!
//! Core data structures shared by the decoders, transforms, sweep harness,
//! and reporters.

use serde::{Deserialize, Serialize};

/// Number of bits per intensity sample in a decoded image.
pub const BITS_PER_CHANNEL: u32 = 8;

/// Largest representable intensity sample (2^BITS_PER_CHANNEL - 1).
pub const MAX_INTENSITY: u8 = 255;

/// An 8-bit grayscale image stored as a row-major sample buffer.
///
/// Transforms treat a `GrayImage` as immutable: each transform reads its
/// input and produces a fresh output image, so the one image decoded from
/// disk can be shared read-only across all sweep iterations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Intensity samples, row-major, one byte per pixel
    pub data: Vec<u8>,
}

impl GrayImage {
    /// Build an image from a raw sample buffer, validating its length.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, String> {
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(format!(
                "Gray image buffer size mismatch: expected {} samples for {}x{}, got {}",
                expected,
                width,
                height,
                data.len()
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Number of pixels in the image.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Sample at (x, y). Caller guarantees the coordinates are in range.
    #[inline]
    pub fn sample(&self, x: u32, y: u32) -> u8 {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }
}

/// Which degradation study a pipeline run belongs to.
///
/// The kind decides the results directory, the artifact naming suffix, and
/// the wording used in console lines, panel captions, and the plot title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyKind {
    /// Bit-depth quantization study
    Quantization,

    /// Spatial-resolution reduction study
    Spatial,
}

impl StudyKind {
    /// Name of the results directory created next to the working directory.
    pub fn results_dir_name(self) -> &'static str {
        match self {
            StudyKind::Quantization => "results_quantization",
            StudyKind::Spatial => "results_spatial",
        }
    }

    /// Suffix used in the comparison artifact's filename.
    pub fn artifact_suffix(self) -> &'static str {
        match self {
            StudyKind::Quantization => "quantization",
            StudyKind::Spatial => "spatial",
        }
    }

    /// Human-readable name of the swept parameter.
    pub fn parameter_label(self) -> &'static str {
        match self {
            StudyKind::Quantization => "Bit Depth",
            StudyKind::Spatial => "Reduction Factor",
        }
    }

    /// Caption for the untouched input panel.
    pub fn original_label(self) -> &'static str {
        match self {
            StudyKind::Quantization => "Original (8-bit)",
            StudyKind::Spatial => "Original (Full Resolution)",
        }
    }

    /// Title of the performance plot.
    pub fn plot_title(self) -> &'static str {
        match self {
            StudyKind::Quantization => "Performance Analysis: Execution Time vs. Bit Depth",
            StudyKind::Spatial => "Performance Analysis: Execution Time vs. Reduction Factor",
        }
    }
}

/// How a block's representative value is chosen during spatial-resolution
/// reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BlockPolicy {
    /// Integer-rounded mean of all samples in the block.
    ///
    /// Matches area-averaging downsamplers and gives the smoothest panels.
    #[default]
    Mean,

    /// Top-left sample of the block (nearest-neighbor style).
    ///
    /// Cheaper and gives harder pixelation edges.
    TopLeft,
}
