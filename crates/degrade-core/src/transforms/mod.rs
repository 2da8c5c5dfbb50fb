//! Image degradation transforms
//!
//! The two pure pixel transforms this tool studies: intensity quantization
//! and spatial-resolution reduction. Both read an input image and produce a
//! fresh output image of identical dimensions, so comparison panels stay
//! pixel-aligned.

mod quantize;
mod spatial;


pub use quantize::quantize;
pub use spatial::reduce_resolution;
