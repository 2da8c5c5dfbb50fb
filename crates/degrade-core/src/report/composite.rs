//! Comparison composite rendering
//!
//! Lays the original image and every sweep output side by side in a single
//! row on a white canvas, with a caption above each panel. Because both
//! transforms preserve canvas size, all panels share the input's dimensions
//! and stay pixel-aligned.

use crate::models::{GrayImage, StudyKind};
use crate::sweep::SweepResult;

use super::glyphs::{draw_text_gray, text_width, GLYPH_HEIGHT};

const MARGIN: u32 = 12;
const LABEL_BAND: u32 = GLYPH_HEIGHT + 8;
const BACKGROUND: u8 = 255;
const INK: u8 = 0;

/// Render the labeled comparison row as one grayscale canvas.
pub fn render_comparison(
    kind: StudyKind,
    original: &GrayImage,
    results: &[SweepResult],
) -> Result<GrayImage, String> {
    for result in results {
        if result.image.width != original.width || result.image.height != original.height {
            return Err(format!(
                "Comparison panel for parameter {} is {}x{}, expected {}x{}",
                result.parameter,
                result.image.width,
                result.image.height,
                original.width,
                original.height
            ));
        }
    }

    let panel_w = original.width;
    let panel_h = original.height;
    let panels = 1 + results.len() as u32;

    let canvas_w = panels * panel_w + (panels + 1) * MARGIN;
    let canvas_h = panel_h + LABEL_BAND + 2 * MARGIN;
    let mut canvas = vec![BACKGROUND; (canvas_w as usize) * (canvas_h as usize)];

    let mut draw_panel = |index: u32, image: &GrayImage, label: &str| {
        let x0 = MARGIN + index * (panel_w + MARGIN);
        let y0 = MARGIN + LABEL_BAND;

        // Caption centered over the panel
        let label_x = x0 as i64 + (panel_w as i64 - text_width(label) as i64) / 2;
        draw_text_gray(
            &mut canvas,
            canvas_w,
            canvas_h,
            label_x,
            MARGIN as i64 + 2,
            label,
            INK,
        );

        for y in 0..panel_h {
            let src = (y as usize) * (panel_w as usize);
            let dst = ((y0 + y) as usize) * (canvas_w as usize) + x0 as usize;
            canvas[dst..dst + panel_w as usize]
                .copy_from_slice(&image.data[src..src + panel_w as usize]);
        }
    };

    draw_panel(0, original, kind.original_label());
    for (i, result) in results.iter().enumerate() {
        let label = format!("{}: {}", kind.parameter_label(), result.parameter);
        draw_panel(i as u32 + 1, &result.image, &label);
    }

    GrayImage::from_raw(canvas_w, canvas_h, canvas)
}
