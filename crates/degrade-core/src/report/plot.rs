//! Performance plot rendering
//!
//! Draws the execution-time-vs-parameter chart onto an RGB canvas: white
//! background, light grid, black axes with tick labels, and a blue series
//! line with square markers. All geometry is integer pixel math, so the
//! output is byte-deterministic for a given set of timings.

use crate::models::StudyKind;
use crate::sweep::SweepResult;

use super::glyphs::{draw_text_rgb, text_width, GLYPH_HEIGHT};

const CANVAS_W: u32 = 800;
const CANVAS_H: u32 = 500;
const MARGIN_LEFT: u32 = 96;
const MARGIN_RIGHT: u32 = 36;
const MARGIN_TOP: u32 = 40;
const MARGIN_BOTTOM: u32 = 64;

const BACKGROUND: [u8; 3] = [255, 255, 255];
const GRID: [u8; 3] = [210, 210, 210];
const INK: [u8; 3] = [0, 0, 0];
const SERIES: [u8; 3] = [31, 72, 165];

const Y_TICKS: u32 = 5;
const MARKER_HALF: i64 = 3;

/// An interleaved 8-bit RGB pixel buffer.
#[derive(Debug, Clone)]
pub struct RgbCanvas {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl RgbCanvas {
    fn filled(width: u32, height: u32, color: [u8; 3]) -> Self {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for _ in 0..width * height {
            data.extend_from_slice(&color);
        }
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    fn put(&mut self, x: i64, y: i64, color: [u8; 3]) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 3;
        self.data[offset..offset + 3].copy_from_slice(&color);
    }

    fn line(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: [u8; 3]) {
        // Bresenham
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            self.put(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn text(&mut self, x: i64, y: i64, label: &str, color: [u8; 3]) {
        let (w, h) = (self.width, self.height);
        draw_text_rgb(&mut self.data, w, h, x, y, label, color);
    }
}

/// Render the timing-vs-parameter chart for one completed sweep.
///
/// X positions follow the numeric parameter values; the y axis starts at
/// zero and is headroomed above the slowest run.
pub fn render_performance_plot(
    kind: StudyKind,
    results: &[SweepResult],
) -> Result<RgbCanvas, String> {
    if results.is_empty() {
        return Err("Cannot render a performance plot with no sweep results".to_string());
    }

    let mut canvas = RgbCanvas::filled(CANVAS_W, CANVAS_H, BACKGROUND);

    let plot_left = MARGIN_LEFT as i64;
    let plot_right = (CANVAS_W - MARGIN_RIGHT) as i64;
    let plot_top = MARGIN_TOP as i64;
    let plot_bottom = (CANVAS_H - MARGIN_BOTTOM) as i64;

    let x_min = results
        .iter()
        .map(|r| r.parameter as f64)
        .fold(f64::INFINITY, f64::min);
    let x_max = results
        .iter()
        .map(|r| r.parameter as f64)
        .fold(f64::NEG_INFINITY, f64::max);
    let y_max = results
        .iter()
        .map(|r| r.elapsed_secs)
        .fold(0.0f64, f64::max);
    // Headroom keeps the slowest marker clear of the plot edge; an all-zero
    // sweep still gets a usable axis
    let y_top = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

    let x_of = |value: f64| -> i64 {
        if x_max > x_min {
            let t = (value - x_min) / (x_max - x_min);
            plot_left + (t * (plot_right - plot_left) as f64).round() as i64
        } else {
            (plot_left + plot_right) / 2
        }
    };
    let y_of = |secs: f64| -> i64 {
        let t = secs / y_top;
        plot_bottom - (t * (plot_bottom - plot_top) as f64).round() as i64
    };

    // Grid and y tick labels
    for tick in 0..=Y_TICKS {
        let secs = y_top * tick as f64 / Y_TICKS as f64;
        let y = y_of(secs);
        if tick > 0 {
            canvas.line(plot_left, y, plot_right, y, GRID);
        }
        let label = format_seconds(secs);
        let x = plot_left - text_width(&label) as i64 - 8;
        canvas.text(x, y - (GLYPH_HEIGHT as i64) / 2, &label, INK);
    }

    // Vertical grid and x tick labels at each data point
    for result in results {
        let x = x_of(result.parameter as f64);
        canvas.line(x, plot_top, x, plot_bottom, GRID);
        let label = result.parameter.to_string();
        canvas.text(
            x - text_width(&label) as i64 / 2,
            plot_bottom + 6,
            &label,
            INK,
        );
    }

    // Axes on top of the grid
    canvas.line(plot_left, plot_top, plot_left, plot_bottom, INK);
    canvas.line(plot_left, plot_bottom, plot_right, plot_bottom, INK);

    // Series polyline and markers, in sweep order
    for pair in results.windows(2) {
        canvas.line(
            x_of(pair[0].parameter as f64),
            y_of(pair[0].elapsed_secs),
            x_of(pair[1].parameter as f64),
            y_of(pair[1].elapsed_secs),
            SERIES,
        );
    }
    for result in results {
        let cx = x_of(result.parameter as f64);
        let cy = y_of(result.elapsed_secs);
        for dy in -MARKER_HALF..=MARKER_HALF {
            for dx in -MARKER_HALF..=MARKER_HALF {
                canvas.put(cx + dx, cy + dy, SERIES);
            }
        }
    }

    // Title and axis labels
    let title = kind.plot_title();
    canvas.text(
        (CANVAS_W as i64 - text_width(title) as i64) / 2,
        10,
        title,
        INK,
    );
    let x_label = kind.parameter_label();
    canvas.text(
        plot_left + ((plot_right - plot_left) - text_width(x_label) as i64) / 2,
        (CANVAS_H - MARGIN_BOTTOM / 2) as i64,
        x_label,
        INK,
    );
    canvas.text(
        8,
        plot_top - GLYPH_HEIGHT as i64 - 6,
        "Execution Time (Seconds)",
        INK,
    );

    Ok(canvas)
}

/// Fixed-point seconds label, wide enough for microsecond-scale timings.
fn format_seconds(secs: f64) -> String {
    format!("{:.6}", secs)
}
