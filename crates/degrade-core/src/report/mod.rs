//! Report generation
//!
//! Turns a completed sweep into the two persisted artifacts: the labeled
//! comparison composite and the execution-time plot. Rendering is pure
//! (buffers in, buffers out); only [`write_study_report`] touches the
//! filesystem.

mod composite;
mod glyphs;
mod plot;

#[cfg(test)]
mod tests;

pub use composite::render_comparison;
pub use plot::{render_performance_plot, RgbCanvas};

use std::path::{Path, PathBuf};

use crate::exporters::{export_png_gray8, export_png_rgb8};
use crate::models::{GrayImage, StudyKind};
use crate::sweep::SweepResult;

/// Locations of the two files a study writes.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    /// Labeled side-by-side comparison image
    pub comparison: PathBuf,

    /// Execution-time-vs-parameter plot
    pub plot: PathBuf,
}

/// Deterministic artifact paths for one study run.
///
/// `base_name` is the input filename with its extension stripped.
pub fn artifact_paths(kind: StudyKind, out_root: &Path, base_name: &str) -> ReportPaths {
    let dir = out_root.join(kind.results_dir_name());
    ReportPaths {
        comparison: dir.join(format!("{}_{}_results.png", base_name, kind.artifact_suffix())),
        plot: dir.join(format!("{}_performance_plot.png", base_name)),
    }
}

/// Render and persist both artifacts for a completed sweep.
///
/// The results directory is created if absent. Any render or write failure
/// is fatal; no partially written report is left behind beyond the file the
/// failure occurred in.
pub fn write_study_report(
    kind: StudyKind,
    out_root: &Path,
    base_name: &str,
    original: &GrayImage,
    results: &[SweepResult],
) -> Result<ReportPaths, String> {
    let paths = artifact_paths(kind, out_root, base_name);
    let dir = out_root.join(kind.results_dir_name());
    std::fs::create_dir_all(&dir)
        .map_err(|e| format!("Failed to create results directory {}: {}", dir.display(), e))?;

    let comparison = render_comparison(kind, original, results)?;
    export_png_gray8(
        &paths.comparison,
        comparison.width,
        comparison.height,
        &comparison.data,
    )?;

    let chart = render_performance_plot(kind, results)?;
    export_png_rgb8(&paths.plot, chart.width, chart.height, &chart.data)?;

    Ok(paths)
}
