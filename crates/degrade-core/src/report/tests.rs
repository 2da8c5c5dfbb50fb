//! Tests for report rendering and persistence

use super::*;
use crate::models::{BlockPolicy, GrayImage, StudyKind};
use crate::sweep::{run_sweep, SweepResult};
use crate::transforms::{quantize, reduce_resolution};
use tempfile::tempdir;

fn test_image() -> GrayImage {
    let data: Vec<u8> = (0..256u32).map(|i| i as u8).collect();
    GrayImage::from_raw(16, 16, data).unwrap()
}

fn quantization_results(image: &GrayImage) -> Vec<SweepResult> {
    run_sweep(image, &[1, 2, 4, 6], 1, quantize).unwrap()
}

// ========================================================================
// Composite Tests
// ========================================================================

#[test]
fn test_composite_dimensions() {
    let img = test_image();
    let results = quantization_results(&img);
    let composite = render_comparison(StudyKind::Quantization, &img, &results).unwrap();

    // Five panels (original + four sweep outputs) in one row
    let panels = 1 + results.len() as u32;
    assert!(composite.width >= panels * img.width);
    assert!(composite.height >= img.height);
    assert_eq!(
        composite.data.len(),
        (composite.width * composite.height) as usize
    );
}

#[test]
fn test_composite_contains_original_panel() {
    let img = test_image();
    let results = quantization_results(&img);
    let composite = render_comparison(StudyKind::Quantization, &img, &results).unwrap();

    // The leftmost panel is the untouched original; find its first row
    // inside the canvas and verify the whole panel matches
    let margin = 12u32;
    let y0 = composite.height - margin - img.height;
    for y in 0..img.height {
        for x in 0..img.width {
            assert_eq!(
                composite.sample(margin + x, y0 + y),
                img.sample(x, y),
                "original panel mismatch at ({}, {})",
                x,
                y
            );
        }
    }
}

#[test]
fn test_composite_rejects_mismatched_panel_dimensions() {
    let img = test_image();
    let odd = GrayImage::from_raw(8, 8, vec![0; 64]).unwrap();
    let results = vec![SweepResult {
        parameter: 2,
        image: odd,
        elapsed_secs: 0.0,
    }];

    let result = render_comparison(StudyKind::Quantization, &img, &results);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("expected 16x16"));
}

#[test]
fn test_composite_is_deterministic() {
    let img = test_image();
    let results = quantization_results(&img);
    let a = render_comparison(StudyKind::Spatial, &img, &results).unwrap();
    let b = render_comparison(StudyKind::Spatial, &img, &results).unwrap();
    assert_eq!(a, b);
}

// ========================================================================
// Plot Tests
// ========================================================================

#[test]
fn test_plot_dimensions_and_determinism() {
    let img = test_image();
    let results = quantization_results(&img);

    let a = render_performance_plot(StudyKind::Quantization, &results).unwrap();
    assert_eq!(a.width, 800);
    assert_eq!(a.height, 500);
    assert_eq!(a.data.len(), (a.width * a.height * 3) as usize);

    let b = render_performance_plot(StudyKind::Quantization, &results).unwrap();
    assert_eq!(a.data, b.data);
}

#[test]
fn test_plot_draws_series_pixels() {
    let results = vec![
        SweepResult {
            parameter: 2,
            image: test_image(),
            elapsed_secs: 0.001,
        },
        SweepResult {
            parameter: 4,
            image: test_image(),
            elapsed_secs: 0.004,
        },
    ];
    let chart = render_performance_plot(StudyKind::Spatial, &results).unwrap();

    // The blue series color must appear somewhere on the canvas
    let series = [31u8, 72, 165];
    let has_series = chart.data.chunks_exact(3).any(|px| px == &series[..]);
    assert!(has_series, "plot should contain series-colored pixels");
}

#[test]
fn test_plot_handles_single_result() {
    let results = vec![SweepResult {
        parameter: 8,
        image: test_image(),
        elapsed_secs: 0.002,
    }];
    assert!(render_performance_plot(StudyKind::Spatial, &results).is_ok());
}

#[test]
fn test_plot_handles_all_zero_timings() {
    let results = vec![
        SweepResult {
            parameter: 1,
            image: test_image(),
            elapsed_secs: 0.0,
        },
        SweepResult {
            parameter: 2,
            image: test_image(),
            elapsed_secs: 0.0,
        },
    ];
    assert!(render_performance_plot(StudyKind::Quantization, &results).is_ok());
}

#[test]
fn test_plot_rejects_empty_results() {
    let result = render_performance_plot(StudyKind::Quantization, &[]);
    assert!(result.is_err());
}

// ========================================================================
// Persistence Tests
// ========================================================================

#[test]
fn test_artifact_paths_follow_naming_convention() {
    let paths = artifact_paths(StudyKind::Quantization, Path::new("."), "lena");
    assert!(paths
        .comparison
        .ends_with("results_quantization/lena_quantization_results.png"));
    assert!(paths
        .plot
        .ends_with("results_quantization/lena_performance_plot.png"));

    let paths = artifact_paths(StudyKind::Spatial, Path::new("."), "barbara");
    assert!(paths
        .comparison
        .ends_with("results_spatial/barbara_spatial_results.png"));
    assert!(paths
        .plot
        .ends_with("results_spatial/barbara_performance_plot.png"));
}

#[test]
fn test_write_study_report_creates_both_artifacts() {
    let dir = tempdir().unwrap();
    let img = test_image();
    let results = run_sweep(&img, &[2, 4, 8], 1, |image, factor| {
        reduce_resolution(image, factor, BlockPolicy::Mean)
    })
    .unwrap();

    let paths =
        write_study_report(StudyKind::Spatial, dir.path(), "cameraman", &img, &results).unwrap();

    assert!(paths.comparison.exists());
    assert!(paths.plot.exists());

    // Both artifacts decode back as PNGs
    let comparison = crate::decoders::decode_gray_image(&paths.comparison).unwrap();
    assert!(comparison.width > img.width);
}

#[test]
fn test_write_study_report_unwritable_root() {
    let img = test_image();
    let results = quantization_results(&img);
    let result = write_study_report(
        StudyKind::Quantization,
        Path::new("/nonexistent/readonly"),
        "x",
        &img,
        &results,
    );
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .contains("Failed to create results directory"));
}
