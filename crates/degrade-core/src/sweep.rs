//! Parameter sweep harness
//!
//! Drives a transform across an ordered list of parameter values, timing
//! each run. The iteration order is part of the contract: it decides the
//! left-to-right panel order in the comparison image and the x-axis order
//! in the performance plot.

use std::time::Instant;

use crate::models::GrayImage;
use crate::verbose_println;

/// Outcome of one sweep iteration.
#[derive(Debug, Clone)]
pub struct SweepResult {
    /// The parameter value this entry was produced with
    pub parameter: u32,

    /// The transformed image
    pub image: GrayImage,

    /// Average wall-clock seconds per transform invocation
    pub elapsed_secs: f64,
}

/// Run `transform` once per parameter value, in order, timing each run.
///
/// Each value is timed over `repetitions` back-to-back invocations and the
/// recorded duration is the per-invocation average; the image kept for the
/// reporter is the output of the final timed invocation. Only the transform
/// calls sit inside the timed region.
///
/// The parameter lists driving this harness are pre-validated constants, so
/// a transform error is a defect: the sweep fails fast instead of skipping
/// the offending value.
pub fn run_sweep<F>(
    image: &GrayImage,
    values: &[u32],
    repetitions: u32,
    transform: F,
) -> Result<Vec<SweepResult>, String>
where
    F: Fn(&GrayImage, u32) -> Result<GrayImage, String>,
{
    if repetitions < 1 {
        return Err(format!("Repetitions must be >= 1, got {}", repetitions));
    }

    let mut results = Vec::with_capacity(values.len());

    for &value in values {
        let start = Instant::now();
        let mut output = transform(image, value)?;
        for _ in 1..repetitions {
            output = transform(image, value)?;
        }
        let elapsed_secs = start.elapsed().as_secs_f64() / repetitions as f64;

        verbose_println!(
            "[degrade] parameter {} took {:.6}s per run over {} runs",
            value,
            elapsed_secs,
            repetitions
        );

        results.push(SweepResult {
            parameter: value,
            image: output,
            elapsed_secs,
        });
    }

    Ok(results)
}
