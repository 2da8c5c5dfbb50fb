//! Study driver: decode, sweep, report.

use std::path::Path;

use degrade_core::config::StudyDefaults;
use degrade_core::decoders::decode_gray_image;
use degrade_core::models::StudyKind;
use degrade_core::report::write_study_report;
use degrade_core::sweep::run_sweep;
use degrade_core::transforms::{quantize, reduce_resolution};

use super::input::base_name;

/// Run one degradation study end to end.
///
/// Decodes the input once, drives the sweep harness over the configured
/// parameter list (timing each value), prints the per-value console lines,
/// and writes both report artifacts under `out_root`.
pub fn run_study(
    kind: StudyKind,
    input: &Path,
    out_root: &Path,
    defaults: &StudyDefaults,
) -> Result<(), String> {
    let image = decode_gray_image(input)?;
    println!("  Image: {}x{}, 8-bit grayscale", image.width, image.height);

    let results = match kind {
        StudyKind::Quantization => run_sweep(
            &image,
            &defaults.bit_depths,
            defaults.quantization_repetitions,
            quantize,
        )?,
        StudyKind::Spatial => {
            let policy = defaults.block_policy;
            run_sweep(
                &image,
                &defaults.reduction_factors,
                defaults.spatial_repetitions,
                |img, factor| reduce_resolution(img, factor, policy),
            )?
        }
    };

    for result in &results {
        println!(
            "{}: {}, Execution Time: {:.6} seconds",
            kind.parameter_label(),
            result.parameter,
            result.elapsed_secs
        );
    }

    let base = base_name(input)?;
    let paths = write_study_report(kind, out_root, &base, &image, &results)?;

    println!("\nSaved comparison image: {}", paths.comparison.display());
    println!("Saved performance plot: {}", paths.plot.display());

    Ok(())
}
