//! Default study parameter values and their validation/sanitization.

use serde::Deserialize;

use crate::models::{BlockPolicy, BITS_PER_CHANNEL};

/// Parameter lists and timing policy for both degradation studies.
///
/// Kept as an explicit structure rather than module-level constants so the
/// sweep harness can be driven directly in tests.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StudyDefaults {
    /// Bit depths the quantization study sweeps, in presentation order.
    pub bit_depths: Vec<u32>,

    /// Reduction factors the spatial study sweeps, in presentation order.
    pub reduction_factors: Vec<u32>,

    /// Timed repetitions per bit depth (timings are per-run averages).
    pub quantization_repetitions: u32,

    /// Timed repetitions per reduction factor.
    pub spatial_repetitions: u32,

    /// Block representative policy for the spatial study.
    pub block_policy: BlockPolicy,
}

impl Default for StudyDefaults {
    fn default() -> Self {
        Self {
            bit_depths: vec![1, 2, 4, 6],
            reduction_factors: vec![2, 4, 8],
            quantization_repetitions: 1000,
            spatial_repetitions: 100,
            block_policy: BlockPolicy::Mean,
        }
    }
}

impl StudyDefaults {
    /// Drop out-of-range and duplicate parameter values (order preserved),
    /// falling back to the built-in lists when nothing valid remains.
    pub(crate) fn sanitize(&mut self) {
        let fallback = StudyDefaults::default();

        retain_valid(&mut self.bit_depths, |&v| {
            v >= 1 && v <= BITS_PER_CHANNEL
        });
        if self.bit_depths.is_empty() {
            self.bit_depths = fallback.bit_depths;
        }

        retain_valid(&mut self.reduction_factors, |&v| v >= 1);
        if self.reduction_factors.is_empty() {
            self.reduction_factors = fallback.reduction_factors;
        }

        self.quantization_repetitions = self.quantization_repetitions.max(1);
        self.spatial_repetitions = self.spatial_repetitions.max(1);
    }
}

/// Retain values passing `keep`, dropping later duplicates.
fn retain_valid<F>(values: &mut Vec<u32>, keep: F)
where
    F: Fn(&u32) -> bool,
{
    let mut seen = Vec::new();
    values.retain(|v| {
        if !keep(v) || seen.contains(v) {
            return false;
        }
        seen.push(*v);
        true
    });
}
