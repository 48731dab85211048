//! Peak normalization.

use crate::config::{EngineConfig, NormalizeMode};
use crate::synthesis::Sample;

/// Full-scale target for normalization.
pub const FULL_SCALE: i32 = i16::MAX as i32;

/// Rescales `input` according to `config.compat.normalize`.
///
/// [`NormalizeMode::IntegerScale`] takes the largest sample (starting from
/// zero), computes `max / 32767` with integer division and multiplies every
/// sample by it, so any buffer whose maximum is below 32767 becomes silence.
/// [`NormalizeMode::PeakRatio`] scales by `32767 / peak_abs` so the loudest
/// sample lands on full scale; all-zero input is returned unchanged.
pub fn normalize(input: &[Sample], config: &EngineConfig) -> Vec<Sample> {
    match config.compat.normalize {
        NormalizeMode::IntegerScale => integer_scale(input),
        NormalizeMode::PeakRatio => peak_ratio(input),
    }
}

fn integer_scale(input: &[Sample]) -> Vec<Sample> {
    let max = input.iter().copied().fold(0, Sample::max);
    let scale = max / FULL_SCALE;
    if scale == 0 && input.iter().any(|&s| s != 0) {
        tracing::warn!(max, "integer normalization scale is zero; output is silent");
    }
    input.iter().map(|&s| s.saturating_mul(scale)).collect()
}

fn peak_ratio(input: &[Sample]) -> Vec<Sample> {
    let peak = input
        .iter()
        .map(|&s| (s as i64).abs())
        .max()
        .unwrap_or(0);
    if peak == 0 {
        return input.to_vec();
    }

    let ratio = FULL_SCALE as f64 / peak as f64;
    input
        .iter()
        .map(|&s| (s as f64 * ratio).round() as Sample)
        .collect()
}
