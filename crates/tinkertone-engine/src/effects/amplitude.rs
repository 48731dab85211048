//! Amplitude scaling.

use crate::config::{AmplitudeClamp, EngineConfig};
use crate::error::{EngineError, EngineResult};
use crate::pcm::clamp_sample;
use crate::synthesis::Sample;

/// Multiplies every sample by `factor`, truncating toward zero.
///
/// With [`AmplitudeClamp::Deferred`] results may exceed the 16-bit range
/// and are left for the encoder to saturate; [`AmplitudeClamp::Saturate`]
/// clamps them here.
pub fn scale_amplitude(
    input: &[Sample],
    factor: f64,
    config: &EngineConfig,
) -> EngineResult<Vec<Sample>> {
    if !factor.is_finite() {
        return Err(EngineError::invalid_param(
            "factor",
            format!("must be finite, got {}", factor),
        ));
    }

    let scaled = input.iter().map(|&s| (s as f64 * factor) as Sample);
    Ok(match config.compat.amplitude {
        AmplitudeClamp::Deferred => scaled.collect(),
        AmplitudeClamp::Saturate => scaled.map(|s| clamp_sample(s) as Sample).collect(),
    })
}
