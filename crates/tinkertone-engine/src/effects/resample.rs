//! Rate conversion by a scale factor.

use crate::config::MAX_BUFFER_SAMPLES;
use crate::error::{EngineError, EngineResult};
use crate::synthesis::Sample;

/// Resamples `input` so its length becomes roughly `len * factor`.
///
/// `factor` is the output/input length ratio, the reciprocal of the step
/// through the input: 0.5 halves the buffer and 2.0 doubles it.
///
/// A factor below one downsamples by averaging blocks of
/// `round(1 / factor)` input samples into one output sample (a trailing
/// partial block is averaged over what it holds). A factor of one or more
/// reads input index `floor(k / factor)` for output `k`, repeating
/// samples to stretch the buffer. A factor of exactly one is the identity.
///
/// Fails with [`EngineError::InvalidParameter`] if `factor` is not a
/// positive finite number or the output would exceed
/// [`MAX_BUFFER_SAMPLES`].
pub fn resample(input: &[Sample], factor: f64) -> EngineResult<Vec<Sample>> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(EngineError::invalid_param(
            "factor",
            format!("must be a positive finite number, got {}", factor),
        ));
    }
    let expected_len = (input.len() as f64 * factor).ceil();
    if expected_len > MAX_BUFFER_SAMPLES as f64 {
        return Err(EngineError::invalid_param(
            "factor",
            format!(
                "stretching {} samples by {} exceeds the {} sample buffer limit",
                input.len(),
                factor,
                MAX_BUFFER_SAMPLES
            ),
        ));
    }

    let inverse = 1.0 / factor;
    let output = if inverse > 1.0 {
        let block = (inverse.round() as usize).max(1);
        input
            .chunks(block)
            .map(|chunk| {
                let sum: i64 = chunk.iter().map(|&s| s as i64).sum();
                (sum / chunk.len() as i64) as Sample
            })
            .collect()
    } else {
        let mut output = Vec::with_capacity(expected_len as usize);
        let mut k = 0usize;
        loop {
            let index = (k as f64 / factor) as usize;
            match input.get(index) {
                Some(&sample) => output.push(sample),
                None => break,
            }
            k += 1;
        }
        output
    };

    tracing::debug!(
        factor,
        input = input.len(),
        output = output.len(),
        "resampled buffer"
    );
    Ok(output)
}
