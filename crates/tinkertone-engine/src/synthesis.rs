//! Buffer synthesis: silence, tones and white noise.
//!
//! All generators produce `floor(duration * sample_rate)` samples and return
//! a fresh buffer owned by the caller.

use rand::Rng;

use crate::config::{EngineConfig, NoiseRange};
use crate::error::{check_frequency, sample_count, EngineResult};
use crate::waveform::Waveform;

/// A signed sample amplitude. Unbounded until it reaches the encoder.
pub type Sample = i32;

/// Generates an all-zero buffer.
pub fn generate_silence(duration_seconds: f64, config: &EngineConfig) -> EngineResult<Vec<Sample>> {
    let num_samples = sample_count(duration_seconds, config.sample_rate)?;
    Ok(vec![0; num_samples])
}

/// Generates a tone by summing `waveform` over `frequencies`.
///
/// Each contribution is scaled by `max_amplitude * volume`, truncated to a
/// 16-bit value and added into a 16-bit accumulator. Overflow wraps; the
/// encoder's clamp is a separate, later step. An empty frequency set yields
/// silence of the requested length.
pub fn generate_tone(
    duration_seconds: f64,
    waveform: Waveform,
    frequencies: &[f64],
    config: &EngineConfig,
) -> EngineResult<Vec<Sample>> {
    let num_samples = sample_count(duration_seconds, config.sample_rate)?;
    for &freq in frequencies {
        check_frequency(freq)?;
    }

    let peak = config.peak();
    let mut tone = Vec::with_capacity(num_samples);
    for position in 0..num_samples {
        let mut value: i16 = 0;
        for &freq in frequencies {
            let contribution = peak * waveform.value_at(freq, position, config);
            value = value.wrapping_add(narrow_to_i16(contribution));
        }
        tone.push(value as Sample);
    }

    tracing::debug!(
        waveform = %waveform,
        voices = frequencies.len(),
        samples = num_samples,
        "generated tone"
    );
    Ok(tone)
}

/// Generates white noise scaled by `max_amplitude * volume`.
///
/// With [`NoiseRange::Narrow`] each sample is drawn from {-1, 0}; with
/// [`NoiseRange::Bipolar`] from {-1, 0, 1}.
pub fn generate_white_noise<R: Rng + ?Sized>(
    duration_seconds: f64,
    config: &EngineConfig,
    rng: &mut R,
) -> EngineResult<Vec<Sample>> {
    let num_samples = sample_count(duration_seconds, config.sample_rate)?;
    let peak = config.peak();

    let noise = (0..num_samples)
        .map(|_| {
            let draw: i32 = match config.compat.noise {
                NoiseRange::Narrow => rng.gen_range(-1..1),
                NoiseRange::Bipolar => rng.gen_range(-1..=1),
            };
            (draw as f64 * peak) as Sample
        })
        .collect();

    tracing::debug!(samples = num_samples, "generated white noise");
    Ok(noise)
}

/// Truncates toward zero and keeps the low 16 bits.
fn narrow_to_i16(value: f64) -> i16 {
    value as i64 as i16
}
