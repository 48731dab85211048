//! Clamp-and-pack encoder.

use crate::error::{EngineError, EngineResult};
use crate::synthesis::Sample;

use super::stream::PcmStream;

/// Bit depth of every encoded stream.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Saturates a sample to the representable 16-bit range.
///
/// The upper bound is `i16::MAX` (32767) rather than the 32768 amplitude
/// constant, so a sample at exactly 32768 stays positive instead of
/// wrapping to -32768.
pub fn clamp_sample(sample: Sample) -> i16 {
    sample.clamp(i16::MIN as Sample, i16::MAX as Sample) as i16
}

/// Encodes samples as little-endian 16-bit PCM.
///
/// `sample_rate` and `channels` are carried as metadata only; the buffer is
/// written sample by sample in order.
pub fn encode16(samples: &[Sample], sample_rate: u32, channels: u16) -> EngineResult<PcmStream> {
    if sample_rate == 0 {
        return Err(EngineError::invalid_param("sample_rate", "must be greater than 0"));
    }
    if channels == 0 {
        return Err(EngineError::invalid_param("channels", "must be at least 1"));
    }

    let mut data = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        data.extend_from_slice(&clamp_sample(sample).to_le_bytes());
    }

    Ok(PcmStream {
        data,
        sample_rate,
        channels,
        bits_per_sample: BITS_PER_SAMPLE,
    })
}
