//! Encoded PCM byte stream with format metadata.

use super::encode::BITS_PER_SAMPLE;

/// A flat 16-bit little-endian PCM byte stream.
///
/// This plus its `{sample_rate, bits_per_sample, channels}` header fields is
/// the full contract handed to a playback or file-writing collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcmStream {
    /// Raw little-endian sample bytes.
    pub data: Vec<u8>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Channel count (metadata only).
    pub channels: u16,
    /// Always 16.
    pub bits_per_sample: u16,
}

impl PcmStream {
    /// Bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per sample frame.
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Bytes per second of audio.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }

    /// Number of sample frames in the stream.
    pub fn num_frames(&self) -> usize {
        self.data.len() / self.block_align() as usize
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames() as f64 / self.sample_rate as f64
    }

    /// Decodes the stream back into 16-bit samples.
    pub fn samples(&self) -> impl Iterator<Item = i16> + '_ {
        self.data
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
    }

    /// BLAKE3 hash of the PCM data, as 64 hex characters.
    pub fn pcm_hash(&self) -> String {
        blake3::hash(&self.data).to_hex().to_string()
    }

    /// True if the stream carries 16-bit samples.
    pub fn is_pcm16(&self) -> bool {
        self.bits_per_sample == BITS_PER_SAMPLE
    }
}
