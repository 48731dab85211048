//! 16-bit PCM encoding.
//!
//! Turns engine sample buffers into flat little-endian byte streams plus the
//! format metadata a playback device or file writer needs. This module does
//! no I/O and no channel interleaving.

mod encode;
mod stream;

#[cfg(test)]
mod tests;

pub use encode::{clamp_sample, encode16, BITS_PER_SAMPLE};
pub use stream::PcmStream;
