//! RIFF/WAVE container for engine PCM streams.
//!
//! Writes canonical 44-byte-header PCM WAV files with no timestamps or
//! variable metadata, so identical streams produce identical files.

use std::io::{self, Write};

use tinkertone_engine::PcmStream;

/// Size of the canonical PCM WAV header.
pub const HEADER_LEN: usize = 44;

/// Data chunk size and RIFF chunk size for `data_len` bytes of PCM.
fn chunk_sizes(data_len: usize) -> io::Result<(u32, u32)> {
    let too_large = || io::Error::new(io::ErrorKind::InvalidInput, "PCM data exceeds 4 GiB");
    let data_size = u32::try_from(data_len).map_err(|_| too_large())?;
    // Total file size minus 8 bytes for the RIFF header
    let riff_size = data_size.checked_add(36).ok_or_else(too_large)?;
    Ok((data_size, riff_size))
}

/// Writes a complete WAV file for `pcm` to a writer.
pub fn write_wav<W: Write>(writer: &mut W, pcm: &PcmStream) -> io::Result<()> {
    let (data_size, riff_size) = chunk_sizes(pcm.data.len())?;

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&riff_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&pcm.channels.to_le_bytes())?;
    writer.write_all(&pcm.sample_rate.to_le_bytes())?;
    writer.write_all(&pcm.byte_rate().to_le_bytes())?;
    writer.write_all(&pcm.block_align().to_le_bytes())?;
    writer.write_all(&pcm.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(&pcm.data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(pcm: &PcmStream) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(HEADER_LEN + pcm.data.len());
    write_wav(&mut buffer, pcm)?;
    Ok(buffer)
}
