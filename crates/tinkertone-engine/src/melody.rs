//! Random melody composition from a [`Palette`].

use rand::Rng;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::scale::Palette;
use crate::synthesis::{generate_silence, generate_tone, Sample};
use crate::waveform::Waveform;

/// Silence emitted before the first note, in seconds.
pub const LEAD_IN_SECONDS: f64 = 0.1;

/// A single drawn note.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MelodyNote {
    /// Frequency in Hz, taken from the palette's scale.
    pub frequency: f64,
    /// Duration in seconds, taken from the palette's duration set.
    pub duration: f64,
}

/// A composed melody and the draws that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Melody {
    /// Rendered samples: lead-in silence followed by each note.
    pub samples: Vec<Sample>,
    /// Notes in draw order.
    pub notes: Vec<MelodyNote>,
}

impl Melody {
    /// Consumes the melody, keeping only the samples.
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

/// Composes `note_count` random notes.
///
/// Emits [`LEAD_IN_SECONDS`] of silence, then for each note draws a scale
/// index and then a duration index, each uniformly, and appends a
/// single-frequency tone. Notes are concatenated with no gap.
pub fn compose_random_melody<R: Rng + ?Sized>(
    note_count: usize,
    palette: &Palette,
    waveform: Waveform,
    config: &EngineConfig,
    rng: &mut R,
) -> EngineResult<Melody> {
    let scale = palette.notes();
    let durations = palette.durations();
    if scale.is_empty() {
        return Err(EngineError::invalid_param("scale", "cannot draw notes from an empty scale"));
    }
    if durations.is_empty() {
        return Err(EngineError::invalid_param(
            "durations",
            "cannot draw durations from an empty set",
        ));
    }

    let mut samples = generate_silence(LEAD_IN_SECONDS, config)?;
    let mut notes = Vec::with_capacity(note_count);

    for _ in 0..note_count {
        let frequency = scale[rng.gen_range(0..scale.len())];
        let duration = durations[rng.gen_range(0..durations.len())];

        samples.extend(generate_tone(duration, waveform, &[frequency], config)?);
        notes.push(MelodyNote { frequency, duration });
    }

    tracing::debug!(
        notes = note_count,
        samples = samples.len(),
        waveform = %waveform,
        "composed melody"
    );
    Ok(Melody { samples, notes })
}
