//! Equal-temperament scales and the melody palette.

use serde::{Deserialize, Serialize};

use crate::error::{check_frequency, EngineError, EngineResult};

/// Base pitch of the default scale (A4).
pub const DEFAULT_BASE_FREQUENCY: f64 = 440.0;

/// Note durations, in seconds, the default palette draws from.
pub const DEFAULT_NOTE_DURATIONS: [f64; 4] = [0.15, 0.2, 0.3, 0.4];

/// Builds frequencies `base * 2^(step/12)` for `step` in `start..end` by
/// `increment`.
///
/// An empty range (`start >= end`) yields an empty scale. `increment` must
/// be positive.
///
/// # Example
/// ```
/// use tinkertone_engine::scale::populate_notes;
///
/// let notes = populate_notes(440.0, -16, 8, 2).unwrap();
/// assert_eq!(notes.len(), 12);
/// ```
pub fn populate_notes(
    base_frequency: f64,
    start_steps: i32,
    end_steps: i32,
    step_increment: i32,
) -> EngineResult<Vec<f64>> {
    check_frequency(base_frequency)?;
    if step_increment <= 0 {
        return Err(EngineError::invalid_param(
            "step_increment",
            format!("must be positive, got {}", step_increment),
        ));
    }

    Ok((start_steps..end_steps)
        .step_by(step_increment as usize)
        .map(|step| semitones_above(base_frequency, step))
        .collect())
}

/// Frequency `steps` equal-tempered semitones away from `base`.
pub fn semitones_above(base: f64, steps: i32) -> f64 {
    base * 2.0_f64.powf(steps as f64 / 12.0)
}

/// The session's melody tables: the scale notes and the allowed durations.
///
/// Built once and then only read. Deserialization goes through
/// [`Palette::new`], so a palette loaded from JSON is validated too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PaletteTables")]
pub struct Palette {
    notes: Vec<f64>,
    durations: Vec<f64>,
}

/// Unvalidated palette as it appears in JSON.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PaletteTables {
    notes: Vec<f64>,
    durations: Vec<f64>,
}

impl TryFrom<PaletteTables> for Palette {
    type Error = EngineError;

    fn try_from(tables: PaletteTables) -> EngineResult<Self> {
        Palette::new(tables.notes, tables.durations)
    }
}

impl Default for Palette {
    fn default() -> Self {
        let notes = (-16..8)
            .step_by(2)
            .map(|step| semitones_above(DEFAULT_BASE_FREQUENCY, step))
            .collect();
        Self {
            notes,
            durations: DEFAULT_NOTE_DURATIONS.to_vec(),
        }
    }
}

impl Palette {
    /// Creates a palette from explicit tables.
    ///
    /// Every note must be a valid frequency and every duration a finite,
    /// non-negative number of seconds. Empty tables are accepted here and
    /// rejected when a melody is composed from them.
    pub fn new(notes: Vec<f64>, durations: Vec<f64>) -> EngineResult<Self> {
        for &note in &notes {
            check_frequency(note)?;
        }
        for &duration in &durations {
            if !duration.is_finite() || duration < 0.0 {
                return Err(EngineError::InvalidDuration { duration });
            }
        }
        Ok(Self { notes, durations })
    }

    /// Builds a palette from a scale description and a duration set.
    pub fn from_scale(
        base_frequency: f64,
        start_steps: i32,
        end_steps: i32,
        step_increment: i32,
        durations: Vec<f64>,
    ) -> EngineResult<Self> {
        let notes = populate_notes(base_frequency, start_steps, end_steps, step_increment)?;
        Self::new(notes, durations)
    }

    /// Scale frequencies in ascending order.
    pub fn notes(&self) -> &[f64] {
        &self.notes
    }

    /// Allowed note durations in seconds.
    pub fn durations(&self) -> &[f64] {
        &self.durations
    }
}
