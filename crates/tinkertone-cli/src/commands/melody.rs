//! Melody command implementation
//!
//! Composes a random melody from the session palette and saves it.

use anyhow::Result;
use std::process::ExitCode;

use tinkertone_engine::rng::create_component_rng;
use tinkertone_engine::Waveform;

use super::output::{report, write_pcm, OutputOptions};
use super::resolve_seed;
use crate::input::{build_engine, EngineOptions};

/// Run the melody command
///
/// # Arguments
/// * `engine_options` - Global engine options
/// * `notes` - Number of notes to compose
/// * `waveform` - Waveform override
/// * `seed` - RNG seed (random when absent)
/// * `output` - Output options
///
/// # Returns
/// Exit code: 0 on success
pub fn run(
    engine_options: &EngineOptions,
    notes: usize,
    waveform: Option<Waveform>,
    seed: Option<u32>,
    output: &OutputOptions,
) -> Result<ExitCode> {
    let engine = build_engine(engine_options, waveform)?;
    let seed = resolve_seed(seed);

    let mut rng = create_component_rng(seed, "melody");
    let melody = engine.random_melody(notes, &mut rng)?;
    for (index, note) in melody.notes.iter().enumerate() {
        tracing::debug!(index, frequency = note.frequency, duration = note.duration, "note");
    }

    let pcm = engine.encode(&melody.samples, 1)?;
    let path = write_pcm(&pcm, output)?;
    report("melody", &path, &pcm, Some(seed), output.json);

    Ok(ExitCode::SUCCESS)
}
