//! Tone command implementation

use anyhow::{bail, Result};
use std::process::ExitCode;

use tinkertone_engine::Waveform;

use super::output::{report, write_pcm, OutputOptions};
use crate::input::{build_engine, EngineOptions};

/// Run the tone command
///
/// # Arguments
/// * `engine_options` - Global engine options
/// * `duration` - Duration in seconds
/// * `frequencies` - Frequencies summed into the tone
/// * `waveform` - Waveform override
/// * `output` - Output options
pub fn run(
    engine_options: &EngineOptions,
    duration: f64,
    frequencies: &[f64],
    waveform: Option<Waveform>,
    output: &OutputOptions,
) -> Result<ExitCode> {
    if frequencies.is_empty() {
        bail!("at least one --freq is required");
    }

    let engine = build_engine(engine_options, waveform)?;
    let tone = engine.tone(duration, frequencies)?;

    let pcm = engine.encode(&tone, 1)?;
    let path = write_pcm(&pcm, output)?;
    report(engine.waveform().name(), &path, &pcm, None, output.json);

    Ok(ExitCode::SUCCESS)
}
