//! Noise command implementation

use anyhow::Result;
use std::process::ExitCode;

use tinkertone_engine::rng::create_component_rng;

use super::output::{report, write_pcm, OutputOptions};
use super::resolve_seed;
use crate::input::{build_engine, EngineOptions};

/// Run the noise command
///
/// # Arguments
/// * `engine_options` - Global engine options
/// * `duration` - Duration in seconds
/// * `seed` - RNG seed (random when absent)
/// * `output` - Output options
pub fn run(
    engine_options: &EngineOptions,
    duration: f64,
    seed: Option<u32>,
    output: &OutputOptions,
) -> Result<ExitCode> {
    let engine = build_engine(engine_options, None)?;
    let seed = resolve_seed(seed);

    let mut rng = create_component_rng(seed, "noise");
    let noise = engine.white_noise(duration, &mut rng)?;

    let pcm = engine.encode(&noise, 1)?;
    let path = write_pcm(&pcm, output)?;
    report("white noise", &path, &pcm, Some(seed), output.json);

    Ok(ExitCode::SUCCESS)
}
