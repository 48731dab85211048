//! Render command implementation
//!
//! Runs a JSON render request through the engine.

use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;

use super::output::{report, write_pcm, OutputOptions};
use crate::input::{build_engine, load_request, EngineOptions};

/// Run the render command
///
/// # Arguments
/// * `engine_options` - Global engine options
/// * `request_path` - Path to the render request (JSON)
/// * `output` - Output options
pub fn run(
    engine_options: &EngineOptions,
    request_path: &str,
    output: &OutputOptions,
) -> Result<ExitCode> {
    let request = load_request(Path::new(request_path))?;
    let engine = build_engine(engine_options, None)?;

    let rendered = engine.render(&request)?;
    tracing::debug!(hash = %rendered.pcm_hash, "render complete");

    let path = write_pcm(&rendered.pcm, output)?;
    report(request.source.kind(), &path, &rendered.pcm, Some(request.seed), output.json);

    Ok(ExitCode::SUCCESS)
}
