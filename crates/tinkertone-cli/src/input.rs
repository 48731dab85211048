//! Loading engine configuration and render requests from disk.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use tinkertone_engine::{Compat, Engine, EngineConfig, RenderRequest, Waveform};

/// Global options shared by every command.
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    /// Path to a JSON `EngineConfig`.
    pub config_path: Option<String>,
    /// Apply every compatibility fix on top of the loaded config.
    pub corrected: bool,
}

/// Loads an engine configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<EngineConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    EngineConfig::from_json(&json)
        .with_context(|| format!("Invalid engine config: {}", path.display()))
}

/// Loads a render request from a JSON file.
pub fn load_request(path: &Path) -> Result<RenderRequest> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file: {}", path.display()))?;
    RenderRequest::from_json(&json)
        .with_context(|| format!("Invalid render request: {}", path.display()))
}

/// Builds the session engine from the global options.
pub fn build_engine(options: &EngineOptions, waveform: Option<Waveform>) -> Result<Engine> {
    let mut config = match options.config_path.as_deref() {
        Some(path) => load_config(Path::new(path))?,
        None => EngineConfig::default(),
    };
    if options.corrected {
        config.compat = Compat::corrected();
    }

    tracing::debug!(?config, "engine configuration");
    let engine = Engine::new(config)?;
    Ok(match waveform {
        Some(waveform) => engine.with_waveform(waveform),
        None => engine,
    })
}
