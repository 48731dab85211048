//! Persisting engine output and reporting it.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use tinkertone_engine::PcmStream;

use crate::wav;

/// Where and how a command writes its audio.
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    /// Destination path; a unique file in the temp dir when absent.
    pub path: Option<String>,
    /// Write bare PCM bytes instead of a WAV file.
    pub raw: bool,
    /// Print a machine-readable JSON report instead of colored text.
    pub json: bool,
}

impl OutputOptions {
    fn extension(&self) -> &'static str {
        if self.raw {
            "pcm"
        } else {
            "wav"
        }
    }
}

/// Writes `pcm` to the configured destination and returns the path used.
pub fn write_pcm(pcm: &PcmStream, options: &OutputOptions) -> Result<PathBuf> {
    let path = match options.path.as_deref() {
        Some(path) => PathBuf::from(path),
        None => unique_temp_path(options.extension())?,
    };

    let bytes = if options.raw {
        pcm.data.clone()
    } else {
        wav::write_wav_to_vec(pcm).context("Failed to build WAV container")?
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&path, &bytes).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote audio");
    Ok(path)
}

/// Reserves a fresh `tinkertone-*.{ext}` file in the system temp dir.
fn unique_temp_path(extension: &str) -> Result<PathBuf> {
    let file = tempfile::Builder::new()
        .prefix("tinkertone-")
        .suffix(&format!(".{}", extension))
        .tempfile()
        .context("Failed to create temp file")?;
    let (_, path) = file.keep().context("Failed to keep temp file")?;
    Ok(path)
}

/// Prints the result of a command in the selected format.
pub fn report(what: &str, path: &Path, pcm: &PcmStream, seed: Option<u32>, json: bool) {
    if json {
        let report = serde_json::json!({
            "kind": what,
            "path": path.display().to_string(),
            "sample_rate": pcm.sample_rate,
            "channels": pcm.channels,
            "bits_per_sample": pcm.bits_per_sample,
            "frames": pcm.num_frames(),
            "duration_seconds": pcm.duration_seconds(),
            "pcm_hash": pcm.pcm_hash(),
            "seed": seed,
        });
        println!("{}", report);
        return;
    }

    println!("{} {}", "Generated:".cyan().bold(), what);
    println!("  {} {}", "Output:".dimmed(), path.display());
    println!(
        "  {} {:.3}s @ {} Hz, {} ch, {}-bit",
        "Format:".dimmed(),
        pcm.duration_seconds(),
        pcm.sample_rate,
        pcm.channels,
        pcm.bits_per_sample
    );
    if let Some(seed) = seed {
        println!("  {} {}", "Seed:".dimmed(), seed);
    }
    println!("  {} {}", "PCM hash:".dimmed(), &pcm.pcm_hash()[..16]);
}
