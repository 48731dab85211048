//! Notes command implementation
//!
//! Prints the session palette.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use crate::input::{build_engine, EngineOptions};

/// Run the notes command
pub fn run(engine_options: &EngineOptions, json: bool) -> Result<ExitCode> {
    let engine = build_engine(engine_options, None)?;
    let palette = engine.palette();

    if json {
        println!("{}", serde_json::to_string(palette)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Scale:".cyan().bold());
    for (index, note) in palette.notes().iter().enumerate() {
        println!("  {:>2}  {:>9.3} Hz", index, note);
    }
    println!("{}", "Durations:".cyan().bold());
    for duration in palette.durations() {
        println!("  {:.2}s", duration);
    }

    Ok(ExitCode::SUCCESS)
}
