//! Tinkertone CLI library.
//!
//! The command-line shell around `tinkertone-engine`: loads configuration
//! and render requests, runs the engine and persists its PCM output as WAV
//! or raw files.

pub mod commands;
pub mod input;
pub mod logging;
pub mod wav;
