//! CLI argument definitions for the Tinkertone command-line interface.
//!
//! All `#[derive(Parser)]`, `#[derive(Args)]` and `#[derive(Subcommand)]`
//! types are defined here, keeping `main.rs` focused on dispatch logic.

use clap::{Args, Parser, Subcommand};

use tinkertone_cli::commands::output::OutputOptions;
use tinkertone_cli::input::EngineOptions;
use tinkertone_engine::Waveform;

/// Tinkertone - Deterministic PCM synthesis
#[derive(Parser)]
#[command(name = "tinkertone")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Path to an engine config file (JSON)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Apply every compatibility fix (phase, echo boundary, normalize, noise range, clamping)
    #[arg(long, global = true)]
    pub corrected: bool,

    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Global engine flags as command options.
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            config_path: self.config.clone(),
            corrected: self.corrected,
        }
    }
}

/// Output flags shared by every rendering command.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct OutputArgs {
    /// Output file path (default: a fresh file in the temp directory)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Write headerless PCM instead of WAV
    #[arg(long)]
    pub raw: bool,

    /// Output machine-readable JSON diagnostics (no colored output)
    #[arg(long)]
    pub json: bool,
}

impl From<OutputArgs> for OutputOptions {
    fn from(args: OutputArgs) -> Self {
        OutputOptions {
            path: args.output,
            raw: args.raw,
            json: args.json,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Compose a random melody from the default scale
    Melody {
        /// Number of notes
        #[arg(short, long, default_value_t = 12)]
        notes: usize,

        /// Waveform (square, sine, triangle, sawtooth)
        #[arg(short, long)]
        waveform: Option<Waveform>,

        /// RNG seed (random when omitted)
        #[arg(long)]
        seed: Option<u32>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate white noise
    Noise {
        /// Duration in seconds
        #[arg(short, long, default_value_t = 12.0)]
        duration: f64,

        /// RNG seed (random when omitted)
        #[arg(long)]
        seed: Option<u32>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate a tone from one or more frequencies
    Tone {
        /// Duration in seconds
        #[arg(short, long, default_value_t = 1.0)]
        duration: f64,

        /// Frequency in Hz (repeat for chords)
        #[arg(short, long = "freq", required = true)]
        frequencies: Vec<f64>,

        /// Waveform (square, sine, triangle, sawtooth)
        #[arg(short, long)]
        waveform: Option<Waveform>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Render a JSON render request
    Render {
        /// Path to the request file (JSON)
        request: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the default scale and note durations
    Notes {
        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
