//! Tinkertone CLI - Command-line front end for the synthesis engine
//!
//! Renders melodies, noise, tones and JSON render requests to WAV or raw
//! PCM files.

use clap::Parser;
use std::process::ExitCode;

use tinkertone_cli::{commands, logging};

mod cli_args;

use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let engine_options = cli.engine_options();
    let result = match cli.command {
        Commands::Melody {
            notes,
            waveform,
            seed,
            output,
        } => commands::melody::run(&engine_options, notes, waveform, seed, &output.into()),
        Commands::Noise {
            duration,
            seed,
            output,
        } => commands::noise::run(&engine_options, duration, seed, &output.into()),
        Commands::Tone {
            duration,
            frequencies,
            waveform,
            output,
        } => commands::tone::run(&engine_options, duration, &frequencies, waveform, &output.into()),
        Commands::Render { request, output } => {
            commands::render::run(&engine_options, &request, &output.into())
        }
        Commands::Notes { json } => commands::notes::run(&engine_options, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_melody_defaults() {
        let cli = Cli::try_parse_from(["tinkertone", "melody"]).unwrap();
        assert!(!cli.corrected);
        assert!(!cli.verbose);
        match cli.command {
            Commands::Melody {
                notes,
                waveform,
                seed,
                output,
            } => {
                assert_eq!(notes, 12);
                assert_eq!(waveform, None);
                assert_eq!(seed, None);
                assert!(output.output.is_none());
                assert!(!output.raw);
            }
            _ => panic!("expected melody command"),
        }
    }

    #[test]
    fn test_cli_parses_melody_options() {
        let cli = Cli::try_parse_from([
            "tinkertone",
            "melody",
            "--notes",
            "4",
            "--waveform",
            "saw",
            "--seed",
            "42",
            "-o",
            "out.wav",
            "--corrected",
        ])
        .unwrap();
        assert!(cli.corrected);
        match cli.command {
            Commands::Melody {
                notes,
                waveform,
                seed,
                output,
            } => {
                assert_eq!(notes, 4);
                assert_eq!(waveform, Some(tinkertone_engine::Waveform::Sawtooth));
                assert_eq!(seed, Some(42));
                assert_eq!(output.output.as_deref(), Some("out.wav"));
            }
            _ => panic!("expected melody command"),
        }
    }

    #[test]
    fn test_cli_parses_noise_default_duration() {
        let cli = Cli::try_parse_from(["tinkertone", "noise", "--raw"]).unwrap();
        match cli.command {
            Commands::Noise {
                duration, output, ..
            } => {
                assert_eq!(duration, 12.0);
                assert!(output.raw);
            }
            _ => panic!("expected noise command"),
        }
    }

    #[test]
    fn test_cli_parses_tone_chord() {
        let cli = Cli::try_parse_from([
            "tinkertone",
            "tone",
            "--freq",
            "440",
            "--freq",
            "660",
            "--duration",
            "0.5",
        ])
        .unwrap();
        match cli.command {
            Commands::Tone {
                duration,
                frequencies,
                ..
            } => {
                assert_eq!(duration, 0.5);
                assert_eq!(frequencies, vec![440.0, 660.0]);
            }
            _ => panic!("expected tone command"),
        }
    }

    #[test]
    fn test_cli_tone_requires_frequency() {
        assert!(Cli::try_parse_from(["tinkertone", "tone"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_waveform() {
        assert!(Cli::try_parse_from(["tinkertone", "melody", "--waveform", "pulse"]).is_err());
    }

    #[test]
    fn test_cli_parses_render_with_global_config() {
        let cli = Cli::try_parse_from([
            "tinkertone",
            "render",
            "job.json",
            "--config",
            "engine.json",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.config.as_deref(), Some("engine.json"));
        assert!(cli.verbose);
        match cli.command {
            Commands::Render { request, .. } => assert_eq!(request, "job.json"),
            _ => panic!("expected render command"),
        }
    }
}
