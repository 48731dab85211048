//! Declarative render requests.
//!
//! A [`RenderRequest`] names a sound source and an ordered effect chain. It
//! is plain JSON so the CLI (or any other collaborator) can hand the engine
//! a complete job:
//!
//! ```json
//! {
//!   "seed": 42,
//!   "source": { "type": "melody", "notes": 12, "waveform": "sine" },
//!   "effects": [
//!     { "type": "echo", "delay_seconds": 1 },
//!     { "type": "amplitude", "factor": 0.5 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::pcm::PcmStream;
use crate::synthesis::Sample;
use crate::waveform::Waveform;

/// Something that produces a sample buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum Source {
    /// All-zero buffer.
    Silence {
        /// Duration in seconds.
        duration: f64,
    },
    /// Tone summed over one or more frequencies.
    Tone {
        /// Duration in seconds.
        duration: f64,
        /// Frequencies in Hz.
        frequencies: Vec<f64>,
        /// Waveform; the engine's waveform when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        waveform: Option<Waveform>,
    },
    /// White noise.
    WhiteNoise {
        /// Duration in seconds.
        duration: f64,
    },
    /// Random melody drawn from the engine's palette.
    Melody {
        /// Number of notes.
        notes: usize,
        /// Waveform; the engine's waveform when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        waveform: Option<Waveform>,
    },
}

impl Source {
    /// Short name used in logs and RNG stream keys.
    pub fn kind(&self) -> &'static str {
        match self {
            Source::Silence { .. } => "silence",
            Source::Tone { .. } => "tone",
            Source::WhiteNoise { .. } => "white_noise",
            Source::Melody { .. } => "melody",
        }
    }
}

/// Buffer effect in the processing chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum Effect {
    /// Append another rendered source.
    Splice {
        /// Source rendered and appended after the current buffer.
        source: Source,
    },
    /// Single-tap echo.
    Echo {
        /// Delay in whole seconds.
        delay_seconds: u32,
    },
    /// Peak normalization.
    Normalize,
    /// Rate conversion.
    Resample {
        /// Length scale factor (> 0).
        factor: f64,
    },
    /// Amplitude scaling.
    Amplitude {
        /// Multiplier.
        factor: f64,
    },
}

fn default_channels() -> u16 {
    1
}

/// A complete render job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderRequest {
    /// Seed for every stochastic source in the request.
    #[serde(default)]
    pub seed: u32,
    /// Primary source.
    pub source: Source,
    /// Effects applied in order.
    #[serde(default)]
    pub effects: Vec<Effect>,
    /// Channel count written into the PCM metadata.
    #[serde(default = "default_channels")]
    pub channels: u16,
}

impl RenderRequest {
    /// Creates a request with no effects, mono output and seed 0.
    pub fn new(source: Source) -> Self {
        Self {
            seed: 0,
            source,
            effects: Vec::new(),
            channels: default_channels(),
        }
    }

    /// Sets the seed.
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Appends an effect.
    pub fn effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Parses a request from JSON.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        serde_json::from_str(json).map_err(|e| EngineError::invalid_param("request", e.to_string()))
    }

    /// Serializes the request to pretty JSON.
    pub fn to_json_pretty(&self) -> EngineResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| EngineError::invalid_param("request", e.to_string()))
    }
}

/// Result of rendering a request.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    /// Samples after the effect chain, before clamping.
    pub samples: Vec<Sample>,
    /// Encoded 16-bit PCM.
    pub pcm: PcmStream,
    /// BLAKE3 hash of the PCM data.
    pub pcm_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_request() {
        let json = r#"{
            "seed": 42,
            "source": { "type": "melody", "notes": 12, "waveform": "sine" },
            "effects": [
                { "type": "echo", "delay_seconds": 1 },
                { "type": "normalize" },
                { "type": "resample", "factor": 0.5 },
                { "type": "amplitude", "factor": 2.0 },
                { "type": "splice", "source": { "type": "silence", "duration": 0.5 } }
            ]
        }"#;
        let request = RenderRequest::from_json(json).unwrap();

        assert_eq!(request.seed, 42);
        assert_eq!(request.channels, 1);
        assert_eq!(
            request.source,
            Source::Melody {
                notes: 12,
                waveform: Some(Waveform::Sine)
            }
        );
        assert_eq!(request.effects.len(), 5);
        assert_eq!(request.effects[1], Effect::Normalize);
        assert_eq!(
            request.effects[4],
            Effect::Splice {
                source: Source::Silence { duration: 0.5 }
            }
        );
    }

    #[test]
    fn test_defaults() {
        let request =
            RenderRequest::from_json(r#"{"source": {"type": "white_noise", "duration": 1.0}}"#)
                .unwrap();
        assert_eq!(request.seed, 0);
        assert!(request.effects.is_empty());
        assert_eq!(request.source.kind(), "white_noise");
    }

    #[test]
    fn test_rejects_unknown_fields() {
        assert!(RenderRequest::from_json(
            r#"{"source": {"type": "silence", "duration": 1.0, "volume": 2}}"#
        )
        .is_err());
        assert!(RenderRequest::from_json(r#"{"source": {"type": "chirp"}}"#).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let request = RenderRequest::new(Source::Tone {
            duration: 0.5,
            frequencies: vec![440.0, 660.0],
            waveform: None,
        })
        .seed(7)
        .effect(Effect::Echo { delay_seconds: 2 });

        let json = request.to_json_pretty().unwrap();
        assert!(!json.contains("waveform"));
        assert_eq!(RenderRequest::from_json(&json).unwrap(), request);
    }
}
