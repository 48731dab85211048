//! Engine configuration.
//!
//! Every synthesis and effect call receives an [`EngineConfig`] explicitly;
//! nothing in the engine reads ambient state. The config is plain data and
//! round-trips through JSON so the CLI can load it from disk.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44100;

/// Maximum amplitude constant, 2^15.
///
/// One past the largest representable 16-bit value; the encoder saturates
/// at `i16::MAX`.
pub const MAX_AMPLITUDE: i32 = 1 << 15;

/// Longest buffer any single operation may produce, in samples.
///
/// About 100 minutes at 44.1 kHz. Durations and resample factors that
/// would exceed it are rejected before allocating.
pub const MAX_BUFFER_SAMPLES: usize = 1 << 28;

/// Default process-wide volume.
pub const DEFAULT_VOLUME: f64 = 0.08;

/// Immutable engine configuration shared by all operations of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Volume scalar in [0, 1].
    pub volume: f64,
    /// Maximum amplitude used to scale unit waveforms.
    pub max_amplitude: i32,
    /// Source-compatibility switches.
    pub compat: Compat,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            volume: DEFAULT_VOLUME,
            max_amplitude: MAX_AMPLITUDE,
            compat: Compat::legacy(),
        }
    }
}

impl EngineConfig {
    /// Default configuration with every compatibility fix applied.
    pub fn corrected() -> Self {
        Self {
            compat: Compat::corrected(),
            ..Self::default()
        }
    }

    /// Returns a copy with a different volume.
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    /// Returns a copy with a different sample rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Returns a copy with different compatibility switches.
    pub fn with_compat(mut self, compat: Compat) -> Self {
        self.compat = compat;
        self
    }

    /// Peak amplitude contributed by a unit waveform: `max_amplitude * volume`.
    pub fn peak(&self) -> f64 {
        self.max_amplitude as f64 * self.volume
    }

    /// Validates the configuration.
    pub fn validate(&self) -> EngineResult<()> {
        if self.sample_rate == 0 {
            return Err(EngineError::invalid_param(
                "sample_rate",
                "must be greater than 0",
            ));
        }
        if !self.volume.is_finite() || !(0.0..=1.0).contains(&self.volume) {
            return Err(EngineError::invalid_param(
                "volume",
                format!("must be within [0, 1], got {}", self.volume),
            ));
        }
        if self.max_amplitude <= 0 {
            return Err(EngineError::invalid_param(
                "max_amplitude",
                format!("must be positive, got {}", self.max_amplitude),
            ));
        }
        Ok(())
    }

    /// Parses a configuration from JSON and validates it.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| EngineError::invalid_param("config", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Phase handling for triangle and sawtooth waveforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseMode {
    /// Phase ignores the sample rate and output is pre-scaled by `2·MAX·volume/π`.
    #[default]
    Legacy,
    /// Phase is `position / sample_rate` and output is unit range.
    Normalized,
}

/// Boundary used when adding the delayed copy in the echo effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EchoBoundary {
    /// Echo only when `i - delay > 0`; the sample at `i == delay` is skipped.
    #[default]
    Exclusive,
    /// Echo whenever `i - delay >= 0`.
    Inclusive,
}

/// Scale computation in the normalize effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizeMode {
    /// `max / 32767` with integer division.
    #[default]
    IntegerScale,
    /// `32767 / peak_abs` as a float ratio.
    PeakRatio,
}

/// Value set drawn by the white noise generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseRange {
    /// Draws from {-1, 0}.
    #[default]
    Narrow,
    /// Draws from {-1, 0, 1}.
    Bipolar,
}

/// Clamping applied by the amplitude scale effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmplitudeClamp {
    /// No clamp; the encoder saturates later.
    #[default]
    Deferred,
    /// Saturate to the 16-bit range inside the effect.
    Saturate,
}

/// Switches between the observed source behavior and the corrected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Compat {
    /// Triangle and sawtooth phase.
    pub phase: PhaseMode,
    /// Echo start boundary.
    pub echo: EchoBoundary,
    /// Normalize scale computation.
    pub normalize: NormalizeMode,
    /// White noise value set.
    pub noise: NoiseRange,
    /// Clamping in the amplitude effect.
    pub amplitude: AmplitudeClamp,
}

impl Compat {
    /// Bit-exact reproduction of the observed behavior.
    pub fn legacy() -> Self {
        Self::default()
    }

    /// All documented fixes applied.
    pub fn corrected() -> Self {
        Self {
            phase: PhaseMode::Normalized,
            echo: EchoBoundary::Inclusive,
            normalize: NormalizeMode::PeakRatio,
            noise: NoiseRange::Bipolar,
            amplitude: AmplitudeClamp::Saturate,
        }
    }
}
