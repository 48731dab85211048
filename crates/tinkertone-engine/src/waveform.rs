//! Periodic waveform functions.
//!
//! A waveform maps `(frequency, sample position)` to an amplitude
//! contribution. Square and sine return unit-range values; triangle and
//! sawtooth follow [`PhaseMode`]: in legacy mode their phase ignores the
//! sample rate and the result is already scaled by `2·MAX·volume/π`.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{EngineConfig, PhaseMode};
use crate::error::{check_frequency, EngineError, EngineResult};

/// Two times PI.
pub const TWO_PI: f64 = 2.0 * PI;

/// Waveform kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    /// Hard-edged ±1 wave.
    #[default]
    Square,
    /// Sine wave.
    Sine,
    /// Triangle wave.
    Triangle,
    /// Sawtooth wave.
    Sawtooth,
}

impl Waveform {
    /// All waveform kinds.
    pub const ALL: [Waveform; 4] = [
        Waveform::Square,
        Waveform::Sine,
        Waveform::Triangle,
        Waveform::Sawtooth,
    ];

    /// Lowercase name of the waveform.
    pub fn name(self) -> &'static str {
        match self {
            Waveform::Square => "square",
            Waveform::Sine => "sine",
            Waveform::Triangle => "triangle",
            Waveform::Sawtooth => "sawtooth",
        }
    }

    /// Evaluates the waveform at a sample position.
    ///
    /// Fails with [`EngineError::InvalidFrequency`] if `frequency` is not a
    /// positive finite number.
    pub fn evaluate(self, frequency: f64, position: usize, config: &EngineConfig) -> EngineResult<f64> {
        check_frequency(frequency)?;
        Ok(self.value_at(frequency, position, config))
    }

    /// Evaluates without validating the frequency. Never returns a
    /// non-finite value.
    pub(crate) fn value_at(self, frequency: f64, position: usize, config: &EngineConfig) -> f64 {
        let value = match self {
            Waveform::Square => square(frequency, position, config),
            Waveform::Sine => sine(frequency, position, config),
            Waveform::Triangle => triangle(frequency, position, config),
            Waveform::Sawtooth => sawtooth(frequency, position, config),
        };
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Waveform {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "square" => Ok(Waveform::Square),
            "sine" => Ok(Waveform::Sine),
            "triangle" => Ok(Waveform::Triangle),
            "sawtooth" | "saw" => Ok(Waveform::Sawtooth),
            other => Err(EngineError::invalid_param(
                "waveform",
                format!("unknown waveform '{}' (expected square, sine, triangle or sawtooth)", other),
            )),
        }
    }
}

/// Phase in radians at `position`, normalized by the sample rate.
fn phase(frequency: f64, position: usize, sample_rate: u32) -> f64 {
    TWO_PI * frequency * (position as f64 / sample_rate as f64)
}

fn square(frequency: f64, position: usize, config: &EngineConfig) -> f64 {
    // zero crossings fall through to -1
    if phase(frequency, position, config.sample_rate).sin() > 0.0 {
        1.0
    } else {
        -1.0
    }
}

fn sine(frequency: f64, position: usize, config: &EngineConfig) -> f64 {
    phase(frequency, position, config.sample_rate).sin()
}

/// Cycles elapsed at `position` and the output gain, per phase mode.
fn cycles_and_gain(frequency: f64, position: usize, config: &EngineConfig) -> (f64, f64) {
    match config.compat.phase {
        PhaseMode::Legacy => (frequency * position as f64, config.peak()),
        PhaseMode::Normalized => (frequency * position as f64 / config.sample_rate as f64, 1.0),
    }
}

fn triangle(frequency: f64, position: usize, config: &EngineConfig) -> f64 {
    let (cycles, gain) = cycles_and_gain(frequency, position, config);
    (2.0 * gain / PI) * (TWO_PI * cycles).sin().asin()
}

fn sawtooth(frequency: f64, position: usize, config: &EngineConfig) -> f64 {
    let (cycles, gain) = cycles_and_gain(frequency, position, config);
    let tan = (PI * cycles).tan();
    // cot is undefined at whole cycles; that sample is silent
    if tan == 0.0 {
        return 0.0;
    }
    let cot = 1.0 / tan;
    if !cot.is_finite() {
        return 0.0;
    }
    -(2.0 * gain / PI) * cot.atan()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy() -> EngineConfig {
        EngineConfig::default()
    }

    fn corrected() -> EngineConfig {
        EngineConfig::corrected()
    }

    #[test]
    fn test_square_at_zero_is_negative_one() {
        let config = legacy();
        assert_eq!(Waveform::Square.evaluate(440.0, 0, &config).unwrap(), -1.0);
    }

    #[test]
    fn test_square_is_hard_edged() {
        let config = legacy();
        for pos in 0..500 {
            let v = Waveform::Square.evaluate(440.0, pos, &config).unwrap();
            assert!(v == 1.0 || v == -1.0);
        }
        // first quarter period is positive
        assert_eq!(Waveform::Square.evaluate(440.0, 10, &config).unwrap(), 1.0);
    }

    #[test]
    fn test_sine_closed_form() {
        let config = legacy();
        assert_eq!(Waveform::Sine.evaluate(440.0, 0, &config).unwrap(), 0.0);

        let expected = (TWO_PI * 440.0 * (25.0 / 44100.0)).sin();
        assert_eq!(Waveform::Sine.evaluate(440.0, 25, &config).unwrap(), expected);
    }

    #[test]
    fn test_sine_range() {
        let config = legacy();
        for pos in 0..1000 {
            let v = Waveform::Sine.evaluate(261.63, pos, &config).unwrap();
            assert!((-1.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_deterministic() {
        let config = legacy();
        for waveform in Waveform::ALL {
            let a = waveform.evaluate(330.0, 1234, &config).unwrap();
            let b = waveform.evaluate(330.0, 1234, &config).unwrap();
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_legacy_triangle_is_prescaled() {
        let config = legacy();
        let position = 3;
        let frequency = 0.05;
        let expected = (2.0 * 32768.0 * 0.08 / PI) * (TWO_PI * frequency * 3.0).sin().asin();
        let value = Waveform::Triangle.evaluate(frequency, position, &config).unwrap();
        assert!((value - expected).abs() < 1e-9);
        assert!(value.abs() > 1.0);
    }

    #[test]
    fn test_normalized_triangle_is_unit_range() {
        let config = corrected();
        let mut peak: f64 = 0.0;
        for pos in 0..44100 {
            let v = Waveform::Triangle.evaluate(440.0, pos, &config).unwrap();
            assert!(v.abs() <= 1.0 + 1e-12);
            peak = peak.max(v.abs());
        }
        assert!(peak > 0.99);
    }

    #[test]
    fn test_sawtooth_singularity_is_silent() {
        // position 0 puts cot at its pole
        for config in [legacy(), corrected()] {
            assert_eq!(Waveform::Sawtooth.evaluate(440.0, 0, &config).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_sawtooth_never_non_finite() {
        let config = legacy();
        for pos in 0..2000 {
            let v = Waveform::Sawtooth.evaluate(1.0, pos, &config).unwrap();
            assert!(v.is_finite());
        }
    }

    #[test]
    fn test_normalized_sawtooth_ramps() {
        let config = corrected();
        // 100 Hz: 441 samples per cycle, the ramp rises across a cycle
        let early = Waveform::Sawtooth.evaluate(100.0, 50, &config).unwrap();
        let late = Waveform::Sawtooth.evaluate(100.0, 400, &config).unwrap();
        assert!(early < late);
        assert!((-1.0..=1.0).contains(&early));
        assert!((-1.0..=1.0).contains(&late));
    }

    #[test]
    fn test_rejects_bad_frequency() {
        let config = legacy();
        for waveform in Waveform::ALL {
            assert!(matches!(
                waveform.evaluate(0.0, 1, &config),
                Err(EngineError::InvalidFrequency { .. })
            ));
            assert!(waveform.evaluate(-220.0, 1, &config).is_err());
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Sine".parse::<Waveform>().unwrap(), Waveform::Sine);
        assert_eq!("saw".parse::<Waveform>().unwrap(), Waveform::Sawtooth);
        assert!("pulse".parse::<Waveform>().is_err());
        for waveform in Waveform::ALL {
            assert_eq!(waveform.to_string().parse::<Waveform>().unwrap(), waveform);
        }
    }
}
