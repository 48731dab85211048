//! Error types for the synthesis engine.

use thiserror::Error;

use crate::config::MAX_BUFFER_SAMPLES;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur during synthesis, effects or encoding.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Invalid frequency.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },
}

impl EngineError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::InvalidDuration { .. } => "ENGINE_001",
            EngineError::InvalidFrequency { .. } => "ENGINE_002",
            EngineError::InvalidParameter { .. } => "ENGINE_003",
        }
    }
}

/// Checks a duration in seconds and returns its length in samples.
///
/// The length is `floor(duration * sample_rate)` and may not exceed
/// [`MAX_BUFFER_SAMPLES`].
pub(crate) fn sample_count(duration: f64, sample_rate: u32) -> EngineResult<usize> {
    if !duration.is_finite() || duration < 0.0 {
        return Err(EngineError::InvalidDuration { duration });
    }
    let samples = (duration * sample_rate as f64).floor();
    if samples > MAX_BUFFER_SAMPLES as f64 {
        return Err(EngineError::invalid_param(
            "duration",
            format!(
                "{} seconds at {} Hz exceeds the {} sample buffer limit",
                duration, sample_rate, MAX_BUFFER_SAMPLES
            ),
        ));
    }
    Ok(samples as usize)
}

/// Checks that a frequency is positive and finite.
pub(crate) fn check_frequency(freq: f64) -> EngineResult<()> {
    if !freq.is_finite() || freq <= 0.0 {
        return Err(EngineError::InvalidFrequency { freq });
    }
    Ok(())
}
