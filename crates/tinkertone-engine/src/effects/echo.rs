//! Single-tap echo.

use crate::config::{EchoBoundary, EngineConfig};
use crate::synthesis::Sample;

/// Mixes `input` with a copy of itself delayed by `delay_seconds`.
///
/// The output is `input.len() + delay` samples long. With
/// [`EchoBoundary::Exclusive`] the delayed copy only contributes once
/// `i - delay > 0`, so the sample at exactly `i == delay` carries no echo.
/// Sums saturate at the `i32` range.
pub fn echo(input: &[Sample], delay_seconds: u32, config: &EngineConfig) -> Vec<Sample> {
    let delay = delay_seconds as usize * config.sample_rate as usize;
    let first_echo = match config.compat.echo {
        EchoBoundary::Exclusive => delay + 1,
        EchoBoundary::Inclusive => delay,
    };

    let len = input.len() + delay;
    let mut output = Vec::with_capacity(len);
    for i in 0..len {
        let dry = input.get(i).copied().unwrap_or(0);
        let wet = if i >= first_echo {
            input.get(i - delay).copied().unwrap_or(0)
        } else {
            0
        };
        output.push(dry.saturating_add(wet));
    }

    tracing::debug!(delay_samples = delay, samples = len, "applied echo");
    output
}
