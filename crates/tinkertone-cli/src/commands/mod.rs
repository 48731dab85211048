//! CLI command implementations.

pub mod melody;
pub mod noise;
pub mod notes;
pub mod output;
pub mod render;
pub mod tone;

/// Uses the given seed or draws a fresh one.
///
/// The chosen seed is always reported so a run can be reproduced.
pub fn resolve_seed(seed: Option<u32>) -> u32 {
    seed.unwrap_or_else(rand::random)
}
