//! Buffer concatenation.

use crate::synthesis::Sample;

/// Concatenates `first` and `second` in order with no overlap.
pub fn splice(first: &[Sample], second: &[Sample]) -> Vec<Sample> {
    let mut spliced = Vec::with_capacity(first.len() + second.len());
    spliced.extend_from_slice(first);
    spliced.extend_from_slice(second);
    spliced
}
