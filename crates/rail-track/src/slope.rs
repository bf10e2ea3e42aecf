//! Equivalent-slope sampling.
//!
//! The equivalent slope at position `x` is the length-weighted mean gradient
//! under the full train footprint `[x - train_length, x]`.  A long train
//! straddling a gradient change therefore sees a blend of both gradients
//! rather than the value at its head.

use crate::profile::{map_samples, PiecewiseProfile};

/// Equivalent slope (fraction) at each sample position.
///
/// Per position: if exactly one profile interval overlaps the footprint the
/// result is that interval's gradient; if several overlap, the result is
/// their mean weighted by the footprint length inside each interval; if
/// none overlaps the result is `None` ("no coverage" — callers must not
/// treat this as zero).
pub fn equivalent_slope(
    profile: &PiecewiseProfile,
    sample_positions: &[f64],
    train_length: f64,
) -> Vec<Option<f64>> {
    map_samples(sample_positions, |xp| sample_slope(profile, xp, train_length))
}

fn sample_slope(profile: &PiecewiseProfile, xp: f64, train_length: f64) -> Option<f64> {
    let start = xp - train_length;
    let end = xp;
    let (lo, hi) = profile.overlapping(start, end)?;

    if lo == hi {
        return Some(profile.values()[lo]);
    }

    let mut total = 0.0;
    for j in lo..=hi {
        total += profile.values()[j] * profile.clipped_weight(j, lo, hi, start, end);
    }
    Some(total / (end - start))
}
