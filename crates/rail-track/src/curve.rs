//! Curve-resistance sampling using Röckl's empirical formula.
//!
//! Röckl gives the resistance per unit train weight as a function of curve
//! radius `r` (metres):
//!
//! ```text
//! w(r) = 4.91 / (r - 30)   for r < 300 m
//! w(r) = 6.3  / (r - 55)   otherwise
//! ```
//!
//! An infinite radius (straight track) yields zero resistance through the
//! second branch.  Radii at or below the 30 m pole are outside the
//! formula's domain; the kernel evaluates them as given, like the
//! footprint-averaging it feeds.

use crate::profile::{map_samples, PiecewiseProfile};

/// Resistance per unit mass for a curve of radius `r` metres.
#[inline]
pub fn unit_resistance(r: f64) -> f64 {
    if r < 300.0 {
        4.91 / (r - 30.0)
    } else {
        6.3 / (r - 55.0)
    }
}

/// Curve drag force (Newtons) at each sample position.
///
/// Same footprint geometry as [`crate::slope::equivalent_slope`]: exactly
/// one overlapping interval contributes its full force
/// `unit_resistance(r) · mass_kg`; several overlapping intervals each
/// contribute their force pro-rated by the footprint length inside the
/// interval over the total footprint length, summed.  No overlap → `None`.
pub fn curve_resistance(
    profile: &PiecewiseProfile,
    sample_positions: &[f64],
    train_length: f64,
    mass_kg: f64,
) -> Vec<Option<f64>> {
    map_samples(sample_positions, |xp| {
        sample_resistance(profile, xp, train_length, mass_kg)
    })
}

fn sample_resistance(
    profile: &PiecewiseProfile,
    xp: f64,
    train_length: f64,
    mass_kg: f64,
) -> Option<f64> {
    let start = xp - train_length;
    let end = xp;
    let (lo, hi) = profile.overlapping(start, end)?;

    if lo == hi {
        return Some(unit_resistance(profile.values()[lo]) * mass_kg);
    }

    let span = end - start;
    let mut force = 0.0;
    for j in lo..=hi {
        let per_metre = unit_resistance(profile.values()[j]) * mass_kg / span;
        force += per_metre * profile.clipped_weight(j, lo, hi, start, end);
    }
    Some(force)
}
