//! Comma-separated profile string parsing.
//!
//! Configuration sources (web forms, config files) supply track profiles as
//! paired strings, e.g. breakpoints `"0, 400, 700, 1000"` with slope values
//! `"1, 2, 1"` (percent) or curve radii `"500, 200"` (metres).  This module
//! turns those into validated [`PiecewiseProfile`]s; structural problems are
//! reported by the profile constructor itself.

use crate::{PiecewiseProfile, TrackError, TrackResult};

/// Parse a slope profile from breakpoint and percent-value strings.
///
/// Values are given in percent and stored as fractions (`"2"` → `0.02`).
pub fn parse_slope_profile(positions: &str, percents: &str) -> TrackResult<PiecewiseProfile> {
    let pos = parse_numbers(positions)?;
    let values = parse_numbers(percents)?
        .into_iter()
        .map(|v| v / 100.0)
        .collect();
    PiecewiseProfile::new(pos, values)
}

/// Parse a curve profile from breakpoint and radius (metres) strings.
pub fn parse_curve_profile(positions: &str, radii: &str) -> TrackResult<PiecewiseProfile> {
    let pos = parse_numbers(positions)?;
    let values = parse_numbers(radii)?;
    PiecewiseProfile::new(pos, values)
}

/// Split on commas and parse each trimmed token as `f64`.
pub fn parse_numbers(s: &str) -> TrackResult<Vec<f64>> {
    s.split(',')
        .map(|tok| {
            let tok = tok.trim();
            tok.parse::<f64>()
                .map_err(|_| TrackError::Parse(format!("invalid number {tok:?}")))
        })
        .collect()
}
