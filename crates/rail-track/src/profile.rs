//! Piecewise-constant track profiles and the footprint interval search.

use crate::{TrackError, TrackResult};

// ── PiecewiseProfile ──────────────────────────────────────────────────────────

/// A piecewise-constant function of track position.
///
/// `positions` holds `n + 1` strictly increasing breakpoints in metres;
/// `values[j]` applies on the half-open interval
/// `[positions[j], positions[j+1])`.  Used for gradients (as fractions,
/// e.g. `0.02` for 2 %) and curve radii (metres, `f64::INFINITY` for
/// straight track).
///
/// Do not construct directly; [`PiecewiseProfile::new`] is the only path in
/// and the only place the geometry invariants are checked.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PiecewiseProfile {
    positions: Vec<f64>,
    values:    Vec<f64>,
}

impl PiecewiseProfile {
    /// Validate and construct a profile.
    ///
    /// Fails with [`TrackError::Geometry`] unless `positions` has at least
    /// two strictly increasing finite entries and
    /// `values.len() == positions.len() - 1`.
    pub fn new(positions: Vec<f64>, values: Vec<f64>) -> TrackResult<Self> {
        if positions.len() < 2 {
            return Err(TrackError::Geometry(format!(
                "need at least 2 breakpoints, got {}",
                positions.len()
            )));
        }
        if values.len() != positions.len() - 1 {
            return Err(TrackError::Geometry(format!(
                "expected {} interval values for {} breakpoints, got {}",
                positions.len() - 1,
                positions.len(),
                values.len()
            )));
        }
        if positions.iter().any(|p| !p.is_finite()) {
            return Err(TrackError::Geometry("non-finite breakpoint".into()));
        }
        for pair in positions.windows(2) {
            if pair[1] <= pair[0] {
                return Err(TrackError::Geometry(format!(
                    "breakpoints must be strictly increasing ({} then {})",
                    pair[0], pair[1]
                )));
            }
        }
        Ok(Self { positions, values })
    }

    #[inline]
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of constant-value intervals.
    #[inline]
    pub fn interval_count(&self) -> usize {
        self.values.len()
    }

    /// Track span covered by the profile: `[first breakpoint, last breakpoint)`.
    #[inline]
    pub fn span(&self) -> (f64, f64) {
        (self.positions[0], self.positions[self.positions.len() - 1])
    }

    /// Inclusive range of interval indices overlapped by the footprint
    /// `[start, end]`, or `None` if no interval overlaps.
    ///
    /// Interval `j` overlaps iff `start < positions[j+1] && end >= positions[j]`.
    /// Both bounds are found by binary search over the sorted breakpoints,
    /// so a query is O(log n) regardless of footprint width.
    pub fn overlapping(&self, start: f64, end: f64) -> Option<(usize, usize)> {
        let n = self.values.len();
        // First interval whose upper bound lies beyond the footprint start.
        let lo = self.positions[1..].partition_point(|&p| p <= start);
        // One past the last interval whose lower bound the footprint reaches.
        let hi = self.positions[..n].partition_point(|&p| p <= end);
        if lo >= n || hi == 0 || lo >= hi {
            return None;
        }
        Some((lo, hi - 1))
    }

    /// Length of footprint `[start, end]` lying inside interval `j`, clipped
    /// the way the sampling routines weight contributions: the first
    /// overlapped interval is clipped at `start`, the last at `end`, and
    /// interior intervals count in full.
    pub(crate) fn clipped_weight(&self, j: usize, lo: usize, hi: usize, start: f64, end: f64) -> f64 {
        if j == lo {
            self.positions[j + 1] - start
        } else if j == hi {
            end - self.positions[j]
        } else {
            self.positions[j + 1] - self.positions[j]
        }
    }
}

// ── TrackGeometry ─────────────────────────────────────────────────────────────

/// Slope and curve profiles of one track segment.
///
/// Read-only input to the sampling routines; constructed once per
/// simulation request.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackGeometry {
    /// Gradient profile.  Values are fractions (`0.02` = 2 %).
    pub slope: PiecewiseProfile,
    /// Curve-radius profile.  Values in metres; `f64::INFINITY` = straight.
    pub curve: PiecewiseProfile,
}

impl TrackGeometry {
    pub fn new(slope: PiecewiseProfile, curve: PiecewiseProfile) -> Self {
        Self { slope, curve }
    }

    /// Equivalent slope under the train footprint at each sample position.
    /// See [`crate::slope::equivalent_slope`].
    pub fn equivalent_slope(&self, sample_positions: &[f64], train_length: f64) -> Vec<Option<f64>> {
        crate::slope::equivalent_slope(&self.slope, sample_positions, train_length)
    }

    /// Curve resistance under the train footprint at each sample position.
    /// See [`crate::curve::curve_resistance`].
    pub fn curve_resistance(
        &self,
        sample_positions: &[f64],
        train_length: f64,
        mass_kg: f64,
    ) -> Vec<Option<f64>> {
        crate::curve::curve_resistance(&self.curve, sample_positions, train_length, mass_kg)
    }
}

// ── Sampling driver ───────────────────────────────────────────────────────────

/// Evaluate `sample` at every position, in parallel with the `parallel`
/// feature.  Each evaluation reads only the shared profile, so the split is
/// free of ordering effects and the output is identical either way.
pub(crate) fn map_samples<F>(sample_positions: &[f64], sample: F) -> Vec<Option<f64>>
where
    F: Fn(f64) -> Option<f64> + Send + Sync,
{
    #[cfg(not(feature = "parallel"))]
    {
        sample_positions.iter().map(|&xp| sample(xp)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        sample_positions.par_iter().map(|&xp| sample(xp)).collect()
    }
}
