//! Stopping-distance profile and safety violation flags.
//!
//! Per speed sample, the worst-case stopping distance combines a reaction
//! allowance with the friction-limited braking distance:
//!
//! ```text
//! d = (v·t_reaction + v² / (2·g·max(0.01, μ − gradient))) · margin
//! ```
//!
//! A downhill gradient eats into the effective friction; the `0.01` floor
//! keeps the formula defined on grades steeper than the friction budget.

use rail_core::GRAVITY;

// ── Parameters ────────────────────────────────────────────────────────────────

/// Assessment constants.  Defaults model a wet rail.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SafetyParams {
    /// Wheel-rail friction coefficient.
    pub friction: f64,
    /// Driver/system reaction time before brake application, seconds.
    pub reaction_time_s: f64,
    /// Multiplicative safety factor on the computed distance.
    pub margin: f64,
}

impl Default for SafetyParams {
    fn default() -> Self {
        Self { friction: 0.35, reaction_time_s: 1.5, margin: 1.2 }
    }
}

/// Length and speed limit of one entry/exit path to check against.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathLimits {
    pub length_m: f64,
    pub speed_limit: f64,
}

// ── Violations ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViolationKind {
    /// A path is shorter than the safe stopping distance at its speed limit.
    StoppingDistanceExceedsPath,
    /// The profile-wide maximum stopping distance exceeds the 800 m threshold.
    ExcessiveStoppingDistance,
    /// Gradients steeper than 2.5 % occur along the profile.
    SteepGradient,
}

/// One flagged safety problem.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Violation {
    /// Index of the offending path, or a synthetic index for profile-wide
    /// flags.
    pub path_id: usize,
    pub kind: ViolationKind,
    pub severity: Severity,
    pub details: String,
}

/// Result of one assessment.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SafetyReport {
    /// Stopping distance per speed sample, metres, rounded to 0.1.
    pub stopping_distances: Vec<f64>,
    pub violations: Vec<Violation>,
}

// ── Assessment ────────────────────────────────────────────────────────────────

/// Compute stopping distances for `speeds` over `gradients` and flag
/// violations.
///
/// With a non-empty `paths` list, each path's length is checked against the
/// safe stopping distance at its speed limit.  Without paths, profile-wide
/// heuristics apply instead (excessive maximum stopping distance, steep
/// gradients).  Gradients are cycled when shorter than the speed profile;
/// empty profiles fall back to a single nominal sample.
pub fn assess_safety(
    speeds: &[f64],
    gradients: &[f64],
    paths: &[PathLimits],
    params: &SafetyParams,
) -> SafetyReport {
    let speeds = if speeds.is_empty() { &[50.0][..] } else { speeds };
    let gradients = if gradients.is_empty() { &[0.0][..] } else { gradients };

    let stopping_distances: Vec<f64> = speeds
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let gradient = gradients[i % gradients.len()];
            let effective_friction = params.friction - gradient;
            let reaction_m = v * params.reaction_time_s;
            let braking_m = v * v / (2.0 * GRAVITY * effective_friction.max(0.01));
            round1((reaction_m + braking_m) * params.margin)
        })
        .collect();

    let mut violations = Vec::new();

    if !paths.is_empty() {
        for (i, path) in paths.iter().enumerate() {
            let safe_stop_m =
                path.speed_limit * path.speed_limit / (2.0 * GRAVITY * params.friction)
                    * params.margin;
            if safe_stop_m > path.length_m {
                violations.push(Violation {
                    path_id:  i,
                    kind:     ViolationKind::StoppingDistanceExceedsPath,
                    severity: Severity::High,
                    details:  format!(
                        "path length {}m insufficient for safe stopping from {}m/s",
                        path.length_m, path.speed_limit
                    ),
                });
            }
        }
    } else {
        let max_stop = stopping_distances.iter().copied().fold(0.0, f64::max);
        if max_stop > 800.0 {
            violations.push(Violation {
                path_id:  0,
                kind:     ViolationKind::ExcessiveStoppingDistance,
                severity: Severity::Medium,
                details:  format!("maximum stopping distance {max_stop}m exceeds 800m threshold"),
            });
        }

        let steep: Vec<usize> = gradients
            .iter()
            .enumerate()
            .filter(|(_, g)| g.abs() > 0.025)
            .map(|(i, _)| i)
            .collect();
        if !steep.is_empty() {
            violations.push(Violation {
                path_id:  1,
                kind:     ViolationKind::SteepGradient,
                severity: Severity::Low,
                details:  format!("gradients exceeding 2.5% detected at positions {steep:?}"),
            });
        }
    }

    SafetyReport { stopping_distances, violations }
}

#[inline]
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
