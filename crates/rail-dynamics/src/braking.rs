//! Braking integration and closed-form brake formulas.
//!
//! The braking run uses a mean-velocity step rather than plain Euler: the
//! speed after one step is taken as
//!
//! ```text
//! v₁ = √(max(0, 2·dec + v²))      candidate end-of-step speed
//! v₂ = (v + v₁) / 2               mean speed over the step
//! v' = max(0, v + dec / max(v₂, 1e-6))
//! ```
//!
//! which avoids the Euler overshoot near standstill.  All deceleration
//! quantities are negative-signed by contract.

use rail_core::GRAVITY;

use crate::error::{require_negative, require_positive, DynamicsError};
use crate::{DynamicsResult, MotionProfile};

/// Tunable parameters of a braking run, all negative-signed where they
/// describe a deceleration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrakingParams {
    /// Nominal commanded deceleration, m/s² (negative).
    pub deceleration: f64,
    /// Strongest permitted deceleration, m/s² (negative, below `max_dec`).
    pub min_dec: f64,
    /// Weakest permitted deceleration, m/s² (negative).
    pub max_dec: f64,
    /// Time step, seconds.
    pub dt: f64,
    /// Gravity, m/s².  Overridable for non-standard test fixtures.
    pub g: f64,
}

impl Default for BrakingParams {
    fn default() -> Self {
        Self {
            deceleration: -1.0,
            min_dec:      -1.2,
            max_dec:      -0.5,
            dt:           1.0,
            g:            GRAVITY,
        }
    }
}

/// Integrate a braking run from `initial_speed`.
///
/// `slope_profile`, when supplied, gives the equivalent slope (fraction)
/// per step; the value at the **previous** index shifts the commanded
/// deceleration by `g·slope` before clamping to `[min_dec, max_dec]`.
/// The run truncates at the first step where the train stops or the target
/// distance is covered.
///
/// Fails fast on a sign-contract violation (`dt <= 0`, `min_dec >= 0`,
/// `max_dec >= 0`, `min_dec > max_dec`), a negative `initial_speed`, a
/// non-positive `distance`, or a slope profile too short for the run's
/// step count.
pub fn brake(
    initial_speed: f64,
    distance: f64,
    slope_profile: Option<&[f64]>,
    params: &BrakingParams,
) -> DynamicsResult<MotionProfile> {
    require_positive("dt", params.dt)?;
    require_positive("distance", distance)?;
    require_negative("min_dec", params.min_dec)?;
    require_negative("max_dec", params.max_dec)?;
    if params.min_dec > params.max_dec {
        return Err(DynamicsError::InvalidParameter {
            name:   "min_dec",
            value:  params.min_dec,
            reason: "must not exceed max_dec",
        });
    }
    if !(initial_speed.is_finite() && initial_speed >= 0.0) {
        return Err(DynamicsError::InvalidParameter {
            name:   "initial_speed",
            value:  initial_speed,
            reason: "must be finite and >= 0",
        });
    }

    let n_steps = (distance / params.dt) as usize + 1;
    if let Some(slopes) = slope_profile {
        // Step i reads slopes[i - 1]; the last step reads index n_steps - 2.
        if slopes.len() + 1 < n_steps {
            return Err(DynamicsError::SlopeProfileTooShort {
                needed: n_steps - 1,
                got:    slopes.len(),
            });
        }
    }

    let mut profile = MotionProfile::with_initial(n_steps, initial_speed, 0.0);

    for i in 1..n_steps {
        let v_prev = profile.speed[i - 1];
        let slope = slope_profile.map_or(0.0, |s| s[i - 1]);

        let dec = (params.deceleration + params.g * slope).clamp(params.min_dec, params.max_dec);

        let v1 = (2.0 * dec + v_prev * v_prev).max(0.0).sqrt();
        let v2 = (v_prev + v1) / 2.0;
        let v = (v_prev + dec / v2.max(1e-6)).max(0.0);
        let s = profile.distance[i - 1] + v * params.dt;

        profile.push(s, v, dec, dec);

        if v <= 0.0 || s >= distance {
            break;
        }
    }

    Ok(profile)
}

// ── Closed-form brake formulas ────────────────────────────────────────────────

/// Brake force (N) needed for `deceleration` (m/s², magnitude) at `mass` kg.
#[inline]
pub fn braking_force(mass_kg: f64, deceleration: f64) -> f64 {
    mass_kg * deceleration
}

/// Distance (m) to stop from `initial_speed` at a constant `deceleration`
/// magnitude.  Fails on a non-positive deceleration.
pub fn braking_distance(initial_speed: f64, deceleration: f64) -> DynamicsResult<f64> {
    require_positive("deceleration", deceleration)?;
    Ok(initial_speed * initial_speed / (2.0 * deceleration))
}

/// Time (s) to stop from `initial_speed` at a constant `deceleration`
/// magnitude.  Fails on a non-positive deceleration.
pub fn stopping_time(initial_speed: f64, deceleration: f64) -> DynamicsResult<f64> {
    require_positive("deceleration", deceleration)?;
    Ok(initial_speed / deceleration)
}
