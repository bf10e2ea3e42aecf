//! Powered acceleration integration.
//!
//! Forward Euler over a constant equivalent slope and constant curve
//! resistance.  Per step, the force balance is
//!
//! ```text
//! F_net = min(F_te, μ·m·g)  −  (A + B·v + C·v²)  −  m·g·slope  −  k_tunnel·v²  −  F_curve
//! ```
//!
//! with the resulting acceleration clamped to `±max_acc`, speed clamped to
//! `[0, v_max]`, and the run truncated at the step where the target
//! distance is reached.

use rail_core::{TrainConfig, GRAVITY};

use crate::error::require_positive;
use crate::{DynamicsResult, MotionProfile};

/// Tunable parameters of a powered run.  [`AccelParams::default`] carries
/// the standard values; override fields with struct-update syntax:
///
/// ```
/// # use rail_dynamics::AccelParams;
/// let params = AccelParams { v_max: 40.0, ..AccelParams::default() };
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccelParams {
    /// Distance to simulate, metres.
    pub distance: f64,
    /// Speed cap, m/s.
    pub v_max: f64,
    /// Time step, seconds.
    pub dt: f64,
    /// Davis equation coefficients: `A + B·v + C·v²` Newtons.
    pub davis_a: f64,
    pub davis_b: f64,
    pub davis_c: f64,
    /// Wheel-rail adhesion coefficient; caps traction at `μ·m·g`.
    pub adhesion_coef: f64,
    /// Extra aerodynamic drag factor inside tunnels, N·s²/m².
    pub tunnel_factor: f64,
    /// Constant curve drag force, Newtons.
    pub curve_resistance_n: f64,
    /// Acceleration magnitude clamp, m/s².
    pub max_acc: f64,
}

impl Default for AccelParams {
    fn default() -> Self {
        Self {
            distance:           1_000.0,
            v_max:              55.0,
            dt:                 1.0,
            davis_a:            1_500.0,
            davis_b:            2.5,
            davis_c:            0.008,
            adhesion_coef:      0.25,
            tunnel_factor:      0.0,
            curve_resistance_n: 0.0,
            max_acc:            1.0,
        }
    }
}

/// Integrate a powered run from rest.
///
/// `slope_percent` is the (constant) equivalent gradient in percent, e.g.
/// `2.0` for a 2 % climb; negative values descend.  Returns the motion
/// profile truncated at the step where `distance` is reached, or the full
/// `floor(distance / dt) + 1` steps if the step budget runs out first.
///
/// Fails fast — before any stepping — on non-positive `mass_kg`,
/// `tractive_effort_n`, `dt`, or `distance`.
pub fn accelerate(
    config: &TrainConfig,
    slope_percent: f64,
    params: &AccelParams,
) -> DynamicsResult<MotionProfile> {
    require_positive("mass_kg", config.mass_kg)?;
    require_positive("tractive_effort_n", config.tractive_effort_n)?;
    require_positive("dt", params.dt)?;
    require_positive("distance", params.distance)?;

    let mass = config.mass_kg;
    let n_steps = (params.distance / params.dt) as usize + 1;

    // Constant over the run: slope force, adhesion ceiling, applied effort.
    let f_slope = mass * GRAVITY * (slope_percent / 100.0);
    let f_adhesion = params.adhesion_coef * mass * GRAVITY;
    let f_trac = config.tractive_effort_n.min(f_adhesion);

    let mut profile = MotionProfile::with_initial(n_steps, 0.0, 0.0);

    for i in 1..n_steps {
        let v_prev = profile.speed[i - 1];

        let f_davis = params.davis_a + params.davis_b * v_prev + params.davis_c * v_prev * v_prev;
        let f_tunnel = params.tunnel_factor * v_prev * v_prev;
        let f_resist = f_davis + f_slope + f_tunnel + params.curve_resistance_n;

        let a = ((f_trac - f_resist) / mass).clamp(-params.max_acc, params.max_acc);
        let v = (v_prev + a * params.dt).clamp(0.0, params.v_max);
        let s = profile.distance[i - 1] + v * params.dt;

        profile.push(s, v, a, f_trac);

        if s >= params.distance {
            break;
        }
    }

    Ok(profile)
}
