//! Energy consumption and CO₂ emission estimation.
//!
//! A deliberately coarse segment model: per profile sample, the power to
//! overcome rolling, gradient, and aerodynamic resistance at the sampled
//! speed is integrated over one-second segments, divided by the traction
//! chain's efficiency, and multiplied by the grid/fuel emission factor.
//! Electric and hybrid traction recover part of the total through
//! regenerative braking.

use rail_core::units::{watt_secs_to_kwh, AIR_DENSITY};
use rail_core::{TrainConfig, GRAVITY};

use crate::error::require_positive;
use crate::DynamicsResult;

// Aerodynamic constants of the segment model.
const DRAG_COEF: f64 = 0.6;
const FRONTAL_AREA_M2: f64 = 10.0;
const ROLLING_COEF: f64 = 0.0025;
const SEGMENT_SECS: f64 = 1.0;

// ── PowerType ─────────────────────────────────────────────────────────────────

/// Traction chain of the train.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PowerType {
    Diesel,
    Electric,
    Hybrid,
}

impl PowerType {
    /// Tank/pantograph-to-rail efficiency.
    pub fn efficiency(self) -> f64 {
        match self {
            PowerType::Diesel   => 0.38,
            PowerType::Electric => 0.85,
            PowerType::Hybrid   => 0.60,
        }
    }

    /// kg CO₂ per kWh drawn.
    pub fn emission_factor(self) -> f64 {
        match self {
            PowerType::Diesel   => 0.65,
            PowerType::Electric => 0.25,
            PowerType::Hybrid   => 0.45,
        }
    }

    /// Fraction of consumed energy recovered through regenerative braking.
    pub fn regeneration_factor(self) -> f64 {
        match self {
            PowerType::Diesel   => 0.0,
            PowerType::Electric => 0.2,
            PowerType::Hybrid   => 0.1,
        }
    }
}

// ── EnergyEstimate ────────────────────────────────────────────────────────────

/// Aggregated result of one estimation, rounded to 0.1 for reporting.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyEstimate {
    pub energy_kwh: f64,
    pub co2_kg: f64,
}

/// Estimate energy and emissions over paired speed/gradient samples.
///
/// Profiles are walked in lockstep; the shorter one bounds the walk.  Empty
/// profiles fall back to a single nominal sample (50 m/s on level track).
/// Fails fast on a non-positive train mass.
pub fn estimate_energy(
    config: &TrainConfig,
    gradients: &[f64],
    speeds: &[f64],
    power: PowerType,
) -> DynamicsResult<EnergyEstimate> {
    require_positive("mass_kg", config.mass_kg)?;

    let speeds = if speeds.is_empty() { &[50.0][..] } else { speeds };
    let gradients = if gradients.is_empty() { &[0.0][..] } else { gradients };

    let mass = config.mass_kg;
    let rolling_n = ROLLING_COEF * mass * GRAVITY;
    let efficiency = power.efficiency();

    let mut total_kwh = 0.0;
    for (&v, &gradient) in speeds.iter().zip(gradients) {
        let gradient_n = mass * GRAVITY * gradient;
        let air_n = 0.5 * AIR_DENSITY * DRAG_COEF * FRONTAL_AREA_M2 * v * v;
        let power_w = (rolling_n + gradient_n + air_n) * v;
        total_kwh += watt_secs_to_kwh(power_w * SEGMENT_SECS) / efficiency;
    }

    let mut co2_kg = total_kwh * power.emission_factor();

    // Regenerative recovery reduces both the draw and its emissions.
    let recovered = total_kwh * power.regeneration_factor();
    total_kwh -= recovered;
    co2_kg -= recovered * power.emission_factor();

    Ok(EnergyEstimate {
        energy_kwh: round1(total_kwh),
        co2_kg:     round1(co2_kg),
    })
}

#[inline]
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
