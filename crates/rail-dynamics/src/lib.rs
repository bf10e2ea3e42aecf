//! `rail-dynamics` — longitudinal train motion.
//!
//! Two forward-time integrators produce [`MotionProfile`]s: a powered run
//! from rest ([`accelerate`]) and a braking run from speed
//! ([`brake`]).  Both are pure functions of their inputs — each step depends
//! on the previous step's speed, so a single run is inherently sequential,
//! but independent runs share no state.
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`motion`]  | `MotionProfile` — truncating index-aligned output arrays|
//! | [`accel`]   | Powered Euler integration with Davis/slope/adhesion     |
//! | [`braking`] | Braking integration plus closed-form brake formulas     |
//! | [`energy`]  | Energy & CO₂ estimation per power type                  |
//! | [`safety`]  | Stopping-distance profile and violation flags           |
//! | [`error`]   | `DynamicsError`, `DynamicsResult`                       |

pub mod accel;
pub mod braking;
pub mod energy;
pub mod error;
pub mod motion;
pub mod safety;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use accel::{accelerate, AccelParams};
pub use braking::{brake, braking_distance, braking_force, stopping_time, BrakingParams};
pub use energy::{estimate_energy, EnergyEstimate, PowerType};
pub use error::{DynamicsError, DynamicsResult};
pub use motion::MotionProfile;
pub use safety::{
    assess_safety, PathLimits, SafetyParams, SafetyReport, Severity, Violation, ViolationKind,
};
