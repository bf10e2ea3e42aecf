//! `rail-sim` — the scenario pipeline over the rail_sim kernel.
//!
//! # Pipeline
//!
//! ```text
//! ① Sample    — equivalent slope and curve resistance under the train
//!               footprint at every dt-spaced position.
//! ② Aggregate — mean of the *defined* samples (undefined positions are
//!               excluded, with configured fallbacks when nothing is
//!               defined).
//! ③ Accelerate — powered run from rest over the mean slope and mean
//!               curve resistance.
//! ④ Brake     — braking run from the speed cap over the sampled
//!               equivalent-slope profile.
//! ⑤ Schedule  — block booking/arrival/release over the powered run's
//!               timeline.
//! ⑥ Assess    — energy/emission estimate and safety report.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                            |
//! |------------|---------------------------------------------------|
//! | `parallel` | Samples track positions on Rayon's thread pool.   |
//! | `serde`    | Serde derives on configs and reports.             |

pub mod error;
pub mod scenario;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SimError, SimResult};
pub use scenario::{mean_defined, run_scenario, ScenarioConfig, ScenarioReport};
