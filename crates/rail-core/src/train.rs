//! Train configuration and standard presets.
//!
//! A `TrainConfig` is constructed once per simulation request and treated as
//! a read-only input by every integrator.  Construction is the only place
//! its parameters are validated; downstream code may assume positivity.

use crate::{CoreError, CoreResult};

// ── TrainType ─────────────────────────────────────────────────────────────────

/// Service category of a train.  Affects nothing in the integrators
/// themselves; carried through for reporting and preset lookup.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum TrainType {
    Freight,
    #[default]
    Passenger,
    /// Anything outside the two standard presets.
    Custom,
}

impl TrainType {
    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            TrainType::Freight   => "freight",
            TrainType::Passenger => "passenger",
            TrainType::Custom    => "custom",
        }
    }
}

impl std::fmt::Display for TrainType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TrainConfig ───────────────────────────────────────────────────────────────

/// Immutable configuration of one train.
///
/// Owned by the caller for the duration of a simulation run; the kernel
/// never mutates it or retains references across calls.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainConfig {
    /// Total train mass in kilograms.  Strictly positive.
    pub mass_kg: f64,
    /// Maximum tractive effort in Newtons.  Strictly positive; the
    /// adhesion limit may cap it further at run time.
    pub tractive_effort_n: f64,
    /// Service category tag.
    pub train_type: TrainType,
}

impl TrainConfig {
    /// Validate and construct a configuration.
    ///
    /// Fails with [`CoreError::InvalidParameter`] if `mass_kg` or
    /// `tractive_effort_n` is non-finite or not strictly positive.
    pub fn new(mass_kg: f64, tractive_effort_n: f64, train_type: TrainType) -> CoreResult<Self> {
        if !(mass_kg.is_finite() && mass_kg > 0.0) {
            return Err(CoreError::InvalidParameter { name: "mass_kg", value: mass_kg });
        }
        if !(tractive_effort_n.is_finite() && tractive_effort_n > 0.0) {
            return Err(CoreError::InvalidParameter {
                name:  "tractive_effort_n",
                value: tractive_effort_n,
            });
        }
        Ok(Self { mass_kg, tractive_effort_n, train_type })
    }

    // ── Standard presets ──────────────────────────────────────────────────

    /// 100 t freight consist with 300 kN of tractive effort.
    pub fn freight() -> Self {
        Self {
            mass_kg:           100_000.0,
            tractive_effort_n: 300_000.0,
            train_type:        TrainType::Freight,
        }
    }

    /// 50 t passenger set with 150 kN of tractive effort.
    pub fn passenger() -> Self {
        Self {
            mass_kg:           50_000.0,
            tractive_effort_n: 150_000.0,
            train_type:        TrainType::Passenger,
        }
    }

    /// Weight of the train in Newtons (`mass · g`).
    #[inline]
    pub fn weight_n(&self) -> f64 {
        self.mass_kg * crate::GRAVITY
    }
}
