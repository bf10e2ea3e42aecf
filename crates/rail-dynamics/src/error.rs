//! Dynamics-subsystem error type.

use rail_core::CoreError;
use thiserror::Error;

/// Errors produced by `rail-dynamics`.
///
/// All variants are raised at integrator entry, before any stepping — a
/// failed call produces no partial output.
#[derive(Debug, Error)]
pub enum DynamicsError {
    /// A physics parameter violates its sign or range contract.
    #[error("invalid physics parameter {name}: {value} ({reason})")]
    InvalidParameter {
        name:   &'static str,
        value:  f64,
        reason: &'static str,
    },

    /// A supplied slope profile is too short for the requested step count.
    #[error("slope profile has {got} entries but the run needs {needed}")]
    SlopeProfileTooShort { needed: usize, got: usize },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type DynamicsResult<T> = Result<T, DynamicsError>;

/// Check that `value` is finite and strictly positive.
pub(crate) fn require_positive(name: &'static str, value: f64) -> DynamicsResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DynamicsError::InvalidParameter {
            name,
            value,
            reason: "must be finite and > 0",
        })
    }
}

/// Check that `value` is finite and strictly negative (braking quantities
/// are negative-signed by contract).
pub(crate) fn require_negative(name: &'static str, value: f64) -> DynamicsResult<()> {
    if value.is_finite() && value < 0.0 {
        Ok(())
    } else {
        Err(DynamicsError::InvalidParameter {
            name,
            value,
            reason: "must be finite and < 0",
        })
    }
}
