//! Track-subsystem error type.

use thiserror::Error;

/// Errors produced by `rail-track`.
#[derive(Debug, Error)]
pub enum TrackError {
    /// Breakpoints not strictly increasing, wrong value count, or too few
    /// breakpoints.  Raised at `PiecewiseProfile` construction — malformed
    /// geometry is never silently reinterpreted.
    #[error("invalid track geometry: {0}")]
    Geometry(String),

    /// A comma-separated profile string contained a malformed number.
    #[error("profile parse error: {0}")]
    Parse(String),
}

pub type TrackResult<T> = Result<T, TrackError>;
