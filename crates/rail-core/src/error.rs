//! Kernel base error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `CoreError` via `From` impls or wrap it as one variant.  Both patterns
//! are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `rail-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A physical parameter that must be strictly positive (mass, tractive
    /// effort, time step, …) was zero, negative, or non-finite.
    #[error("invalid parameter {name}: {value} (must be finite and > 0)")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Shorthand result type for all `rail-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
