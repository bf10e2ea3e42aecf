//! `rail-track` — track geometry and position-dependent resistances.
//!
//! # Data layout
//!
//! Track attributes (gradient, curve radius) are stored as
//! [`PiecewiseProfile`]s: `n + 1` strictly increasing breakpoints delimiting
//! `n` constant-value intervals.  A sampling query places a train footprint
//! `[x - train_length, x]` over the profile and length-averages the
//! intervals it covers; a position with no coverage yields `None`, never a
//! silent zero.
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`profile`] | `PiecewiseProfile`, `TrackGeometry`, footprint search |
//! | [`slope`]   | Equivalent-slope sampling                             |
//! | [`curve`]   | Röckl curve-resistance sampling                       |
//! | [`parse`]   | Comma-separated profile strings → `PiecewiseProfile`  |
//! | [`error`]   | `TrackError`, `TrackResult`                           |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Evaluates sample positions on Rayon's thread pool.      |
//! | `serde`    | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod curve;
pub mod error;
pub mod parse;
pub mod profile;
pub mod slope;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use curve::curve_resistance;
pub use error::{TrackError, TrackResult};
pub use parse::{parse_curve_profile, parse_slope_profile};
pub use profile::{PiecewiseProfile, TrackGeometry};
pub use slope::equivalent_slope;
