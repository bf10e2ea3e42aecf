//! `rail-report` — the reporting boundary of the rail_sim kernel.
//!
//! Consumes [`MotionProfile`](rail_dynamics::MotionProfile)s and
//! [`BlockOccupancy`](rail_signal::BlockOccupancy) tables as plain data and
//! renders them for humans (text tables) or downstream tooling (CSV).  The
//! kernel itself has no rendering or file dependency; everything here sits
//! on top of its outputs.

pub mod csv;
pub mod error;
pub mod table;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use crate::csv::{write_block_csv, write_motion_csv};
pub use error::{ReportError, ReportResult};
pub use table::{block_table, motion_summary};
