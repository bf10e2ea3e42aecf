//! `rail-signal` — block-occupancy scheduling.
//!
//! A signaling **block** is a track segment reserved for one train at a
//! time.  Given a predicted motion profile, the scheduler derives three
//! timestamps per block:
//!
//! - **booked** — the reservation moment, predicted from the first point
//!   where the train hits the block's release speed (or a fixed lead time
//!   before arrival when the profile never does);
//! - **arrived** — the train head reaches the block boundary;
//! - **released** — the train tail plus an overlap safety margin has
//!   cleared it.
//!
//! Every lookup that would leave the motion profile yields an explicit
//! `None` field on the record — no index is ever reported out of range.

pub mod block;
pub mod scheduler;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use block::{Block, BlockOccupancy};
pub use scheduler::{block_occupancy, SchedulerParams};
