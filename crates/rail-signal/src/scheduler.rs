//! The block-occupancy scheduler.

use rail_dynamics::MotionProfile;

use crate::{Block, BlockOccupancy};

/// Scheduler knobs shared by all blocks of one run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchedulerParams {
    /// Fallback booking lead, seconds before arrival, used when the motion
    /// profile never matches a block's release speed.
    pub reserve_before_arrival_s: f64,
    /// Tolerance (m/s) for matching the release speed in the profile.
    pub v_tol: f64,
}

impl Default for SchedulerParams {
    fn default() -> Self {
        Self { reserve_before_arrival_s: 20.0, v_tol: 0.1 }
    }
}

/// Compute occupancy timestamps for each block, in input order.
///
/// `motion` is the predicted run (speed indexed by time step) and
/// `time_profile` the timestamp of each profile index.  Block positions
/// double as indices into `time_profile`; any lookup falling outside it
/// leaves the corresponding record field `None`.
pub fn block_occupancy(
    blocks: &[Block],
    motion: &MotionProfile,
    time_profile: &[f64],
    train_length: f64,
    params: &SchedulerParams,
) -> Vec<BlockOccupancy> {
    blocks
        .iter()
        .map(|block| occupy_one(block, motion, time_profile, train_length, params))
        .collect()
}

fn occupy_one(
    block: &Block,
    motion: &MotionProfile,
    time_profile: &[f64],
    train_length: f64,
    params: &SchedulerParams,
) -> BlockOccupancy {
    let mut record = BlockOccupancy::default();
    let arrival = time_at(time_profile, block.position);

    // ── Booking: first release-speed match in the full speed profile ──────
    let matched = motion
        .speed
        .iter()
        .position(|&v| (v - block.release_speed).abs() <= params.v_tol);

    match matched {
        Some(b) => {
            record.speed_diff = Some((motion.speed[b] - block.release_speed).abs());
            record.matched_index = Some(b);
            record.booking_time_s = time_profile
                .get(b)
                .map(|t| t - block.setting_time_s);
        }
        // No match: fall back to a fixed lead before arrival, when the
        // arrival itself is defined.
        None => {
            record.booking_time_s = arrival.map(|t| t - params.reserve_before_arrival_s);
        }
    }

    // ── Arrival: train head at the block boundary ─────────────────────────
    record.arrival_time_s = arrival;

    // ── Release: tail plus overlap clear of the block ─────────────────────
    let release_idx = block.position + train_length.round() as i64 + block.overlap as i64;
    record.release_time_s = time_at(time_profile, release_idx).map(|t| t + block.release_time_s);

    record
}

/// `time_profile[idx]` when `idx` is in range, else `None`.
fn time_at(time_profile: &[f64], idx: i64) -> Option<f64> {
    if idx < 0 {
        return None;
    }
    time_profile.get(idx as usize).copied()
}
