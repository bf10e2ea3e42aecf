//! CSV export of motion profiles and block tables.
//!
//! Writers accept any `io::Write` sink, so callers can target a file, a
//! pipe, or an in-memory buffer in tests.

use std::io::Write;

use csv::Writer;

use rail_dynamics::MotionProfile;
use rail_signal::BlockOccupancy;

use crate::ReportResult;

/// Write a motion profile, one row per time step.
pub fn write_motion_csv<W: Write>(sink: W, profile: &MotionProfile, dt: f64) -> ReportResult<()> {
    let mut wtr = Writer::from_writer(sink);
    wtr.write_record(["time_s", "distance_m", "speed_mps", "acceleration_mps2", "effort"])?;
    for i in 0..profile.len() {
        wtr.write_record(&[
            (i as f64 * dt).to_string(),
            profile.distance[i].to_string(),
            profile.speed[i].to_string(),
            profile.acceleration[i].to_string(),
            profile.effort[i].to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write block occupancy records, one row per block.  Undefined fields are
/// left as empty cells.
pub fn write_block_csv<W: Write>(sink: W, records: &[BlockOccupancy]) -> ReportResult<()> {
    let mut wtr = Writer::from_writer(sink);
    wtr.write_record([
        "block",
        "booking_time_s",
        "arrival_time_s",
        "release_time_s",
        "speed_diff",
        "matched_index",
    ])?;
    for (i, r) in records.iter().enumerate() {
        wtr.write_record(&[
            i.to_string(),
            cell(r.booking_time_s),
            cell(r.arrival_time_s),
            cell(r.release_time_s),
            cell(r.speed_diff),
            r.matched_index.map_or(String::new(), |x| x.to_string()),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

fn cell(v: Option<f64>) -> String {
    v.map_or(String::new(), |x| x.to_string())
}
