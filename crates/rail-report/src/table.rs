//! Fixed-width text tables for terminal output.

use std::fmt::Write;

use rail_dynamics::MotionProfile;
use rail_signal::BlockOccupancy;

/// One-paragraph summary of a motion profile.
pub fn motion_summary(label: &str, profile: &MotionProfile, dt: f64) -> String {
    format!(
        "{label}: {} steps over {:.1} s, {:.1} m covered, peak {:.1} m/s",
        profile.len(),
        (profile.len().saturating_sub(1)) as f64 * dt,
        profile.final_distance(),
        profile.max_speed(),
    )
}

/// Render block occupancy records as a fixed-width table.
///
/// Undefined timestamps print as `-` so "no data" never reads as zero.
pub fn block_table(records: &[BlockOccupancy]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5}  {:>10}  {:>10}  {:>10}  {:>8}  {:>7}",
        "block", "booked_s", "arrival_s", "release_s", "v_diff", "match"
    );
    for (i, r) in records.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>5}  {:>10}  {:>10}  {:>10}  {:>8}  {:>7}",
            i,
            fmt_opt(r.booking_time_s),
            fmt_opt(r.arrival_time_s),
            fmt_opt(r.release_time_s),
            fmt_opt(r.speed_diff),
            r.matched_index.map_or("-".to_string(), |x| x.to_string()),
        );
    }
    out
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map_or("-".to_string(), |x| format!("{x:.1}"))
}
