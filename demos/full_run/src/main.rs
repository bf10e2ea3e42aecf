//! Full-pipeline demo: a 50 t passenger train over 1 km of graded, curved
//! track with three signaling blocks.
//!
//! Run with `RUST_LOG=info cargo run -p full_run` for pipeline logging.

use std::fs::File;

use anyhow::Result;

use rail_core::{TrainConfig, TrainType};
use rail_dynamics::{BrakingParams, PowerType};
use rail_report::{block_table, motion_summary, write_block_csv, write_motion_csv};
use rail_signal::{Block, SchedulerParams};
use rail_sim::{run_scenario, ScenarioConfig};
use rail_track::{parse_curve_profile, parse_slope_profile, TrackGeometry};

fn main() -> Result<()> {
    env_logger::init();

    // Track profiles the way a configuration source supplies them:
    // comma-separated breakpoints with percent gradients / metre radii.
    let slope = parse_slope_profile("0, 400, 700, 1000", "1, 2, 1")?;
    let curve = parse_curve_profile("0, 500, 1000", "500, 200")?;

    let blocks: Vec<Block> = [200, 600, 900]
        .into_iter()
        .map(|position| Block {
            position,
            release_speed:  10.0,
            overlap:        50.0,
            release_time_s: 5.0,
            setting_time_s: 10.0,
        })
        .collect();

    let config = ScenarioConfig {
        train: TrainConfig::new(50_000.0, 200_000.0, TrainType::Passenger)?,
        train_length_m: 200.0,
        geometry: TrackGeometry::new(slope, curve),
        distance_m: 1_000.0,
        v_max: 55.0,
        dt: 1.0,
        nominal_slope_percent: 2.0,
        power: PowerType::Electric,
        braking: BrakingParams::default(),
        blocks,
        scheduler: SchedulerParams { reserve_before_arrival_s: 20.0, v_tol: 0.1 },
    };

    let report = run_scenario(&config)?;

    println!("--- Motion ---");
    println!("{}", motion_summary("powered", &report.acceleration, config.dt));
    println!("{}", motion_summary("braking", &report.braking, config.dt));
    println!(
        "mean slope {:.3} %, mean curve resistance {:.1} N",
        report.mean_slope_percent, report.mean_curve_resistance_n
    );

    println!("\n--- Block occupancy ---");
    print!("{}", block_table(&report.blocks));

    println!("\n--- Energy ---");
    println!(
        "{:?}: {} kWh, {} kg CO2",
        config.power, report.energy.energy_kwh, report.energy.co2_kg
    );

    if !report.safety.violations.is_empty() {
        println!("\n--- Safety violations ---");
        for v in &report.safety.violations {
            println!("[{:?}] {:?}: {}", v.severity, v.kind, v.details);
        }
    }

    // CSV artifacts for downstream tooling.
    write_motion_csv(File::create("powered_run.csv")?, &report.acceleration, config.dt)?;
    write_block_csv(File::create("block_occupancy.csv")?, &report.blocks)?;
    println!("\nwrote powered_run.csv and block_occupancy.csv");

    Ok(())
}
