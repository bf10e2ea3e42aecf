//! Scenario configuration and the pipeline runner.

use log::{debug, info};

use rail_core::TrainConfig;
use rail_dynamics::{
    accelerate, assess_safety, brake, estimate_energy, AccelParams, BrakingParams, EnergyEstimate,
    MotionProfile, PowerType, SafetyParams, SafetyReport,
};
use rail_signal::{block_occupancy, Block, BlockOccupancy, SchedulerParams};
use rail_track::TrackGeometry;

use crate::{SimError, SimResult};

// ── ScenarioConfig ────────────────────────────────────────────────────────────

/// Everything one simulation request needs.  Constructed by the calling
/// layer (CLI, web form, config file) and consumed read-only by
/// [`run_scenario`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioConfig {
    pub train: TrainConfig,
    /// Train length, metres.  Strictly positive.
    pub train_length_m: f64,
    pub geometry: TrackGeometry,
    /// Distance to simulate, metres.
    pub distance_m: f64,
    /// Speed cap, m/s.
    pub v_max: f64,
    /// Time step, seconds.
    pub dt: f64,
    /// Gradient (percent) assumed when no slope sample is defined.
    pub nominal_slope_percent: f64,
    /// Traction chain for the energy estimate.
    pub power: PowerType,
    pub braking: BrakingParams,
    pub blocks: Vec<Block>,
    pub scheduler: SchedulerParams,
}

// ── ScenarioReport ────────────────────────────────────────────────────────────

/// Output of one pipeline run — freshly allocated, no state retained.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioReport {
    /// Equivalent slope (fraction) per sample position; `None` = no coverage.
    pub slope_samples: Vec<Option<f64>>,
    /// Curve resistance (N) per sample position; `None` = no coverage.
    pub curve_samples: Vec<Option<f64>>,
    /// Mean defined slope, percent, as fed to the powered run.
    pub mean_slope_percent: f64,
    /// Mean defined curve resistance, Newtons.
    pub mean_curve_resistance_n: f64,
    pub acceleration: MotionProfile,
    pub braking: MotionProfile,
    pub blocks: Vec<BlockOccupancy>,
    pub energy: EnergyEstimate,
    pub safety: SafetyReport,
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

/// Run the full pipeline for one scenario.
///
/// Fails fast on configuration problems (non-positive `train_length_m`,
/// `distance_m`, or `dt`) and propagates kernel errors unchanged; a failed
/// run produces no partial report.
pub fn run_scenario(config: &ScenarioConfig) -> SimResult<ScenarioReport> {
    if !(config.train_length_m.is_finite() && config.train_length_m > 0.0) {
        return Err(SimError::Config(format!(
            "train_length_m must be > 0, got {}",
            config.train_length_m
        )));
    }
    if !(config.distance_m.is_finite() && config.distance_m > 0.0) {
        return Err(SimError::Config(format!(
            "distance_m must be > 0, got {}",
            config.distance_m
        )));
    }
    if !(config.dt.is_finite() && config.dt > 0.0) {
        return Err(SimError::Config(format!("dt must be > 0, got {}", config.dt)));
    }

    info!(
        "running scenario: {} train, {} m at dt {} s",
        config.train.train_type, config.distance_m, config.dt
    );

    // ── ① Sample the geometry under the train footprint ───────────────────
    let sample_positions: Vec<f64> = {
        let n = (config.distance_m / config.dt) as usize;
        (0..=n).map(|i| i as f64 * config.dt).collect()
    };
    let slope_samples = config
        .geometry
        .equivalent_slope(&sample_positions, config.train_length_m);
    let curve_samples = config.geometry.curve_resistance(
        &sample_positions,
        config.train_length_m,
        config.train.mass_kg,
    );

    // ── ② Aggregate, excluding undefined samples ──────────────────────────
    let mean_slope_percent = mean_defined(&slope_samples)
        .map(|s| s * 100.0)
        .unwrap_or(config.nominal_slope_percent);
    let mean_curve_resistance_n = mean_defined(&curve_samples).unwrap_or(0.0);
    debug!(
        "mean slope {:.4} %, mean curve resistance {:.1} N",
        mean_slope_percent, mean_curve_resistance_n
    );

    // ── ③ Powered run over the aggregated resistances ─────────────────────
    let accel_params = AccelParams {
        distance: config.distance_m,
        v_max: config.v_max,
        dt: config.dt,
        curve_resistance_n: mean_curve_resistance_n,
        ..AccelParams::default()
    };
    let acceleration = accelerate(&config.train, mean_slope_percent, &accel_params)?;

    // ── ④ Braking run over the sampled slope profile ──────────────────────
    //
    // Uncovered positions brake as level track; the sampling layer keeps
    // them distinguishable, this consumer chooses the neutral value.
    let braking_slopes: Vec<f64> = slope_samples.iter().map(|s| s.unwrap_or(0.0)).collect();
    let braking = brake(
        config.v_max,
        config.distance_m,
        Some(&braking_slopes),
        &config.braking,
    )?;

    // ── ⑤ Block occupancy over the powered run's timeline ─────────────────
    let time_profile = acceleration.time_profile(config.dt);
    let blocks = block_occupancy(
        &config.blocks,
        &acceleration,
        &time_profile,
        config.train_length_m,
        &config.scheduler,
    );

    // ── ⑥ Energy and safety assessment ────────────────────────────────────
    let energy = estimate_energy(
        &config.train,
        &braking_slopes,
        &acceleration.speed,
        config.power,
    )?;
    let safety = assess_safety(
        &acceleration.speed,
        &braking_slopes,
        &[],
        &SafetyParams::default(),
    );

    info!(
        "scenario done: {} powered steps, {} braking steps, {} blocks",
        acceleration.len(),
        braking.len(),
        blocks.len()
    );

    Ok(ScenarioReport {
        slope_samples,
        curve_samples,
        mean_slope_percent,
        mean_curve_resistance_n,
        acceleration,
        braking,
        blocks,
        energy,
        safety,
    })
}

/// Mean of the defined entries, or `None` when every entry is undefined.
///
/// Undefined samples are excluded from the aggregate rather than counted
/// as zero.
pub fn mean_defined(samples: &[Option<f64>]) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in samples.iter().flatten() {
        sum += v;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}
