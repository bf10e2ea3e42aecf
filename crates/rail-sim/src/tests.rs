//! Integration-style tests for the scenario pipeline.

#[cfg(test)]
mod helpers {
    use rail_core::TrainConfig;
    use rail_dynamics::{BrakingParams, PowerType};
    use rail_signal::{Block, SchedulerParams};
    use rail_track::{PiecewiseProfile, TrackGeometry};

    use crate::ScenarioConfig;

    /// The reference end-to-end scenario: 50 t passenger train, 200 m long,
    /// 1 km of track with a two-step gradient and a tightening curve,
    /// blocks at 200/600/900 m.
    pub fn reference_config() -> ScenarioConfig {
        let slope = PiecewiseProfile::new(
            vec![0.0, 400.0, 700.0, 1_000.0],
            vec![0.01, 0.02, 0.01],
        )
        .unwrap();
        let curve =
            PiecewiseProfile::new(vec![0.0, 500.0, 1_000.0], vec![500.0, 200.0]).unwrap();

        let blocks = [200, 600, 900]
            .into_iter()
            .map(|position| Block {
                position,
                release_speed:  10.0,
                overlap:        50.0,
                release_time_s: 5.0,
                setting_time_s: 10.0,
            })
            .collect();

        ScenarioConfig {
            train: TrainConfig::new(50_000.0, 200_000.0, rail_core::TrainType::Passenger)
                .unwrap(),
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
        }
    }
}

#[cfg(test)]
mod pipeline {
    use crate::{run_scenario, SimError};

    #[test]
    fn produces_full_report() {
        let report = run_scenario(&super::helpers::reference_config()).unwrap();

        // One sample per dt-spaced position, 0..=1000 m.
        assert_eq!(report.slope_samples.len(), 1_001);
        assert_eq!(report.curve_samples.len(), 1_001);

        // Aggregates over a fully covered track are defined and bounded by
        // the interval extremes.
        assert!((1.0..=2.0).contains(&report.mean_slope_percent));
        assert!(report.mean_curve_resistance_n > 0.0);

        // Powered run respects the cap and truncates at the target.
        assert!(report.acceleration.max_speed() <= 55.0);
        assert!(report.acceleration.final_distance() >= 1_000.0);

        // Braking and scheduling outputs are present.
        assert!(!report.braking.is_empty());
        assert_eq!(report.blocks.len(), 3);
        assert!(report.energy.energy_kwh > 0.0);
        assert_eq!(
            report.safety.stopping_distances.len(),
            report.acceleration.len()
        );
    }

    #[test]
    fn block_arrivals_follow_the_powered_timeline() {
        let config = super::helpers::reference_config();
        let report = run_scenario(&config).unwrap();
        let steps = report.acceleration.len();

        for (record, block) in report.blocks.iter().zip(&config.blocks) {
            match record.arrival_time_s {
                // Block position indexes the powered timeline directly.
                Some(t) => assert_eq!(t, block.position as f64 * config.dt),
                None => assert!(block.position as usize >= steps),
            }
        }
    }

    #[test]
    fn rerun_is_identical() {
        let config = super::helpers::reference_config();
        let a = run_scenario(&config).unwrap();
        let b = run_scenario(&config).unwrap();
        assert_eq!(a.acceleration, b.acceleration);
        assert_eq!(a.braking, b.braking);
        assert_eq!(a.blocks, b.blocks);
        assert_eq!(a.mean_slope_percent, b.mean_slope_percent);
    }

    #[test]
    fn rejects_bad_config() {
        let mut config = super::helpers::reference_config();
        config.train_length_m = 0.0;
        assert!(matches!(run_scenario(&config), Err(SimError::Config(_))));

        let mut config = super::helpers::reference_config();
        config.dt = -1.0;
        assert!(matches!(run_scenario(&config), Err(SimError::Config(_))));

        let mut config = super::helpers::reference_config();
        config.distance_m = f64::NAN;
        assert!(matches!(run_scenario(&config), Err(SimError::Config(_))));
    }

    #[test]
    fn nominal_slope_covers_uncovered_track() {
        // Geometry far away from the simulated stretch: every sample is
        // undefined, so the powered run falls back to the nominal gradient.
        let mut config = super::helpers::reference_config();
        config.geometry.slope = rail_track::PiecewiseProfile::new(
            vec![5_000.0, 6_000.0],
            vec![0.01],
        )
        .unwrap();
        config.geometry.curve = rail_track::PiecewiseProfile::new(
            vec![5_000.0, 6_000.0],
            vec![500.0],
        )
        .unwrap();

        let report = run_scenario(&config).unwrap();
        assert!(report.slope_samples.iter().all(Option::is_none));
        assert_eq!(report.mean_slope_percent, 2.0);
        assert_eq!(report.mean_curve_resistance_n, 0.0);
    }
}

#[cfg(test)]
mod aggregate {
    use crate::mean_defined;

    #[test]
    fn excludes_undefined() {
        let samples = [Some(1.0), None, Some(3.0)];
        assert_eq!(mean_defined(&samples), Some(2.0));
    }

    #[test]
    fn all_undefined_is_none() {
        assert_eq!(mean_defined(&[None, None]), None);
        assert_eq!(mean_defined(&[]), None);
    }
}
