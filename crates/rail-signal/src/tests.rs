//! Unit tests for rail-signal.

#[cfg(test)]
mod helpers {
    use rail_dynamics::MotionProfile;

    use crate::Block;

    /// A motion profile advancing 1 m and 10 m/s per step: speeds
    /// 10..=70, positions 0..=6, one second per index.
    pub fn ramp_motion() -> MotionProfile {
        let speed: Vec<f64> = (1..=7).map(|i| i as f64 * 10.0).collect();
        let distance: Vec<f64> = (0..7).map(|i| i as f64).collect();
        let n = speed.len();
        MotionProfile {
            speed,
            distance,
            acceleration: vec![0.0; n],
            effort: vec![0.0; n],
        }
    }

    pub fn unit_block(position: i64, release_speed: f64) -> Block {
        Block {
            position,
            release_speed,
            overlap:        1.0,
            release_time_s: 1.0,
            setting_time_s: 1.0,
        }
    }
}

#[cfg(test)]
mod scheduler {
    use crate::{block_occupancy, Block, SchedulerParams};

    fn params() -> SchedulerParams {
        SchedulerParams { reserve_before_arrival_s: 1.0, v_tol: 0.1 }
    }

    #[test]
    fn reference_scenario() {
        // blocks at 2/4/6 with release speeds 10/20/30 over the ramp
        // profile: three records, each with a defined arrival equal to
        // time_profile[position].
        let motion = super::helpers::ramp_motion();
        let time: Vec<f64> = (0..7).map(|i| i as f64).collect();
        let blocks: Vec<Block> = [(2, 10.0), (4, 20.0), (6, 30.0)]
            .into_iter()
            .map(|(p, v)| super::helpers::unit_block(p, v))
            .collect();

        let records = block_occupancy(&blocks, &motion, &time, 1.0, &params());

        assert_eq!(records.len(), 3);
        for (record, block) in records.iter().zip(&blocks) {
            assert_eq!(record.arrival_time_s, Some(time[block.position as usize]));
        }
    }

    #[test]
    fn booking_from_release_speed_match() {
        let motion = super::helpers::ramp_motion();
        let time: Vec<f64> = (0..7).map(|i| i as f64).collect();
        let block = super::helpers::unit_block(4, 30.0);

        let record = &block_occupancy(&[block], &motion, &time, 1.0, &params())[0];

        // 30 m/s first occurs at index 2 → booking = time[2] − setting_time.
        assert_eq!(record.matched_index, Some(2));
        assert_eq!(record.speed_diff, Some(0.0));
        assert_eq!(record.booking_time_s, Some(1.0));
    }

    #[test]
    fn booking_falls_back_to_reserve_lead() {
        let motion = super::helpers::ramp_motion();
        let time: Vec<f64> = (0..7).map(|i| i as f64).collect();
        // 300 m/s never occurs: book reserve_before_arrival before arrival.
        let block = super::helpers::unit_block(3, 300.0);

        let record = &block_occupancy(&[block], &motion, &time, 1.0, &params())[0];

        assert_eq!(record.matched_index, None);
        assert_eq!(record.speed_diff, None);
        assert_eq!(record.booking_time_s, Some(3.0 - 1.0));
        assert_eq!(record.arrival_time_s, Some(3.0));
    }

    #[test]
    fn release_accounts_for_train_and_overlap() {
        let motion = super::helpers::ramp_motion();
        let time: Vec<f64> = (0..7).map(|i| i as f64).collect();
        let block = super::helpers::unit_block(2, 10.0);

        let record = &block_occupancy(&[block], &motion, &time, 1.0, &params())[0];

        // Release index 2 + round(1.0) + 1 = 4 → time[4] + release_time.
        assert_eq!(record.release_time_s, Some(5.0));
    }

    #[test]
    fn out_of_range_lookups_are_none() {
        let motion = super::helpers::ramp_motion();
        let time: Vec<f64> = (0..7).map(|i| i as f64).collect();

        // Block beyond the profile: neither arrival nor release is defined,
        // and with no speed match the booking fallback is undefined too.
        let far = super::helpers::unit_block(50, 300.0);
        let record = &block_occupancy(&[far], &motion, &time, 1.0, &params())[0];
        assert_eq!(record.booking_time_s, None);
        assert_eq!(record.arrival_time_s, None);
        assert_eq!(record.release_time_s, None);

        // Release index past the end while the arrival is still in range.
        let edge = super::helpers::unit_block(6, 10.0);
        let record = &block_occupancy(&[edge], &motion, &time, 1.0, &params())[0];
        assert_eq!(record.arrival_time_s, Some(6.0));
        assert_eq!(record.release_time_s, None);
    }

    #[test]
    fn negative_position_is_undefined() {
        let motion = super::helpers::ramp_motion();
        let time: Vec<f64> = (0..7).map(|i| i as f64).collect();
        let block = super::helpers::unit_block(-3, 300.0);

        let record = &block_occupancy(&[block], &motion, &time, 1.0, &params())[0];
        assert_eq!(record.arrival_time_s, None);
        assert_eq!(record.release_time_s, None);
        assert_eq!(record.booking_time_s, None);
    }

    #[test]
    fn tolerance_widens_the_match() {
        let motion = super::helpers::ramp_motion();
        let time: Vec<f64> = (0..7).map(|i| i as f64).collect();
        let block = super::helpers::unit_block(4, 24.0);

        // v_tol 0.1 finds nothing near 24 m/s…
        let strict = &block_occupancy(&[block.clone()], &motion, &time, 1.0, &params())[0];
        assert_eq!(strict.matched_index, None);

        // …but v_tol 5 matches index 1 (20 m/s, diff 4).
        let wide = SchedulerParams { v_tol: 5.0, ..params() };
        let loose = &block_occupancy(&[block], &motion, &time, 1.0, &wide)[0];
        assert_eq!(loose.matched_index, Some(1));
        assert_eq!(loose.speed_diff, Some(4.0));
    }

    #[test]
    fn records_keep_input_order() {
        let motion = super::helpers::ramp_motion();
        let time: Vec<f64> = (0..7).map(|i| i as f64).collect();
        let blocks = vec![
            super::helpers::unit_block(6, 30.0),
            super::helpers::unit_block(2, 10.0),
        ];
        let records = block_occupancy(&blocks, &motion, &time, 1.0, &params());
        assert_eq!(records[0].arrival_time_s, Some(6.0));
        assert_eq!(records[1].arrival_time_s, Some(2.0));
    }
}
