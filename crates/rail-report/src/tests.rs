//! Unit tests for rail-report.

#[cfg(test)]
mod helpers {
    use rail_dynamics::MotionProfile;
    use rail_signal::BlockOccupancy;

    pub fn small_motion() -> MotionProfile {
        MotionProfile {
            distance:     vec![0.0, 1.0, 3.0],
            speed:        vec![0.0, 1.0, 2.0],
            acceleration: vec![0.0, 1.0, 1.0],
            effort:       vec![0.0, 100.0, 100.0],
        }
    }

    pub fn mixed_records() -> Vec<BlockOccupancy> {
        vec![
            BlockOccupancy {
                speed_diff:     Some(0.0),
                matched_index:  Some(4),
                booking_time_s: Some(3.0),
                arrival_time_s: Some(5.0),
                release_time_s: Some(9.0),
            },
            BlockOccupancy::default(), // everything undefined
        ]
    }
}

#[cfg(test)]
mod table {
    use crate::{block_table, motion_summary};

    #[test]
    fn summary_mentions_peak_and_distance() {
        let s = motion_summary("powered", &super::helpers::small_motion(), 1.0);
        assert!(s.contains("powered"));
        assert!(s.contains("3 steps"));
        assert!(s.contains("3.0 m"));
        assert!(s.contains("2.0 m/s"));
    }

    #[test]
    fn undefined_fields_render_as_dash() {
        let table = block_table(&super::helpers::mixed_records());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3); // header + 2 rows
        assert!(lines[1].contains("5.0"));
        assert!(lines[2].contains('-'));
        assert!(!lines[2].contains("0.0"), "undefined must not read as zero");
    }
}

#[cfg(test)]
mod csv {
    use crate::{write_block_csv, write_motion_csv};

    #[test]
    fn motion_roundtrip_shape() {
        let mut buf = Vec::new();
        write_motion_csv(&mut buf, &super::helpers::small_motion(), 0.5).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4); // header + 3 steps
        assert_eq!(lines[0], "time_s,distance_m,speed_mps,acceleration_mps2,effort");
        assert!(lines[2].starts_with("0.5,1,1,")); // second step at t = 0.5
    }

    #[test]
    fn undefined_block_fields_are_empty_cells() {
        let mut buf = Vec::new();
        write_block_csv(&mut buf, &super::helpers::mixed_records()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "1,,,,,");
    }
}
