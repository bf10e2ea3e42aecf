//! Unit tests for rail-core primitives.

#[cfg(test)]
mod train {
    use crate::{CoreError, TrainConfig, TrainType};

    #[test]
    fn valid_config() {
        let cfg = TrainConfig::new(50_000.0, 200_000.0, TrainType::Passenger).unwrap();
        assert_eq!(cfg.mass_kg, 50_000.0);
        assert_eq!(cfg.tractive_effort_n, 200_000.0);
    }

    #[test]
    fn rejects_non_positive_mass() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = TrainConfig::new(bad, 1.0, TrainType::Custom).unwrap_err();
            assert!(matches!(err, CoreError::InvalidParameter { name: "mass_kg", .. }));
        }
    }

    #[test]
    fn rejects_non_positive_effort() {
        let err = TrainConfig::new(1.0, -5.0, TrainType::Custom).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidParameter { name: "tractive_effort_n", .. }
        ));
    }

    #[test]
    fn presets() {
        let f = TrainConfig::freight();
        assert_eq!(f.train_type, TrainType::Freight);
        assert_eq!(f.mass_kg, 100_000.0);

        let p = TrainConfig::passenger();
        assert_eq!(p.train_type, TrainType::Passenger);
        assert_eq!(p.tractive_effort_n, 150_000.0);
    }

    #[test]
    fn weight() {
        let p = TrainConfig::passenger();
        assert!((p.weight_n() - 50_000.0 * 9.81).abs() < 1e-9);
    }

    #[test]
    fn type_labels() {
        assert_eq!(TrainType::Freight.to_string(), "freight");
        assert_eq!(TrainType::Passenger.as_str(), "passenger");
    }
}

#[cfg(test)]
mod units {
    use crate::units::{watt_secs_to_kwh, GRAVITY};

    #[test]
    fn kwh_conversion() {
        // 1 kWh = 3.6e6 W·s
        assert!((watt_secs_to_kwh(3_600_000.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn gravity_is_standard() {
        assert_eq!(GRAVITY, 9.81);
    }
}
