//! Unit tests for cr-core primitives.

#[cfg(test)]
mod ids {
    use crate::NodeId;

    #[test]
    fn from_index_and_back() {
        let id = NodeId::from_index(42).unwrap();
        assert_eq!(id, NodeId(42));
        assert_eq!(id.index(), 42);
    }

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(NodeId(100) > NodeId(99));
    }

    #[test]
    fn from_index_never_yields_the_sentinel() {
        let last = u32::MAX as usize;
        assert_eq!(NodeId::from_index(last - 1), Some(NodeId(u32::MAX - 1)));
        assert_eq!(NodeId::from_index(last), None);
        assert_eq!(NodeId::from_index(last + 1), None);
        assert_eq!(NodeId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "#7");
    }
}

#[cfg(test)]
mod geo {
    use crate::{GeoPoint, great_circle_distance};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(28.61, 77.20);
        assert!(p.distance(p) < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.19 km
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 0.0);
        let d = a.distance(b);
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(28.61, 77.20);
        let b = GeoPoint::new(28.72, 77.25);
        assert!((a.distance(b) - b.distance(a)).abs() < 1e-12);
    }

    #[test]
    fn antipodal_is_half_circumference() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 180.0);
        let d = a.distance(b);
        assert!((d - std::f64::consts::PI * crate::EARTH_RADIUS).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn missing_coordinates_give_zero() {
        let p = GeoPoint::new(28.61, 77.20);
        assert_eq!(great_circle_distance(Some(p), None), 0.0);
        assert_eq!(great_circle_distance(None, Some(p)), 0.0);
        assert_eq!(great_circle_distance(None, None), 0.0);
    }

    #[test]
    fn present_coordinates_match_haversine() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        assert_eq!(great_circle_distance(Some(a), Some(b)), a.distance(b));
    }
}

#[cfg(test)]
mod weight {
    use crate::{CoreError, WeightSelector};

    #[test]
    fn default_is_distance() {
        assert_eq!(WeightSelector::default(), WeightSelector::Distance);
    }

    #[test]
    fn parse_known_names() {
        assert_eq!("distance".parse::<WeightSelector>().unwrap(), WeightSelector::Distance);
        assert_eq!("TIME".parse::<WeightSelector>().unwrap(), WeightSelector::Time);
        assert_eq!(" cost ".parse::<WeightSelector>().unwrap(), WeightSelector::Cost);
    }

    #[test]
    fn parse_unknown_name_fails() {
        let err = "speed".parse::<WeightSelector>().unwrap_err();
        assert!(matches!(err, CoreError::Parse(_)));
    }

    #[test]
    fn display_matches_parse() {
        for w in WeightSelector::ALL {
            assert_eq!(w.to_string().parse::<WeightSelector>().unwrap(), w);
        }
    }

    #[test]
    fn only_distance_is_geodesic() {
        assert!(WeightSelector::Distance.is_geodesic());
        assert!(!WeightSelector::Time.is_geodesic());
        assert!(!WeightSelector::Cost.is_geodesic());
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, DEFAULT_SPEED, GraphConfig};

    #[test]
    fn defaults() {
        let c = GraphConfig::default();
        assert!(!c.directed);
        assert_eq!(c.default_speed, DEFAULT_SPEED);
        assert!(GraphConfig::directed().directed);
        assert!(!GraphConfig::undirected().directed);
    }

    #[test]
    fn default_time_policy() {
        let c = GraphConfig::default();
        assert_eq!(c.default_time(100.0), 2.0);
    }

    #[test]
    fn validate_rejects_bad_speed() {
        for speed in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let c = GraphConfig { default_speed: speed, ..GraphConfig::default() };
            assert!(matches!(c.validate(), Err(CoreError::Config(_))), "speed {speed}");
        }
        assert!(GraphConfig::default().validate().is_ok());
    }
}
