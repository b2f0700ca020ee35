#[cfg(test)]
mod tests {
    use crate::cluster::{GeoBounds, GeoPoint, inside};

    #[test]
    fn test_extend_and_contains() {
        let b = GeoBounds::from_point(GeoPoint::new(59.955982, 30.244759))
            .extend(GeoPoint::new(59.955975, 30.24472))
            .extend(GeoPoint::new(59.96698, 30.244358));

        assert_eq!(b.south_west(), GeoPoint::new(59.955975, 30.244358));
        assert_eq!(b.north_east(), GeoPoint::new(59.96698, 30.244759));

        assert!(b.contains(&GeoPoint::new(59.96, 30.2445)));
        assert!(!b.contains(&GeoPoint::new(59.97, 30.2445)));
        assert!(!b.contains(&GeoPoint::new(59.96, 30.25)));
    }

    #[test]
    fn test_contains_edges() {
        let b = GeoBounds::from_point(GeoPoint::new(-1.0, -1.0)).extend(GeoPoint::new(1.0, 1.0));
        assert!(b.contains(&GeoPoint::new(1.0, 1.0)));
        assert!(b.contains(&GeoPoint::new(-1.0, 0.0)));
        assert!(!b.contains(&GeoPoint::new(1.0000001, 0.0)));
    }

    #[test]
    fn test_degenerate_box() {
        let p = GeoPoint::new(49.282263, -123.042992);
        let b = GeoBounds::from_point(p);
        assert!(b.contains(&p));
        assert!(!b.contains(&GeoPoint::new(49.282263, -123.04299)));
    }

    #[test]
    fn test_inside() {
        let outer = GeoBounds::from_point(GeoPoint::new(0.0, 0.0)).extend(GeoPoint::new(10.0, 10.0));
        let inner = GeoBounds::from_point(GeoPoint::new(2.0, 2.0)).extend(GeoPoint::new(3.0, 3.0));
        assert!(inner.inside(&outer));
        assert!(!outer.inside(&inner));
        assert!(outer.inside(&outer));
        assert!(inside(
            &GeoPoint::new(1.0, 1.0),
            &GeoPoint::new(2.0, 2.0),
            &outer.south_west(),
            &outer.north_east()
        ));
    }

    #[test]
    fn test_nan_is_never_contained() {
        let b = GeoBounds::from_point(GeoPoint::new(0.0, 0.0)).extend(GeoPoint::new(1.0, 1.0));
        assert!(!b.contains(&GeoPoint::new(f64::NAN, 0.5)));
    }
}
