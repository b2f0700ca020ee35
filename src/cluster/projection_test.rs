#[cfg(test)]
mod tests {
    use crate::cluster::{
        GeoPoint, PixelPoint, PlateCarree, ProjectionError, Projector, TILE_SIZE, Viewport,
    };

    fn vancouver(zoom: f64) -> Viewport {
        Viewport::new(GeoPoint::new(49.282263, -123.042992), zoom, 800.0, 600.0)
    }

    #[test]
    fn test_center_maps_to_middle_of_view() {
        let vp = vancouver(14.0);
        let px = vp.to_pixel(vp.center).unwrap();
        assert!((px.x - 400.0).abs() < 1e-6);
        assert!((px.y - 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_round_trip() {
        for zoom in [0.0, 3.0, 10.5, 14.0, 20.0] {
            let vp = vancouver(zoom);
            for p in [
                GeoPoint::new(49.2827, -123.1207),
                GeoPoint::new(-33.8688, 151.2093),
                GeoPoint::new(0.0, 0.0),
                GeoPoint::new(80.0, 179.0),
            ] {
                let back = vp.to_geo(vp.to_pixel(p).unwrap()).unwrap();
                assert!((back.lat - p.lat).abs() < 1e-6, "zoom {zoom}: {p:?} -> {back:?}");
                assert!((back.lng - p.lng).abs() < 1e-6, "zoom {zoom}: {p:?} -> {back:?}");
            }
        }
    }

    #[test]
    fn test_screen_axes() {
        let vp = vancouver(14.0);
        let c = vp.to_pixel(vp.center).unwrap();
        let east = vp.to_pixel(GeoPoint::new(vp.center.lat, vp.center.lng + 0.01)).unwrap();
        let north = vp.to_pixel(GeoPoint::new(vp.center.lat + 0.01, vp.center.lng)).unwrap();
        assert!(east.x > c.x);
        assert!(north.y < c.y);
    }

    #[test]
    fn test_world_size() {
        assert_eq!(vancouver(0.0).world_size(), TILE_SIZE);
        assert_eq!(vancouver(3.0).world_size(), TILE_SIZE * 8.0);
    }

    #[test]
    fn test_latitude_is_clamped() {
        let vp = vancouver(1.0);
        let pole = vp.to_pixel(GeoPoint::new(90.0, 0.0)).unwrap();
        assert!(pole.is_finite());
    }

    #[test]
    fn test_pan_to() {
        let mut vp = vancouver(14.0);
        let target = GeoPoint::new(49.2827, -123.1207);
        vp.pan_to(target);
        assert_eq!(vp.center, target);
        let px = vp.to_pixel(target).unwrap();
        assert!((px.x - 400.0).abs() < 1e-6);
        assert!((px.y - 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_viewport_not_ready() {
        let cases = [
            Viewport::new(GeoPoint::new(0.0, 0.0), 3.0, 0.0, 600.0),
            Viewport::new(GeoPoint::new(0.0, 0.0), f64::NAN, 800.0, 600.0),
            Viewport::new(GeoPoint::new(0.0, 0.0), 30.0, 800.0, 600.0),
            Viewport::new(GeoPoint::new(f64::NAN, 0.0), 3.0, 800.0, 600.0),
        ];
        for vp in cases {
            assert!(matches!(
                vp.to_pixel(GeoPoint::new(0.0, 0.0)),
                Err(ProjectionError::NotReady(_))
            ));
            assert!(matches!(
                vp.to_geo(PixelPoint::new(0.0, 0.0)),
                Err(ProjectionError::NotReady(_))
            ));
        }
    }

    #[test]
    fn test_plate_carree() {
        let proj = PlateCarree::new(GeoPoint::new(10.0, 20.0), 4.0);
        let px = proj.to_pixel(GeoPoint::new(9.0, 22.0)).unwrap();
        assert_eq!(px, PixelPoint::new(8.0, 4.0));
        assert_eq!(proj.to_geo(px).unwrap(), GeoPoint::new(9.0, 22.0));

        let broken = PlateCarree::new(GeoPoint::new(0.0, 0.0), 0.0);
        assert!(broken.to_pixel(GeoPoint::new(0.0, 0.0)).is_err());
    }
}
