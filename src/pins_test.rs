#[cfg(test)]
mod tests {
    use crate::cluster::GeoPoint;
    use crate::pins::{LoadError, load_pins, read_csv_pins, read_json_pins};
    use serde_json::json;
    use std::fs;

    #[test]
    fn test_json_pins() {
        let data = r#"[
            {"lat": 49.2827, "lng": -123.1207, "title": "Downtown"},
            {"lat": 49.2500, "lng": -123.0000},
            {"lat": "north", "lng": -123.0},
            {"title": "nowhere"}
        ]"#;
        let pins = read_json_pins(data.as_bytes()).unwrap();
        assert_eq!(pins.len(), 2);
        assert_eq!(pins[0].coord, GeoPoint::new(49.2827, -123.1207));
        assert_eq!(pins[0].payload["title"], json!("Downtown"));
        assert_eq!(pins[1].coord, GeoPoint::new(49.25, -123.0));
    }

    #[test]
    fn test_json_not_an_array() {
        let err = read_json_pins(r#"{"lat": 1, "lng": 2}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::NotAnArray));
    }

    #[test]
    fn test_csv_with_header() {
        let data = "latitude,longitude,name
40.7128,-74.0060,city hall
40.7130,-74.0062
bad,-74.0
41.0000";
        let pins = read_csv_pins(data.as_bytes()).unwrap();
        assert_eq!(pins.len(), 2);
        assert_eq!(pins[0].coord, GeoPoint::new(40.7128, -74.006));
        assert_eq!(pins[0].payload["name"], json!("city hall"));
        assert_eq!(pins[1].payload["latitude"], json!("40.7130"));
    }

    #[test]
    fn test_csv_without_header() {
        let data = "40.7128,-74.0060\n40.7500,-73.9900,extra\n";
        let pins = read_csv_pins(data.as_bytes()).unwrap();
        assert_eq!(pins.len(), 2);
        assert_eq!(pins[1].coord, GeoPoint::new(40.75, -73.99));
        assert_eq!(pins[1].payload, json!(["40.7500", "-73.9900", "extra"]));
    }

    #[test]
    fn test_csv_empty() {
        assert!(read_csv_pins("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_load_pins_by_extension() {
        let dir = std::env::temp_dir();
        let json_file = dir.join("rust_pin_cluster_pins_test.json");
        let csv_file = dir.join("rust_pin_cluster_pins_test.csv");
        let txt_file = dir.join("rust_pin_cluster_pins_test.txt");
        fs::write(&json_file, r#"[{"lat": 1.5, "lng": 2.5}]"#).expect("Failed to write JSON");
        fs::write(&csv_file, "1.5,2.5\n3.5,4.5\n").expect("Failed to write CSV");
        fs::write(&txt_file, "1.5,2.5\n").expect("Failed to write TXT");

        assert_eq!(load_pins(&json_file).unwrap().len(), 1);
        assert_eq!(load_pins(&csv_file).unwrap().len(), 2);
        assert!(matches!(
            load_pins(&txt_file),
            Err(LoadError::UnsupportedFormat(_))
        ));

        fs::remove_file(&json_file).ok();
        fs::remove_file(&csv_file).ok();
        fs::remove_file(&txt_file).ok();
    }

    #[test]
    fn test_load_missing_file() {
        let missing = std::env::temp_dir().join("rust_pin_cluster_missing.json");
        assert!(matches!(load_pins(&missing), Err(LoadError::Io { .. })));
    }
}
