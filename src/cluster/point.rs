//! Geographic and screen-space point types

use serde::{Deserialize, Serialize};

/// GeoPoint represents a geographic coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// PixelPoint is a screen-space coordinate, x to the right and y downwards
///
/// A pixel point only means something relative to the projection it was
/// produced with.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

/// PinRecord is a coordinate plus whatever the application attached to it
///
/// The clustering code only ever reads `coord`; `payload` is carried through.
#[derive(Debug, Clone, PartialEq)]
pub struct PinRecord<T> {
    pub coord: GeoPoint,
    pub payload: T,
}

/// PinList is a collection of pins, in input order
pub type PinList<T> = Vec<PinRecord<T>>;

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }

    /// Both components are finite numbers
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Checks if this point is south-west of or equal to another point
    /// (a <= b on both axes)
    pub fn less_eq(&self, b: &GeoPoint) -> bool {
        self.lat <= b.lat && self.lng <= b.lng
    }

    /// Checks if this point is north-east of or equal to another point
    /// (a >= b on both axes)
    pub fn greater_eq(&self, b: &GeoPoint) -> bool {
        self.lat >= b.lat && self.lng >= b.lng
    }
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        PixelPoint { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns the point moved by (dx, dy) pixels
    pub fn offset(&self, dx: f64, dy: f64) -> PixelPoint {
        PixelPoint::new(self.x + dx, self.y + dy)
    }
}

impl<T> PinRecord<T> {
    pub fn new(lat: f64, lng: f64, payload: T) -> Self {
        PinRecord {
            coord: GeoPoint::new(lat, lng),
            payload,
        }
    }
}

impl PinRecord<()> {
    /// A pin without payload
    pub fn bare(lat: f64, lng: f64) -> Self {
        PinRecord::new(lat, lng, ())
    }
}
