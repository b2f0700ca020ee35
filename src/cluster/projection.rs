//! Conversion between geographic and pixel coordinates
//!
//! The clustering pass never talks to a map directly; it is handed a
//! [`Projector`] that is fixed for the whole pass.

use std::f64::consts::PI;

use super::error::ProjectionError;
use super::point::{GeoPoint, PixelPoint};

/// Standard web map tile size in pixels
pub const TILE_SIZE: f64 = 256.0;

/// Web Mercator cannot represent the poles, latitudes are clamped to this
pub const LATITUDE_MAX: f64 = 85.05112877980659;

/// Highest zoom level a viewport accepts
pub const MAX_ZOOM: f64 = 22.0;

/// A snapshot of the mapping between geographic and pixel coordinates
///
/// `to_pixel` and `to_geo` must be inverse to each other (up to floating
/// point error) for as long as the snapshot lives.
pub trait Projector {
    fn to_pixel(&self, p: GeoPoint) -> Result<PixelPoint, ProjectionError>;
    fn to_geo(&self, p: PixelPoint) -> Result<GeoPoint, ProjectionError>;
}

/// Projects `p` and rejects NaN/infinite results
pub fn to_pixel_checked<P: Projector + ?Sized>(
    projector: &P,
    p: GeoPoint,
) -> Result<PixelPoint, ProjectionError> {
    let px = projector.to_pixel(p)?;
    if !px.is_finite() {
        return Err(ProjectionError::NonFinite { x: px.x, y: px.y });
    }
    Ok(px)
}

/// Unprojects `p` and rejects NaN/infinite results
pub fn to_geo_checked<P: Projector + ?Sized>(
    projector: &P,
    p: PixelPoint,
) -> Result<GeoPoint, ProjectionError> {
    let geo = projector.to_geo(p)?;
    if !geo.is_finite() {
        return Err(ProjectionError::NonFinite {
            x: geo.lng,
            y: geo.lat,
        });
    }
    Ok(geo)
}

/// Viewport is a Web Mercator map view: center, zoom and screen size
///
/// Pixel coordinates are relative to the top-left corner of the view, so
/// the center of the map lands on `(width / 2, height / 2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: GeoPoint,
    pub zoom: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(center: GeoPoint, zoom: f64, width: f64, height: f64) -> Self {
        Viewport {
            center,
            zoom,
            width,
            height,
        }
    }

    /// Re-centers the view, zoom and size stay as they are
    pub fn pan_to(&mut self, center: GeoPoint) {
        self.center = center;
    }

    /// Size of the whole world in pixels at the current zoom
    pub fn world_size(&self) -> f64 {
        TILE_SIZE * self.zoom.exp2()
    }

    /// Checks that the viewport can be used for projection
    pub fn ready(&self) -> Result<(), ProjectionError> {
        if !self.center.is_finite() {
            return Err(ProjectionError::NotReady(format!(
                "center ({}, {}) is not a finite coordinate",
                self.center.lat, self.center.lng
            )));
        }
        if !self.zoom.is_finite() || !(0.0..=MAX_ZOOM).contains(&self.zoom) {
            return Err(ProjectionError::NotReady(format!(
                "zoom {} outside 0..={MAX_ZOOM}",
                self.zoom
            )));
        }
        let sized = self.width > 0.0 && self.height > 0.0;
        if !sized || !self.width.is_finite() || !self.height.is_finite() {
            return Err(ProjectionError::NotReady(format!(
                "viewport size {}x{} is empty",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// World pixel of the viewport's top-left corner
    fn origin(&self) -> PixelPoint {
        let size = self.world_size();
        let c = world_pixel(self.center, size);
        c.offset(-self.width / 2.0, -self.height / 2.0)
    }
}

impl Projector for Viewport {
    fn to_pixel(&self, p: GeoPoint) -> Result<PixelPoint, ProjectionError> {
        self.ready()?;
        let w = world_pixel(p, self.world_size());
        let origin = self.origin();
        Ok(PixelPoint::new(w.x - origin.x, w.y - origin.y))
    }

    fn to_geo(&self, p: PixelPoint) -> Result<GeoPoint, ProjectionError> {
        self.ready()?;
        let origin = self.origin();
        let w = p.offset(origin.x, origin.y);
        Ok(world_geo(w, self.world_size()))
    }
}

/// Web Mercator world pixel for a coordinate, for a world `size` pixels wide
fn world_pixel(p: GeoPoint, size: f64) -> PixelPoint {
    let lat = p.lat.clamp(-LATITUDE_MAX, LATITUDE_MAX);
    let sin_lat = lat.to_radians().sin();
    let x = (p.lng + 180.0) / 360.0 * size;
    let y = (0.5 - ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / (4.0 * PI)) * size;
    PixelPoint::new(x, y)
}

/// Inverse of [`world_pixel`]
fn world_geo(p: PixelPoint, size: f64) -> GeoPoint {
    let lng = p.x / size * 360.0 - 180.0;
    let lat = (PI * (1.0 - 2.0 * p.y / size)).sinh().atan().to_degrees();
    GeoPoint::new(lat, lng)
}

/// PlateCarree maps degrees linearly onto pixels
///
/// `origin` lands on pixel (0, 0); latitude grows upwards, so pixel y is
/// `(origin.lat - lat) * pixels_per_degree`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateCarree {
    pub origin: GeoPoint,
    pub pixels_per_degree: f64,
}

impl PlateCarree {
    pub fn new(origin: GeoPoint, pixels_per_degree: f64) -> Self {
        PlateCarree {
            origin,
            pixels_per_degree,
        }
    }

    fn ready(&self) -> Result<(), ProjectionError> {
        if self.pixels_per_degree > 0.0 && self.pixels_per_degree.is_finite() {
            Ok(())
        } else {
            Err(ProjectionError::NotReady(format!(
                "scale {} pixels per degree",
                self.pixels_per_degree
            )))
        }
    }
}

impl Projector for PlateCarree {
    fn to_pixel(&self, p: GeoPoint) -> Result<PixelPoint, ProjectionError> {
        self.ready()?;
        Ok(PixelPoint::new(
            (p.lng - self.origin.lng) * self.pixels_per_degree,
            (self.origin.lat - p.lat) * self.pixels_per_degree,
        ))
    }

    fn to_geo(&self, p: PixelPoint) -> Result<GeoPoint, ProjectionError> {
        self.ready()?;
        Ok(GeoPoint::new(
            self.origin.lat - p.y / self.pixels_per_degree,
            self.origin.lng + p.x / self.pixels_per_degree,
        ))
    }
}
