//! Geographic bounding boxes

use super::point::GeoPoint;

/// GeoBounds is a latitude/longitude rectangle given by its south-west and
/// north-east corners
///
/// Longitudes are compared as plain numbers, a box never wraps across the
/// antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoBounds {
    sw: GeoPoint,
    ne: GeoPoint,
}

impl GeoBounds {
    /// Degenerate box holding a single point
    pub fn from_point(p: GeoPoint) -> Self {
        GeoBounds { sw: p, ne: p }
    }

    pub fn south_west(&self) -> GeoPoint {
        self.sw
    }

    pub fn north_east(&self) -> GeoPoint {
        self.ne
    }

    /// Grows the box so that it includes `p`
    pub fn extend(mut self, p: GeoPoint) -> Self {
        self.sw.lat = self.sw.lat.min(p.lat);
        self.sw.lng = self.sw.lng.min(p.lng);
        self.ne.lat = self.ne.lat.max(p.lat);
        self.ne.lng = self.ne.lng.max(p.lng);
        self
    }

    /// Checks if `p` lies inside the box, edges included
    pub fn contains(&self, p: &GeoPoint) -> bool {
        p.greater_eq(&self.sw) && p.less_eq(&self.ne)
    }

    /// Checks if the whole of `self` lies inside `outer`
    pub fn inside(&self, outer: &GeoBounds) -> bool {
        inside(&self.sw, &self.ne, &outer.sw, &outer.ne)
    }
}

/// Checks if (innerMin, innerMax) rectangle is inside (outerMin, outerMax) rectangle
pub fn inside(
    inner_min: &GeoPoint,
    inner_max: &GeoPoint,
    outer_min: &GeoPoint,
    outer_max: &GeoPoint,
) -> bool {
    inner_min.greater_eq(outer_min) && inner_max.less_eq(outer_max)
}
