//! A single cluster: members, running centroid and grid bounds

use super::bounds::GeoBounds;
use super::error::ProjectionError;
use super::point::{GeoPoint, PinRecord};
use super::projection::{Projector, to_geo_checked, to_pixel_checked};

/// Cluster is a group of pins that fell into one grid cell during a pass
///
/// Members are indices into the pin list the pass ran over, in the order
/// they were assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    members: Vec<usize>,
    centroid: GeoPoint,
    bounds: GeoBounds,
}

impl Cluster {
    /// Starts a cluster from its first pin
    pub(crate) fn seed<P: Projector + ?Sized>(
        index: usize,
        coord: GeoPoint,
        grid_size: f64,
        projector: &P,
    ) -> Result<Self, ProjectionError> {
        let mut cluster = Cluster {
            members: Vec::new(),
            centroid: coord,
            bounds: GeoBounds::from_point(coord),
        };
        cluster.add_pin(index, coord, grid_size, projector)?;
        Ok(cluster)
    }

    /// Adds a pin to the cluster, moves the centroid and recomputes bounds
    ///
    /// With `l` members before the call the centroid becomes
    /// `(centroid * (l - 1) + coord) / l`, so the second pin replaces the
    /// centroid outright. Changing this weighting changes which pins end up
    /// grouped together.
    ///
    /// Nothing is modified if the projector fails.
    pub(crate) fn add_pin<P: Projector + ?Sized>(
        &mut self,
        index: usize,
        coord: GeoPoint,
        grid_size: f64,
        projector: &P,
    ) -> Result<(), ProjectionError> {
        let centroid = if self.members.is_empty() {
            coord
        } else {
            let l = self.members.len() as f64;
            GeoPoint::new(
                (self.centroid.lat * (l - 1.0) + coord.lat) / l,
                (self.centroid.lng * (l - 1.0) + coord.lng) / l,
            )
        };
        let bounds = grid_bounds(centroid, grid_size, projector)?;

        self.centroid = centroid;
        self.bounds = bounds;
        self.members.push(index);
        Ok(())
    }

    /// Indices of member pins in assignment order
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false for a cluster returned from a pass
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn centroid(&self) -> GeoPoint {
        self.centroid
    }

    pub fn bounds(&self) -> GeoBounds {
        self.bounds
    }

    /// Member pins looked up in the list the pass ran over
    pub fn pins<'a, T>(
        &'a self,
        pins: &'a [PinRecord<T>],
    ) -> impl Iterator<Item = &'a PinRecord<T>> {
        self.members.iter().filter_map(move |&i| pins.get(i))
    }
}

/// Calculates the geographic box spanning `grid_size` pixels around `center`
///
/// The center is projected, pushed out by the grid size towards the
/// north-east and south-west corners in screen space, and both corners are
/// projected back. The same pixel margin covers fewer degrees the further
/// the map is zoomed in.
pub fn grid_bounds<P: Projector + ?Sized>(
    center: GeoPoint,
    grid_size: f64,
    projector: &P,
) -> Result<GeoBounds, ProjectionError> {
    let px = to_pixel_checked(projector, center)?;

    // screen y grows downwards
    let top_right = px.offset(grid_size, -grid_size);
    let bottom_left = px.offset(-grid_size, grid_size);

    let ne = to_geo_checked(projector, top_right)?;
    let sw = to_geo_checked(projector, bottom_left)?;

    Ok(GeoBounds::from_point(center).extend(ne).extend(sw))
}
