use super::error::ClusterError;
use super::group::Cluster;
use super::hooks::Marker;
use super::point::PinRecord;
use super::projection::{Projector, to_pixel_checked};
use bitvec::prelude::*;

// Grid clustering, one pass over the pins in input order:
//
// clusters = []
// for each pin P
//    target = last cluster C (in creation order) whose bounds contain P
//    if target exists
//       add P to target, move its centroid, recompute its bounds
//    else
//       create a new cluster from P and append it
//
// Bounds are the cluster centroid pushed out by grid_size pixels at the
// pass's projection. Later clusters win over earlier ones when their bounds
// overlap, so the result depends on input order.

/// Pass is the result of one clustering run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pass {
    clusters: Vec<Cluster>,
    /// Input pins left out because their coordinate is not finite
    skipped: BitVec,
}

impl Pass {
    /// Clusters in creation order
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn into_clusters(self) -> Vec<Cluster> {
        self.clusters
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Bit `i` is set when input pin `i` was left out
    pub fn skipped(&self) -> &BitSlice {
        &self.skipped
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.count_ones()
    }

    /// One marker per cluster, placed at the centroid's pixel position
    pub fn markers<P: Projector + ?Sized>(
        &self,
        projector: &P,
    ) -> Result<Vec<Marker>, ClusterError> {
        let mut markers = Vec::with_capacity(self.clusters.len());
        for (i, cluster) in self.clusters.iter().enumerate() {
            let position = to_pixel_checked(projector, cluster.centroid())?;
            markers.push(Marker::new(i, cluster.len(), position));
        }
        Ok(markers)
    }
}

/// Groups pins whose projections fall within `grid_size` pixels of a
/// cluster's centroid
///
/// # Arguments
///
/// * `pins` - Pins to cluster, in the order they are assigned
/// * `grid_size` - Half-width of a cluster's bounds in pixels
/// * `projector` - Projection snapshot used for the whole pass
///
/// Pins with a NaN or infinite coordinate are skipped and reported through
/// [`Pass::skipped`]. Any projector failure aborts the pass.
pub fn grid_cluster<T, P: Projector + ?Sized>(
    pins: &[PinRecord<T>],
    grid_size: f64,
    projector: &P,
) -> Result<Pass, ClusterError> {
    if !(grid_size > 0.0 && grid_size.is_finite()) {
        return Err(ClusterError::InvalidGridSize(grid_size));
    }

    let mut clusters: Vec<Cluster> = Vec::new();
    let mut skipped = bitvec![0; pins.len()];

    for (i, pin) in pins.iter().enumerate() {
        let coord = pin.coord;
        if !coord.is_finite() {
            skipped.set(i, true);
            continue;
        }

        // last match wins
        match clusters.iter().rposition(|c| c.bounds().contains(&coord)) {
            Some(k) => clusters[k].add_pin(i, coord, grid_size, projector)?,
            None => clusters.push(Cluster::seed(i, coord, grid_size, projector)?),
        }
    }

    Ok(Pass { clusters, skipped })
}

/// ClusterSet keeps the clusters of the latest successful pass
#[derive(Debug, Clone)]
pub struct ClusterSet {
    grid_size: f64,
    pass: Pass,
}

impl ClusterSet {
    pub fn new(grid_size: f64) -> Self {
        ClusterSet {
            grid_size,
            pass: Pass::default(),
        }
    }

    pub fn grid_size(&self) -> f64 {
        self.grid_size
    }

    pub fn set_grid_size(&mut self, grid_size: f64) {
        self.grid_size = grid_size;
    }

    /// Throws away the previous clusters and clusters `pins` from scratch
    ///
    /// Call this whenever the projection or the pin list changes. On error
    /// the clusters of the previous pass are left untouched.
    pub fn recompute<T, P: Projector + ?Sized>(
        &mut self,
        pins: &[PinRecord<T>],
        projector: &P,
    ) -> Result<&Pass, ClusterError> {
        self.pass = grid_cluster(pins, self.grid_size, projector)?;
        Ok(&self.pass)
    }

    /// Latest successful pass
    pub fn pass(&self) -> &Pass {
        &self.pass
    }

    pub fn clusters(&self) -> &[Cluster] {
        self.pass.clusters()
    }
}
