//! Glue between a finished pass and whatever draws it
//!
//! Nothing here feeds back into clustering. A renderer places one
//! [`Marker`] per cluster and forwards clicks to [`ClusterHooks`].

use super::group::Cluster;
use super::point::{PinRecord, PixelPoint};
use super::projection::Viewport;

/// Marker is where a cluster is drawn at the pass's projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Index of the cluster in its pass
    pub cluster: usize,
    /// Number of pins in the cluster
    pub size: usize,
    /// Pixel position of the cluster's centroid
    pub position: PixelPoint,
}

impl Marker {
    pub fn new(cluster: usize, size: usize, position: PixelPoint) -> Self {
        Marker {
            cluster,
            size,
            position,
        }
    }

    /// A lone pin rather than a group
    pub fn is_single(&self) -> bool {
        self.size == 1
    }
}

type ClickCallback<'a, T> = Box<dyn FnMut(&Cluster, &[PinRecord<T>]) + 'a>;

/// ClusterHooks holds the callbacks run when a cluster is clicked
pub struct ClusterHooks<'a, T> {
    click: Vec<ClickCallback<'a, T>>,
}

impl<'a, T> ClusterHooks<'a, T> {
    pub fn new() -> Self {
        ClusterHooks { click: Vec::new() }
    }

    /// Registers a click callback, callbacks run in registration order
    pub fn on_click<F>(&mut self, f: F)
    where
        F: FnMut(&Cluster, &[PinRecord<T>]) + 'a,
    {
        self.click.push(Box::new(f));
    }

    /// Runs every click callback with the clicked cluster and the pins the
    /// pass ran over
    pub fn click(&mut self, cluster: &Cluster, pins: &[PinRecord<T>]) {
        for f in self.click.iter_mut() {
            f(cluster, pins);
        }
    }

    pub fn len(&self) -> usize {
        self.click.len()
    }

    pub fn is_empty(&self) -> bool {
        self.click.is_empty()
    }
}

impl<T> Default for ClusterHooks<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Centers the view on a cluster, the stock reaction to a click
///
/// The caller has to run a new pass afterwards, the projection changed.
pub fn pan_to_centroid(viewport: &mut Viewport, cluster: &Cluster) {
    viewport.pan_to(cluster.centroid());
}
