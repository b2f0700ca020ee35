//! Package cluster implements screen-space grid clustering of map pins
pub mod bounds;
pub mod error;
pub mod grid;
pub mod group;
pub mod hooks;
pub mod point;
pub mod projection;

#[cfg(test)]
mod bounds_test;
#[cfg(test)]
mod projection_test;

pub use bounds::{GeoBounds, inside};
pub use error::{ClusterError, ProjectionError};
pub use grid::{ClusterSet, Pass, grid_cluster};
pub use group::{Cluster, grid_bounds};
pub use hooks::{ClusterHooks, Marker, pan_to_centroid};
pub use point::{GeoPoint, PinList, PinRecord, PixelPoint};
pub use projection::{LATITUDE_MAX, MAX_ZOOM, PlateCarree, Projector, TILE_SIZE, Viewport};
