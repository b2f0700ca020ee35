//! Map configuration
//!
//! Defaults match the stock widget; a JSON file only needs to name the
//! fields it changes.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cluster::{GeoPoint, MAX_ZOOM, Viewport};

/// Default grid size in pixels
pub const DEFAULT_GRID_SIZE: f64 = 30.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot open {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub paths: Paths,
    pub map_options: MapOptions,
    pub viewport: ViewportSize,
    /// Cluster half-width in pixels
    pub grid_size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paths {
    pub pins: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    pub center: GeoPoint,
    pub zoom: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            paths: Paths::default(),
            map_options: MapOptions::default(),
            viewport: ViewportSize::default(),
            grid_size: DEFAULT_GRID_SIZE,
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            pins: PathBuf::from("map_pins.json"),
        }
    }
}

impl Default for MapOptions {
    fn default() -> Self {
        MapOptions {
            center: GeoPoint::new(49.282263, -123.042992),
            zoom: 14.0,
        }
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        ViewportSize {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl MapConfig {
    /// Reads a JSON config file over the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_reader(file)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let zoom = self.map_options.zoom;
        if !(0.0..=MAX_ZOOM).contains(&zoom) {
            return Err(ConfigError::Invalid(format!(
                "zoom {zoom} outside 0..={MAX_ZOOM}"
            )));
        }
        if !self.map_options.center.is_finite() {
            return Err(ConfigError::Invalid("center is not a finite coordinate".into()));
        }
        let ViewportSize { width, height } = self.viewport;
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "viewport {width}x{height} must have a positive size"
            )));
        }
        if !(self.grid_size > 0.0 && self.grid_size.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "grid_size {} must be a positive number of pixels",
                self.grid_size
            )));
        }
        Ok(())
    }

    /// Projection for the configured view
    pub fn viewport(&self) -> Viewport {
        Viewport::new(
            self.map_options.center,
            self.map_options.zoom,
            self.viewport.width,
            self.viewport.height,
        )
    }
}
