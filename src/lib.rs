//! Map pin clustering
//!
//! Pins are grouped by how close they land on screen at the current map
//! projection. Every pan or zoom means a fresh pass over all pins.

pub mod cluster;
pub mod config;
pub mod pins;

#[cfg(test)]
mod pins_test;
