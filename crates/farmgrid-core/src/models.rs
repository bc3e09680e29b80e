//! Domain models for the garden seed dataset
//!
//! Field names must stay byte-for-byte compatible with the `datatest.json`
//! wire format consumed by the farm API.

use serde::{Deserialize, Serialize};

/// One vertex of a garden's boundary polygon.
///
/// Four points per garden in this dataset, in a fixed manual order; the
/// sequence is not guaranteed convex or closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub garden_id: u32,
    pub point_no: u32,
    pub latitude: f64,
    pub longitude: f64,
}

/// A single grid-cell sensor reading: interpolated location, RGB color, and
/// a synthetic timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSample {
    pub device_id: String,
    pub garden_id: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Synthetic Unix-like timestamp, not a real clock reading.
    pub ts: u64,
}

/// The full serialized artifact: boundary points followed by the color grid,
/// insertion order preserved (grid traversal is row-major).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub points: Vec<Point>,
    pub colors: Vec<ColorSample>,
}
