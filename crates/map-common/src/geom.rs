//! Geographic and raster point types.

use serde::{Deserialize, Serialize};

/// A 2-D geographic vertex in degrees.
///
/// `x` is longitude (east positive), `y` is latitude (north positive),
/// matching the coordinate order of the shapefile format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub x: f64,
    pub y: f64,
}

impl GeoPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An integer pixel coordinate on the raster canvas.
///
/// Origin is the top-left corner; `y` grows downward. Coordinates may lie
/// outside the canvas; sinks clip when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
