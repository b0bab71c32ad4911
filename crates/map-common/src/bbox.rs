//! Bounding box type and operations.

use serde::{Deserialize, Serialize};

/// A geographic bounding box in degrees.
///
/// `min_x`/`max_x` are the west/east edges (longitude), `min_y`/`max_y`
/// the south/north edges (latitude). A well-formed box has
/// `max_x >= min_x` and `max_y >= min_y`; boxes of zero extent are
/// representable and must be rejected before scale fitting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from edge coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Width of the bounding box in map units (degrees of longitude).
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bounding box in map units (degrees of latitude,
    /// possibly projected).
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Check if a point is contained within this box (edges inclusive).
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_height() {
        let bbox = BoundingBox::new(-125.0, 24.0, -66.0, 50.0);
        assert_eq!(bbox.width(), 59.0);
        assert_eq!(bbox.height(), 26.0);
    }

    #[test]
    fn test_degenerate_box_representable() {
        let bbox = BoundingBox::new(10.0, 20.0, 10.0, 20.0);
        assert_eq!(bbox.width(), 0.0);
        assert_eq!(bbox.height(), 0.0);
    }

    #[test]
    fn test_contains_point() {
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert!(bbox.contains_point(5.0, 5.0));
        assert!(bbox.contains_point(0.0, 10.0));
        assert!(!bbox.contains_point(-0.1, 5.0));
        assert!(!bbox.contains_point(5.0, 10.1));
    }
}
