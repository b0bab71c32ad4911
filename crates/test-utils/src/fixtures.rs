//! Common geometry fixtures for shapemap tests.
//!
//! Pre-defined shapes and bounding boxes for scenarios that recur across
//! the test suite.

use map_common::{GeoPoint, Shape, ShapeType};

/// Common bounding box definitions for testing.
pub mod bbox {
    use map_common::BoundingBox;

    /// Unit square anchored at the origin
    pub const UNIT: BoundingBox = BoundingBox {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 1.0,
        max_y: 1.0,
    };

    /// Whole world in geographic coordinates
    pub const WORLD: BoundingBox = BoundingBox {
        min_x: -180.0,
        min_y: -90.0,
        max_x: 180.0,
        max_y: 90.0,
    };

    /// Continental United States
    pub const CONUS: BoundingBox = BoundingBox {
        min_x: -130.0,
        min_y: 20.0,
        max_x: -60.0,
        max_y: 55.0,
    };

    /// Degenerate: a single point
    pub const POINT: BoundingBox = BoundingBox {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 0.0,
        max_y: 0.0,
    };

    /// Degenerate: zero width, positive height
    pub const VERTICAL_LINE: BoundingBox = BoundingBox {
        min_x: 5.0,
        min_y: 0.0,
        max_x: 5.0,
        max_y: 10.0,
    };
}

/// A unit square polygon with an explicitly closed 5-vertex ring, the form
/// well-behaved shapefile writers produce.
pub fn unit_square_polygon() -> Shape {
    Shape::new(
        ShapeType::Polygon,
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(1.0, 0.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(0.0, 0.0),
        ],
        vec![0],
    )
}

/// A unit square polygon whose ring is left open (4 corner vertices).
///
/// Ring closure is the source's contract and is never applied by the
/// renderer, so this fixture exercises the pass-through behavior.
pub fn open_unit_square() -> Shape {
    Shape::new(
        ShapeType::Polygon,
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(1.0, 0.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(0.0, 1.0),
        ],
        vec![0],
    )
}

/// A polyline with two parts of two vertices each.
pub fn two_part_polyline() -> Shape {
    Shape::new(
        ShapeType::PolyLine,
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(5.0, 5.0),
            GeoPoint::new(10.0, 0.0),
            GeoPoint::new(20.0, 0.0),
        ],
        vec![0, 2],
    )
}

/// A single point shape at the given coordinate.
pub fn point_shape(x: f64, y: f64) -> Shape {
    Shape::new(ShapeType::Point, vec![GeoPoint::new(x, y)], Vec::new())
}

/// A polygon with an outer ring and an inner hole, as two parts.
pub fn square_with_hole() -> Shape {
    Shape::new(
        ShapeType::Polygon,
        vec![
            // Outer ring
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(10.0, 0.0),
            GeoPoint::new(10.0, 10.0),
            GeoPoint::new(0.0, 10.0),
            GeoPoint::new(0.0, 0.0),
            // Inner ring
            GeoPoint::new(4.0, 4.0),
            GeoPoint::new(6.0, 4.0),
            GeoPoint::new(6.0, 6.0),
            GeoPoint::new(4.0, 6.0),
            GeoPoint::new(4.0, 4.0),
        ],
        vec![0, 5],
    )
}
