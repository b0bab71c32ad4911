//! Static in-memory geometry source.

use map_common::{BoundingBox, GeometrySource, Shape};

/// A geometry source with fixed contents, for pipeline tests.
#[derive(Debug, Clone)]
pub struct StaticSource {
    pub bbox: BoundingBox,
    pub shapes: Vec<Shape>,
}

impl StaticSource {
    pub fn new(bbox: BoundingBox, shapes: Vec<Shape>) -> Self {
        Self { bbox, shapes }
    }
}

impl GeometrySource for StaticSource {
    fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}
