//! Geometry source abstraction.

use crate::{BoundingBox, Shape};

/// A parsed vector-geometry source.
///
/// Implementations parse eagerly, so the accessors are infallible; parse
/// failures surface when the source is constructed, before any render pass
/// begins.
pub trait GeometrySource {
    /// Geographic bounding box enclosing every shape in the source.
    fn bounding_box(&self) -> BoundingBox;

    /// All shape records, in source order.
    fn shapes(&self) -> &[Shape];
}
