//! Common types and contracts shared across the shapemap crates.

pub mod bbox;
pub mod color;
pub mod error;
pub mod geom;
pub mod shape;
pub mod sink;
pub mod source;

pub use bbox::BoundingBox;
pub use color::Color;
pub use error::{MapError, MapResult};
pub use geom::{GeoPoint, PixelPoint};
pub use shape::{Shape, ShapeType};
pub use sink::RasterSink;
pub use source::GeometrySource;
