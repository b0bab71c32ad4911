//! Raster sink abstraction.

use crate::{MapResult, PixelPoint};

/// Destination for rasterized drawing commands.
///
/// Coordinates are in canvas pixel space. Points outside the canvas are
/// legal; sinks clip rather than reject them.
pub trait RasterSink {
    /// Allocate a canvas of the given dimensions, filled with `background`.
    ///
    /// Must be called before any drawing command.
    fn create_canvas(&mut self, width: u32, height: u32, background: [u8; 4]) -> MapResult<()>;

    /// Stroke the outline of an axis-aligned rectangle.
    fn draw_rectangle_outline(
        &mut self,
        top_left: PixelPoint,
        bottom_right: PixelPoint,
        color: [u8; 4],
    ) -> MapResult<()>;

    /// Stroke the outline of a closed polygon ring.
    fn draw_polygon_outline(&mut self, points: &[PixelPoint], color: [u8; 4]) -> MapResult<()>;

    /// Stroke an open polyline.
    fn draw_polyline(&mut self, points: &[PixelPoint], color: [u8; 4]) -> MapResult<()>;

    /// Finalize the canvas and emit the output.
    fn present(&mut self) -> MapResult<()>;
}
