//! Recording raster sink for pipeline tests.

use map_common::{MapResult, PixelPoint, RasterSink};

/// One drawing command captured by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawEvent {
    Canvas {
        width: u32,
        height: u32,
        background: [u8; 4],
    },
    Rectangle {
        top_left: PixelPoint,
        bottom_right: PixelPoint,
        color: [u8; 4],
    },
    Polygon {
        points: Vec<PixelPoint>,
        color: [u8; 4],
    },
    Polyline {
        points: Vec<PixelPoint>,
        color: [u8; 4],
    },
    Present,
}

/// A raster sink that records every call for later assertions.
///
/// Never fails, so tests can assert on the exact command sequence the
/// pipeline emitted.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<DrawEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of polygon and polyline draw calls recorded.
    pub fn shape_draw_calls(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, DrawEvent::Polygon { .. } | DrawEvent::Polyline { .. }))
            .count()
    }

    /// Whether present() was called exactly once, as the final command.
    pub fn presented_once_last(&self) -> bool {
        let presents = self
            .events
            .iter()
            .filter(|e| matches!(e, DrawEvent::Present))
            .count();
        presents == 1 && matches!(self.events.last(), Some(DrawEvent::Present))
    }

    /// Canvas dimensions from the create call, if one was recorded.
    pub fn canvas_size(&self) -> Option<(u32, u32)> {
        self.events.iter().find_map(|e| match e {
            DrawEvent::Canvas { width, height, .. } => Some((*width, *height)),
            _ => None,
        })
    }

    /// Pixel runs of every polygon draw call, in order.
    pub fn polygons(&self) -> Vec<&[PixelPoint]> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DrawEvent::Polygon { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }

    /// Pixel runs of every polyline draw call, in order.
    pub fn polylines(&self) -> Vec<&[PixelPoint]> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DrawEvent::Polyline { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }
}

impl RasterSink for RecordingSink {
    fn create_canvas(&mut self, width: u32, height: u32, background: [u8; 4]) -> MapResult<()> {
        self.events.push(DrawEvent::Canvas {
            width,
            height,
            background,
        });
        Ok(())
    }

    fn draw_rectangle_outline(
        &mut self,
        top_left: PixelPoint,
        bottom_right: PixelPoint,
        color: [u8; 4],
    ) -> MapResult<()> {
        self.events.push(DrawEvent::Rectangle {
            top_left,
            bottom_right,
            color,
        });
        Ok(())
    }

    fn draw_polygon_outline(&mut self, points: &[PixelPoint], color: [u8; 4]) -> MapResult<()> {
        self.events.push(DrawEvent::Polygon {
            points: points.to_vec(),
            color,
        });
        Ok(())
    }

    fn draw_polyline(&mut self, points: &[PixelPoint], color: [u8; 4]) -> MapResult<()> {
        self.events.push(DrawEvent::Polyline {
            points: points.to_vec(),
            color,
        });
        Ok(())
    }

    fn present(&mut self) -> MapResult<()> {
        self.events.push(DrawEvent::Present);
        Ok(())
    }
}
