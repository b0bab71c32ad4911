//! PNG canvas sink backed by tiny-skia.
//!
//! `PngCanvas` rasterizes the pipeline's drawing commands into an RGBA
//! pixmap and, on `present`, encodes the pixmap with the hand-rolled PNG
//! encoder and writes it to the output path.

use map_common::{MapError, MapResult, PixelPoint, RasterSink};
use std::path::PathBuf;
use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};
use tracing::info;

use crate::png;

/// Raster sink that draws with tiny-skia and writes a PNG file.
///
/// The pixmap is allocated by `create_canvas`; drawing before that is an
/// error. Stroked paths are anti-aliased with round caps and joins.
pub struct PngCanvas {
    pixmap: Option<Pixmap>,
    output: PathBuf,
    stroke_width: f32,
}

impl PngCanvas {
    /// Create a canvas that will write its PNG to `output` on present.
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            pixmap: None,
            output: output.into(),
            stroke_width: 1.0,
        }
    }

    /// Set the stroke width used for all outlines.
    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Access the backing pixmap, if a canvas has been created.
    pub fn pixmap(&self) -> Option<&Pixmap> {
        self.pixmap.as_ref()
    }

    /// Encode the current canvas as PNG bytes.
    pub fn encode_png(&self) -> MapResult<Vec<u8>> {
        let pixmap = self
            .pixmap
            .as_ref()
            .ok_or_else(|| MapError::Render("no canvas to encode".to_string()))?;
        png::create_png_auto(
            pixmap.data(),
            pixmap.width() as usize,
            pixmap.height() as usize,
        )
        .map_err(MapError::PngEncode)
    }

    /// Stroke a point sequence, optionally closing it back to the start.
    ///
    /// Sequences with fewer than two points have no extent to stroke and
    /// are ignored, matching how degenerate rings are treated elsewhere.
    fn stroke_points(
        &mut self,
        points: &[PixelPoint],
        color: [u8; 4],
        close: bool,
    ) -> MapResult<()> {
        let pixmap = self
            .pixmap
            .as_mut()
            .ok_or_else(|| MapError::Render("draw issued before canvas creation".to_string()))?;

        if points.len() < 2 {
            return Ok(());
        }

        let mut pb = PathBuilder::new();
        pb.move_to(points[0].x as f32, points[0].y as f32);
        for point in &points[1..] {
            pb.line_to(point.x as f32, point.y as f32);
        }
        if close {
            pb.close();
        }
        let path = match pb.finish() {
            Some(path) => path,
            None => return Ok(()),
        };

        let mut paint = Paint::default();
        paint.set_color_rgba8(color[0], color[1], color[2], color[3]);
        paint.anti_alias = true;

        let mut stroke = Stroke::default();
        stroke.width = self.stroke_width;
        stroke.line_cap = LineCap::Round;
        stroke.line_join = LineJoin::Round;

        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        Ok(())
    }
}

impl RasterSink for PngCanvas {
    fn create_canvas(&mut self, width: u32, height: u32, background: [u8; 4]) -> MapResult<()> {
        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
            MapError::Render(format!("cannot allocate a {}x{} canvas", width, height))
        })?;
        pixmap.fill(tiny_skia::Color::from_rgba8(
            background[0],
            background[1],
            background[2],
            background[3],
        ));
        self.pixmap = Some(pixmap);
        Ok(())
    }

    fn draw_rectangle_outline(
        &mut self,
        top_left: PixelPoint,
        bottom_right: PixelPoint,
        color: [u8; 4],
    ) -> MapResult<()> {
        let corners = [
            top_left,
            PixelPoint::new(bottom_right.x, top_left.y),
            bottom_right,
            PixelPoint::new(top_left.x, bottom_right.y),
        ];
        self.stroke_points(&corners, color, true)
    }

    fn draw_polygon_outline(&mut self, points: &[PixelPoint], color: [u8; 4]) -> MapResult<()> {
        self.stroke_points(points, color, true)
    }

    fn draw_polyline(&mut self, points: &[PixelPoint], color: [u8; 4]) -> MapResult<()> {
        self.stroke_points(points, color, false)
    }

    fn present(&mut self) -> MapResult<()> {
        let bytes = self.encode_png()?;
        std::fs::write(&self.output, &bytes)?;
        info!(path = %self.output.display(), bytes = bytes.len(), "Wrote PNG");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_canvas_fills_background() {
        let mut canvas = PngCanvas::new("unused.png");
        canvas.create_canvas(4, 4, [10, 20, 30, 255]).unwrap();
        let pixmap = canvas.pixmap().unwrap();
        assert_eq!(pixmap.width(), 4);
        assert_eq!(pixmap.height(), 4);
        assert_eq!(&pixmap.data()[0..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_draw_before_create_is_an_error() {
        let mut canvas = PngCanvas::new("unused.png");
        let result = canvas.draw_polyline(
            &[PixelPoint::new(0, 0), PixelPoint::new(5, 5)],
            [0, 0, 0, 255],
        );
        assert!(matches!(result, Err(MapError::Render(_))));
    }

    #[test]
    fn test_zero_sized_canvas_rejected() {
        let mut canvas = PngCanvas::new("unused.png");
        let result = canvas.create_canvas(0, 10, [255, 255, 255, 255]);
        assert!(matches!(result, Err(MapError::Render(_))));
    }

    #[test]
    fn test_short_sequences_are_ignored() {
        let mut canvas = PngCanvas::new("unused.png");
        canvas.create_canvas(8, 8, [255, 255, 255, 255]).unwrap();
        canvas
            .draw_polyline(&[PixelPoint::new(3, 3)], [0, 0, 0, 255])
            .unwrap();
        canvas.draw_polygon_outline(&[], [0, 0, 0, 255]).unwrap();
        // Canvas stays untouched white.
        let pixmap = canvas.pixmap().unwrap();
        assert!(pixmap.data().iter().all(|&b| b == 255));
    }

    #[test]
    fn test_stroke_changes_pixels() {
        let mut canvas = PngCanvas::new("unused.png");
        canvas.create_canvas(16, 16, [255, 255, 255, 255]).unwrap();
        canvas
            .draw_polyline(
                &[PixelPoint::new(2, 8), PixelPoint::new(14, 8)],
                [0, 0, 0, 255],
            )
            .unwrap();
        let pixmap = canvas.pixmap().unwrap();
        assert!(pixmap.data().iter().any(|&b| b != 255));
    }

    #[test]
    fn test_out_of_bounds_points_are_clipped() {
        let mut canvas = PngCanvas::new("unused.png");
        canvas.create_canvas(8, 8, [255, 255, 255, 255]).unwrap();
        canvas
            .draw_polyline(
                &[PixelPoint::new(-100, -100), PixelPoint::new(100, 100)],
                [0, 0, 0, 255],
            )
            .unwrap();
        // The diagonal crosses the canvas; drawing must not panic and
        // must touch the visible part.
        let pixmap = canvas.pixmap().unwrap();
        assert!(pixmap.data().iter().any(|&b| b != 255));
    }

    #[test]
    fn test_encode_png_has_signature() {
        let mut canvas = PngCanvas::new("unused.png");
        canvas.create_canvas(4, 4, [255, 255, 255, 255]).unwrap();
        let bytes = canvas.encode_png().unwrap();
        assert_eq!(&bytes[0..8], &crate::png::PNG_SIGNATURE);
    }
}
