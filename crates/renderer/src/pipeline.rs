//! The render pipeline.
//!
//! A render pass runs in a fixed order: project the source's bounding box,
//! fit it into the requested size, allocate the canvas (fitted size plus
//! margins), draw the frame, then walk the shapes and dispatch each ring
//! to the sink. The canvas is presented exactly once, after all drawing;
//! any error aborts the pass before presentation.

use map_common::{
    BoundingBox, GeoPoint, GeometrySource, MapResult, PixelPoint, RasterSink, ShapeType,
};
use projection::Cylindrical;
use tracing::{debug, info};

use crate::fit::{fit_scale, FitResult};
use crate::style::RenderStyle;

/// Options controlling a render pass.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Requested drawing width in pixels, before margins.
    pub width: u32,
    /// Requested drawing height in pixels, before margins.
    pub height: u32,
    /// Latitude projection applied to every vertex and to the map extent.
    pub projection: Cylindrical,
    /// Blank border added on all four sides of the fitted map area.
    pub margin: u32,
    /// Colors and stroke settings.
    pub style: RenderStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 700,
            height: 700,
            projection: Cylindrical::Miller,
            margin: 10,
            style: RenderStyle::default(),
        }
    }
}

/// Render every drawable shape from `source` onto `sink`.
///
/// Polygon rings are drawn as closed outlines and polyline parts as open
/// strokes; all other geometry types are skipped. The fit is computed
/// from the projected bounding box, so latitude compression from the
/// projection is reflected in the output dimensions.
pub fn render(
    source: &impl GeometrySource,
    sink: &mut impl RasterSink,
    options: &RenderOptions,
) -> MapResult<()> {
    let bbox = source.bounding_box();
    let projected = options.projection.project_box(&bbox);
    let fit = fit_scale(&projected, options.width, options.height)?;
    debug!(
        width = fit.width,
        height = fit.height,
        scale = fit.h_scale,
        projection = %options.projection,
        "Fitted map extent"
    );

    let margin = options.margin;
    let canvas_width = fit.width + 2 * margin;
    let canvas_height = fit.height + 2 * margin;
    sink.create_canvas(canvas_width, canvas_height, options.style.background.to_rgba())?;
    sink.draw_rectangle_outline(
        PixelPoint::new(margin as i32, margin as i32),
        PixelPoint::new((margin + fit.width) as i32, (margin + fit.height) as i32),
        options.style.frame.to_rgba(),
    )?;

    let outline = options.style.outline.to_rgba();
    let mut drawn = 0usize;
    let mut skipped = 0usize;
    for shape in source.shapes() {
        match shape.shape_type {
            ShapeType::Polygon => {
                for ring in shape.rings() {
                    let pixels = project_ring(ring, &projected, &fit, margin, options.projection);
                    sink.draw_polygon_outline(&pixels, outline)?;
                }
                drawn += 1;
            }
            ShapeType::PolyLine => {
                for part in shape.rings() {
                    let pixels = project_ring(part, &projected, &fit, margin, options.projection);
                    sink.draw_polyline(&pixels, outline)?;
                }
                drawn += 1;
            }
            other => {
                debug!(shape_type = ?other, "Skipping unsupported geometry type");
                skipped += 1;
            }
        }
    }

    sink.present()?;
    info!(
        drawn,
        skipped,
        width = canvas_width,
        height = canvas_height,
        "Render pass complete"
    );
    Ok(())
}

fn project_ring(
    ring: &[GeoPoint],
    projected: &BoundingBox,
    fit: &FitResult,
    margin: u32,
    projection: Cylindrical,
) -> Vec<PixelPoint> {
    ring.iter()
        .map(|point| to_pixel(point, projected, fit, margin, projection))
        .collect()
}

/// Map a geographic vertex to canvas pixel coordinates.
///
/// Longitude is measured from the east edge of the projected extent and
/// latitude from its north edge, so north is up and east is right. The
/// vertex latitude goes through the same projection as the extent did.
fn to_pixel(
    point: &GeoPoint,
    projected: &BoundingBox,
    fit: &FitResult,
    margin: u32,
    projection: Cylindrical,
) -> PixelPoint {
    let proj_lat = projection.project_lat(point.y);
    let x = fit.width as i64 - ((projected.max_x - point.x) * fit.h_scale).round() as i64
        + margin as i64;
    let y = ((projected.max_y - proj_lat) * fit.v_scale).round() as i64 + margin as i64;
    PixelPoint::new(x as i32, y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixtures::bbox;

    fn unit_fit() -> FitResult {
        FitResult {
            h_scale: 100.0,
            v_scale: 100.0,
            width: 100,
            height: 100,
        }
    }

    #[test]
    fn test_to_pixel_unit_square_corners() {
        let fit = unit_fit();
        let cases = [
            ((0.0, 0.0), (0, 100)),
            ((1.0, 0.0), (100, 100)),
            ((1.0, 1.0), (100, 0)),
            ((0.0, 1.0), (0, 0)),
        ];
        for ((x, y), (px, py)) in cases {
            let pixel = to_pixel(
                &GeoPoint::new(x, y),
                &bbox::UNIT,
                &fit,
                0,
                Cylindrical::Equidistant,
            );
            assert_eq!(pixel, PixelPoint::new(px, py));
        }
    }

    #[test]
    fn test_to_pixel_margin_offsets_both_axes() {
        let pixel = to_pixel(
            &GeoPoint::new(0.0, 0.0),
            &bbox::UNIT,
            &unit_fit(),
            10,
            Cylindrical::Equidistant,
        );
        assert_eq!(pixel, PixelPoint::new(10, 110));
    }

    #[test]
    fn test_to_pixel_projected_north_edge_lands_on_margin() {
        // The extent's max_y must already be projected; a vertex on the
        // north edge then maps exactly to the top margin row.
        let projection = Cylindrical::Mercator;
        let extent = projection.project_box(&BoundingBox::new(0.0, 0.0, 10.0, 85.0));
        let fit = fit_scale(&extent, 100, 100).unwrap();
        let pixel = to_pixel(&GeoPoint::new(5.0, 85.0), &extent, &fit, 7, projection);
        assert_eq!(pixel.y, 7);
    }

    #[test]
    fn test_to_pixel_points_outside_extent_go_negative() {
        let pixel = to_pixel(
            &GeoPoint::new(-0.5, 1.5),
            &bbox::UNIT,
            &unit_fit(),
            0,
            Cylindrical::Equidistant,
        );
        assert_eq!(pixel, PixelPoint::new(-50, -50));
    }
}
