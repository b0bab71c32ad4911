//! Tests for the tiny-skia PNG canvas sink.

use map_common::{MapError, PixelPoint, RasterSink};
use projection::Cylindrical;
use renderer::{render, PngCanvas, RenderOptions, RenderStyle};
use test_utils::fixtures::{self, bbox};
use test_utils::StaticSource;

#[test]
fn test_render_writes_png_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("map.png");

    let source = StaticSource::new(bbox::UNIT, vec![fixtures::unit_square_polygon()]);
    let mut canvas = PngCanvas::new(&output);
    let options = RenderOptions {
        width: 100,
        height: 100,
        projection: Cylindrical::Equidistant,
        margin: 10,
        style: RenderStyle::default(),
    };

    render(&source, &mut canvas, &options).unwrap();

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    // IHDR carries the canvas dimensions: fitted size plus both margins.
    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    assert_eq!(width, 120);
    assert_eq!(height, 120);
}

#[test]
fn test_present_without_canvas_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("never_written.png");

    let mut canvas = PngCanvas::new(&output);
    let result = canvas.present();

    assert!(matches!(result, Err(MapError::Render(_))));
    assert!(!output.exists());
}

#[test]
fn test_present_to_unwritable_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("missing_subdir").join("map.png");

    let mut canvas = PngCanvas::new(&output);
    canvas.create_canvas(8, 8, [255, 255, 255, 255]).unwrap();
    let result = canvas.present();

    assert!(matches!(result, Err(MapError::Io(_))));
}

#[test]
fn test_stroke_width_thickens_lines() {
    let thin_changed = stroked_pixel_count(1.0);
    let thick_changed = stroked_pixel_count(4.0);
    assert!(thick_changed > thin_changed);
}

fn stroked_pixel_count(stroke_width: f32) -> usize {
    let mut canvas = PngCanvas::new("unused.png").with_stroke_width(stroke_width);
    canvas.create_canvas(32, 32, [255, 255, 255, 255]).unwrap();
    canvas
        .draw_polyline(
            &[PixelPoint::new(4, 16), PixelPoint::new(28, 16)],
            [0, 0, 0, 255],
        )
        .unwrap();
    let pixmap = canvas.pixmap().unwrap();
    pixmap
        .data()
        .chunks_exact(4)
        .filter(|px| px[0] != 255 || px[1] != 255 || px[2] != 255)
        .count()
}
