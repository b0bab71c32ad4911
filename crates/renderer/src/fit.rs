//! Aspect-preserving scale fitting.
//!
//! Fits a map extent into a requested pixel size without distorting the
//! geometry: the smaller of the horizontal and vertical pixels-per-map-unit
//! ratios wins, and the dimension that did not constrain the fit is shrunk
//! to match.

use map_common::{BoundingBox, MapError, MapResult};

/// Result of fitting a map extent into a requested canvas size.
///
/// After fitting, `h_scale` and `v_scale` are always equal; both are kept
/// so callers can read whichever axis they are mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitResult {
    /// Horizontal pixels per map unit.
    pub h_scale: f64,
    /// Vertical pixels per map unit.
    pub v_scale: f64,
    /// Fitted drawing width in pixels.
    pub width: u32,
    /// Fitted drawing height in pixels.
    pub height: u32,
}

/// Fit a map extent into the requested pixel dimensions.
///
/// The axis with the smaller pixels-per-map-unit ratio keeps its requested
/// size; the other axis is recomputed from the winning scale so the output
/// preserves the extent's aspect ratio. On a tie both dimensions stay as
/// requested.
///
/// Returns [`MapError::DegenerateExtent`] when the extent has no positive
/// width or height, since no finite scale exists for it.
pub fn fit_scale(bbox: &BoundingBox, req_width: u32, req_height: u32) -> MapResult<FitResult> {
    let map_width = bbox.width();
    let map_height = bbox.height();
    if map_width <= 0.0 || map_height <= 0.0 {
        return Err(MapError::DegenerateExtent(format!(
            "map extent is {map_width} x {map_height} map units; nothing to fit"
        )));
    }

    let h_scale = req_width as f64 / map_width;
    let v_scale = req_height as f64 / map_height;

    let (scale, width, height) = if h_scale <= v_scale {
        // Width constrains the fit; shrink the height to match.
        (h_scale, req_width, (h_scale * map_height).round() as u32)
    } else {
        // Height constrains the fit; shrink the width to match.
        (v_scale, (v_scale * map_width).round() as u32, req_height)
    };

    Ok(FitResult {
        h_scale: scale,
        v_scale: scale,
        width,
        height,
    })
}
