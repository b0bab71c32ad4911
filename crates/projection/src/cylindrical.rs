//! Cylindrical latitude projections.
//!
//! All three methods leave longitude untouched and remap latitude only:
//! - Equidistant: identity (plate carrée)
//! - Mercator: inverse Gudermannian of the latitude, clamped to ±85°
//! - Miller: Mercator of 4/5 of the latitude, stretched back by 5/4
//!
//! Projected latitudes stay in degrees so the scale fitter can treat
//! geographic and projected extents uniformly.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use map_common::BoundingBox;

/// Latitude clamp applied before the Mercator transform, in degrees.
///
/// The transform diverges at the poles; clamping keeps every output finite.
pub const MAX_LATITUDE: f64 = 85.0;

/// Inverse Gudermannian function psi(phi) = ln(tan(pi/4 + phi/2)).
///
/// Input and output are in radians. Negative inputs use the odd symmetry
/// psi(-phi) = -psi(phi).
pub fn inverse_gudermannian(phi: f64) -> f64 {
    if phi >= 0.0 {
        (PI / 4.0 + phi / 2.0).tan().ln()
    } else {
        -((PI / 4.0 - phi / 2.0).tan().ln())
    }
}

/// Gudermannian function gd(y) = atan(sinh(y)), the inverse of
/// [`inverse_gudermannian`]. Input and output are in radians.
pub fn gudermannian(y: f64) -> f64 {
    y.sinh().atan()
}

// Clamp a latitude in degrees to the Mercator domain, then apply the
// inverse Gudermannian. Returns radians.
fn clamped_inverse_gd(lat_deg: f64) -> f64 {
    let clamped = lat_deg.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    inverse_gudermannian(clamped.to_radians())
}

/// Supported cylindrical projection methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cylindrical {
    /// Equirectangular: latitude passes through unchanged.
    Equidistant,
    /// Conformal Mercator. Diverges toward the poles, so input latitude is
    /// clamped to [`MAX_LATITUDE`] before the transform. The clamp is
    /// deterministic, intentional loss, not an error condition.
    Mercator,
    /// Miller cylindrical: Mercator of the 4/5-compressed latitude, scaled
    /// back by 5/4. Bounded over the full ±90° range, so the shared clamp
    /// never engages for real-world latitudes.
    Miller,
}

impl Cylindrical {
    /// Project a latitude in degrees to a projected latitude in degrees.
    pub fn project_lat(&self, lat_deg: f64) -> f64 {
        match self {
            Cylindrical::Equidistant => lat_deg,
            Cylindrical::Mercator => clamped_inverse_gd(lat_deg).to_degrees(),
            Cylindrical::Miller => {
                // Compress latitude by 4/5 before the Mercator core, then
                // stretch the radian result back by 5/4.
                (clamped_inverse_gd(lat_deg * 4.0 / 5.0) * 5.0 / 4.0).to_degrees()
            }
        }
    }

    /// Project the south and north edges of a geographic bounding box.
    ///
    /// West and east pass through untouched; cylindrical projections leave
    /// longitude alone.
    pub fn project_box(&self, bbox: &BoundingBox) -> BoundingBox {
        BoundingBox::new(
            bbox.min_x,
            self.project_lat(bbox.min_y),
            bbox.max_x,
            self.project_lat(bbox.max_y),
        )
    }
}

/// Error returned when parsing an unrecognized projection name.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown projection method: {0}")]
pub struct UnknownProjection(pub String);

impl FromStr for Cylindrical {
    type Err = UnknownProjection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "equidistant" => Ok(Cylindrical::Equidistant),
            "mercator" => Ok(Cylindrical::Mercator),
            "miller" => Ok(Cylindrical::Miller),
            _ => Err(UnknownProjection(s.to_string())),
        }
    }
}

impl fmt::Display for Cylindrical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cylindrical::Equidistant => "equidistant",
            Cylindrical::Mercator => "mercator",
            Cylindrical::Miller => "miller",
        };
        f.write_str(name)
    }
}
