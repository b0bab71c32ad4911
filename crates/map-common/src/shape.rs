//! Shape records and ring decomposition.

use serde::{Deserialize, Serialize};

use crate::GeoPoint;

/// Geometry type of a shapefile record, numbered per the ESRI spec.
///
/// The renderer draws only `Polygon` and `PolyLine`; every other type is
/// carried through parsing and silently skipped at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    Null,
    Point,
    PolyLine,
    Polygon,
    MultiPoint,
    PointZ,
    PolyLineZ,
    PolygonZ,
    MultiPointZ,
    PointM,
    PolyLineM,
    PolygonM,
    MultiPointM,
    MultiPatch,
}

impl ShapeType {
    /// Map a shapefile type code to its variant.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(ShapeType::Null),
            1 => Some(ShapeType::Point),
            3 => Some(ShapeType::PolyLine),
            5 => Some(ShapeType::Polygon),
            8 => Some(ShapeType::MultiPoint),
            11 => Some(ShapeType::PointZ),
            13 => Some(ShapeType::PolyLineZ),
            15 => Some(ShapeType::PolygonZ),
            18 => Some(ShapeType::MultiPointZ),
            21 => Some(ShapeType::PointM),
            23 => Some(ShapeType::PolyLineM),
            25 => Some(ShapeType::PolygonM),
            28 => Some(ShapeType::MultiPointM),
            31 => Some(ShapeType::MultiPatch),
            _ => None,
        }
    }

    /// The shapefile type code for this variant.
    pub fn code(self) -> i32 {
        match self {
            ShapeType::Null => 0,
            ShapeType::Point => 1,
            ShapeType::PolyLine => 3,
            ShapeType::Polygon => 5,
            ShapeType::MultiPoint => 8,
            ShapeType::PointZ => 11,
            ShapeType::PolyLineZ => 13,
            ShapeType::PolygonZ => 15,
            ShapeType::MultiPointZ => 18,
            ShapeType::PointM => 21,
            ShapeType::PolyLineM => 23,
            ShapeType::PolygonM => 25,
            ShapeType::MultiPointM => 28,
            ShapeType::MultiPatch => 31,
        }
    }

    /// Whether records of this type carry a part-offset array.
    pub fn has_parts(self) -> bool {
        matches!(
            self,
            ShapeType::PolyLine
                | ShapeType::Polygon
                | ShapeType::PolyLineZ
                | ShapeType::PolygonZ
                | ShapeType::PolyLineM
                | ShapeType::PolygonM
                | ShapeType::MultiPatch
        )
    }
}

/// One shape record: a geometry type tag, a flat vertex sequence, and the
/// part-start offsets that split the vertices into rings.
///
/// Produced wholesale by the geometry source and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub shape_type: ShapeType,
    /// Flat vertex sequence, all parts concatenated.
    pub points: Vec<GeoPoint>,
    /// Part-start indices into `points`. First entry is 0; entries are
    /// non-decreasing and strictly less than `points.len()`.
    pub parts: Vec<usize>,
}

impl Shape {
    pub fn new(shape_type: ShapeType, points: Vec<GeoPoint>, parts: Vec<usize>) -> Self {
        Self {
            shape_type,
            points,
            parts,
        }
    }

    /// A shape of the given type with no geometry.
    pub fn empty(shape_type: ShapeType) -> Self {
        Self::new(shape_type, Vec::new(), Vec::new())
    }

    /// Validate the part-offset invariants.
    ///
    /// Geometry sources call this once per record so that `rings()` can
    /// slice without bounds checks.
    pub fn validate(&self) -> Result<(), String> {
        if self.parts.is_empty() {
            if self.shape_type.has_parts() && !self.points.is_empty() {
                return Err(format!(
                    "part array is empty but the record has {} vertices",
                    self.points.len()
                ));
            }
            return Ok(());
        }

        if self.parts[0] != 0 {
            return Err(format!("first part offset is {}, expected 0", self.parts[0]));
        }
        for window in self.parts.windows(2) {
            if window[1] < window[0] {
                return Err(format!(
                    "part offsets decrease ({} after {})",
                    window[1], window[0]
                ));
            }
        }
        if let Some(&last) = self.parts.last() {
            if last >= self.points.len() {
                return Err(format!(
                    "part offset {} is out of range for {} vertices",
                    last,
                    self.points.len()
                ));
            }
        }
        Ok(())
    }

    /// Split the flat vertex sequence into one ring per part.
    ///
    /// Ring `k` spans `[parts[k], parts[k+1])`; the last ring runs to the
    /// end of the vertex sequence. An empty part array yields no rings.
    ///
    /// Ring closure (first vertex == last vertex, required of polygon
    /// rings) is the source format's contract and is neither validated nor
    /// applied here. Offsets are assumed valid per [`Shape::validate`].
    pub fn rings(&self) -> Vec<&[GeoPoint]> {
        let mut rings = Vec::with_capacity(self.parts.len());
        for (k, &start) in self.parts.iter().enumerate() {
            let end = match self.parts.get(k + 1) {
                Some(&next) => next,
                None => self.points.len(),
            };
            rings.push(&self.points[start..end]);
        }
        rings
    }
}
