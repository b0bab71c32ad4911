//! In-test shapefile byte encoder.
//!
//! Builds syntactically valid .shp buffers so parser and end-to-end tests
//! need no external data files. The encoder mirrors the ESRI layout the
//! parser reads: a 100-byte mixed-endian header, then big-endian record
//! headers framing little-endian content.

use map_common::BoundingBox;

/// Builds .shp file bytes record by record.
///
/// Records are numbered sequentially from 1 in insertion order.
pub struct ShpFileBuilder {
    shape_type_code: i32,
    bbox: BoundingBox,
    records: Vec<Vec<u8>>,
}

impl ShpFileBuilder {
    /// Start a file with the given declared shape type code and XY box.
    pub fn new(shape_type_code: i32, bbox: BoundingBox) -> Self {
        Self {
            shape_type_code,
            bbox,
            records: Vec::new(),
        }
    }

    /// Append a PolyLine/Polygon-family record from part offsets and XY
    /// points. The record's own box is computed from the points.
    pub fn add_poly_record(mut self, code: i32, parts: &[i32], points: &[(f64, f64)]) -> Self {
        let mut content = Vec::new();
        push_i32(&mut content, code);

        let (min_x, min_y, max_x, max_y) = points_box(points);
        push_f64(&mut content, min_x);
        push_f64(&mut content, min_y);
        push_f64(&mut content, max_x);
        push_f64(&mut content, max_y);

        push_i32(&mut content, parts.len() as i32);
        push_i32(&mut content, points.len() as i32);
        for &p in parts {
            push_i32(&mut content, p);
        }
        for &(x, y) in points {
            push_f64(&mut content, x);
            push_f64(&mut content, y);
        }

        self.records.push(content);
        self
    }

    /// Append a Point-family record.
    pub fn add_point_record(mut self, code: i32, x: f64, y: f64) -> Self {
        let mut content = Vec::new();
        push_i32(&mut content, code);
        push_f64(&mut content, x);
        push_f64(&mut content, y);
        self.records.push(content);
        self
    }

    /// Append a Null shape record.
    pub fn add_null_record(mut self) -> Self {
        let mut content = Vec::new();
        push_i32(&mut content, 0);
        self.records.push(content);
        self
    }

    /// Append a record with arbitrary content bytes, for malformed-input
    /// tests. Content length must be even (it is declared in 16-bit words).
    pub fn add_raw_record(mut self, content: Vec<u8>) -> Self {
        assert!(
            content.len() % 2 == 0,
            "record content length must be even, got {}",
            content.len()
        );
        self.records.push(content);
        self
    }

    /// Serialize the header and records into a complete file buffer.
    pub fn build(self) -> Vec<u8> {
        let total_bytes: usize = 100 + self.records.iter().map(|r| 8 + r.len()).sum::<usize>();

        let mut data = vec![0u8; 100];
        data[0..4].copy_from_slice(&9994i32.to_be_bytes());
        data[24..28].copy_from_slice(&((total_bytes / 2) as i32).to_be_bytes());
        data[28..32].copy_from_slice(&1000i32.to_le_bytes());
        data[32..36].copy_from_slice(&self.shape_type_code.to_le_bytes());
        data[36..44].copy_from_slice(&self.bbox.min_x.to_le_bytes());
        data[44..52].copy_from_slice(&self.bbox.min_y.to_le_bytes());
        data[52..60].copy_from_slice(&self.bbox.max_x.to_le_bytes());
        data[60..68].copy_from_slice(&self.bbox.max_y.to_le_bytes());

        for (i, content) in self.records.iter().enumerate() {
            data.extend_from_slice(&((i + 1) as u32).to_be_bytes());
            data.extend_from_slice(&((content.len() / 2) as i32).to_be_bytes());
            data.extend_from_slice(content);
        }

        data
    }
}

fn push_i32(buf: &mut Vec<u8>, value: i32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

fn push_f64(buf: &mut Vec<u8>, value: f64) {
    buf.extend_from_slice(&value.to_le_bytes());
}

fn points_box(points: &[(f64, f64)]) -> (f64, f64, f64, f64) {
    let mut min_x = f64::MAX;
    let mut min_y = f64::MAX;
    let mut max_x = f64::MIN;
    let mut max_y = f64::MIN;
    for &(x, y) in points {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    if points.is_empty() {
        (0.0, 0.0, 0.0, 0.0)
    } else {
        (min_x, min_y, max_x, max_y)
    }
}
