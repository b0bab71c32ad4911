//! Shapefile record parsing.
//!
//! Each record is an 8-byte big-endian header followed by little-endian
//! content. Only the XY prefix of each content layout is read; trailing Z
//! and M arrays are skipped via the declared content length.

use map_common::{GeoPoint, Shape, ShapeType};

use crate::error::{ShpError, ShpResult};

/// Length of a record header in bytes.
pub const RECORD_HEADER_LEN: usize = 8;

/// Parsed record header.
#[derive(Debug, Clone, Copy)]
pub struct RecordHeader {
    /// 1-based record number.
    pub number: u32,
    /// Content length in 16-bit words, header excluded.
    pub content_words: i32,
}

/// Parse an 8-byte record header.
///
/// - Bytes 0-3: record number (big-endian)
/// - Bytes 4-7: content length in 16-bit words (big-endian)
pub fn parse_record_header(data: &[u8]) -> ShpResult<RecordHeader> {
    if data.len() < RECORD_HEADER_LEN {
        return Err(ShpError::Truncated(format!(
            "record header needs {} bytes, got {}",
            RECORD_HEADER_LEN,
            data.len()
        )));
    }

    let number = u32::from_be_bytes([data[0], data[1], data[2], data[3]]);
    let content_words = i32::from_be_bytes([data[4], data[5], data[6], data[7]]);
    if content_words < 0 {
        return Err(ShpError::InvalidRecord {
            number,
            reason: format!("negative content length {}", content_words),
        });
    }

    Ok(RecordHeader {
        number,
        content_words,
    })
}

/// Parse one record's content into a [`Shape`].
///
/// The part-offset invariants are validated here, so downstream ring
/// decomposition can slice without further checks.
pub fn parse_shape(number: u32, content: &[u8]) -> ShpResult<Shape> {
    if content.len() < 4 {
        return Err(ShpError::InvalidRecord {
            number,
            reason: format!(
                "content is {} bytes, need at least 4 for the type code",
                content.len()
            ),
        });
    }

    let code = i32_le(content, 0);
    let shape_type =
        ShapeType::from_code(code).ok_or(ShpError::UnknownShapeType { number, code })?;

    let shape = match shape_type {
        ShapeType::Null => Shape::empty(ShapeType::Null),
        ShapeType::Point | ShapeType::PointZ | ShapeType::PointM => {
            parse_point(number, shape_type, content)?
        }
        ShapeType::MultiPoint | ShapeType::MultiPointZ | ShapeType::MultiPointM => {
            parse_multipoint(number, shape_type, content)?
        }
        ShapeType::PolyLine
        | ShapeType::Polygon
        | ShapeType::PolyLineZ
        | ShapeType::PolygonZ
        | ShapeType::PolyLineM
        | ShapeType::PolygonM => parse_poly(number, shape_type, content)?,
        // Recognized so the record walk can continue, but the surface
        // geometry is not decoded.
        ShapeType::MultiPatch => Shape::empty(ShapeType::MultiPatch),
    };

    shape
        .validate()
        .map_err(|reason| ShpError::InvalidRecord { number, reason })?;

    Ok(shape)
}

/// Parse Point/PointZ/PointM content.
///
/// - Bytes 0-3: shape type
/// - Bytes 4-11: X (f64)
/// - Bytes 12-19: Y (f64)
///
/// PointZ/PointM carry trailing Z/M values, skipped here.
fn parse_point(number: u32, shape_type: ShapeType, content: &[u8]) -> ShpResult<Shape> {
    if content.len() < 20 {
        return Err(ShpError::InvalidRecord {
            number,
            reason: format!("point content is {} bytes, need 20", content.len()),
        });
    }

    let x = f64_le(content, 4);
    let y = f64_le(content, 12);
    Ok(Shape::new(
        shape_type,
        vec![GeoPoint::new(x, y)],
        Vec::new(),
    ))
}

/// Parse MultiPoint/MultiPointZ/MultiPointM content.
///
/// - Bytes 0-3: shape type
/// - Bytes 4-35: XY box (4 f64, unused here)
/// - Bytes 36-39: NumPoints
/// - Bytes 40+: NumPoints XY points, 16 bytes each
///
/// Z/M variants append range and value arrays, skipped here.
fn parse_multipoint(number: u32, shape_type: ShapeType, content: &[u8]) -> ShpResult<Shape> {
    if content.len() < 40 {
        return Err(ShpError::InvalidRecord {
            number,
            reason: format!("multipoint content is {} bytes, need at least 40", content.len()),
        });
    }

    let num_points = i32_le(content, 36);
    if num_points < 0 {
        return Err(ShpError::InvalidRecord {
            number,
            reason: format!("negative point count {}", num_points),
        });
    }
    let num_points = num_points as usize;

    let needed = 40 + 16 * num_points;
    if content.len() < needed {
        return Err(ShpError::InvalidRecord {
            number,
            reason: format!(
                "content is {} bytes but {} points need {}",
                content.len(),
                num_points,
                needed
            ),
        });
    }

    let mut points = Vec::with_capacity(num_points);
    for i in 0..num_points {
        let base = 40 + 16 * i;
        points.push(GeoPoint::new(f64_le(content, base), f64_le(content, base + 8)));
    }

    Ok(Shape::new(shape_type, points, Vec::new()))
}

/// Parse PolyLine/Polygon content, shared by the Z/M variants for the XY
/// prefix.
///
/// - Bytes 0-3: shape type
/// - Bytes 4-35: XY box (4 f64, unused here)
/// - Bytes 36-39: NumParts
/// - Bytes 40-43: NumPoints
/// - Bytes 44..44+4*NumParts: part start indices into the point array
/// - Then NumPoints XY points, 16 bytes each
///
/// Z/M variants append range and value arrays, skipped here.
fn parse_poly(number: u32, shape_type: ShapeType, content: &[u8]) -> ShpResult<Shape> {
    if content.len() < 44 {
        return Err(ShpError::InvalidRecord {
            number,
            reason: format!("poly content is {} bytes, need at least 44", content.len()),
        });
    }

    let num_parts = i32_le(content, 36);
    let num_points = i32_le(content, 40);
    if num_parts < 0 || num_points < 0 {
        return Err(ShpError::InvalidRecord {
            number,
            reason: format!("negative part or point count ({}, {})", num_parts, num_points),
        });
    }
    let num_parts = num_parts as usize;
    let num_points = num_points as usize;

    let parts_end = 44 + 4 * num_parts;
    let needed = parts_end + 16 * num_points;
    if content.len() < needed {
        return Err(ShpError::InvalidRecord {
            number,
            reason: format!(
                "content is {} bytes but {} parts and {} points need {}",
                content.len(),
                num_parts,
                num_points,
                needed
            ),
        });
    }

    let mut parts = Vec::with_capacity(num_parts);
    for i in 0..num_parts {
        let offset = i32_le(content, 44 + 4 * i);
        if offset < 0 {
            return Err(ShpError::InvalidRecord {
                number,
                reason: format!("negative part offset {}", offset),
            });
        }
        parts.push(offset as usize);
    }

    let mut points = Vec::with_capacity(num_points);
    for i in 0..num_points {
        let base = parts_end + 16 * i;
        points.push(GeoPoint::new(f64_le(content, base), f64_le(content, base + 8)));
    }

    Ok(Shape::new(shape_type, points, parts))
}

// ===== Byte helpers =====

fn i32_le(data: &[u8], offset: usize) -> i32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&data[offset..offset + 4]);
    i32::from_le_bytes(buf)
}

fn f64_le(data: &[u8], offset: usize) -> f64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&data[offset..offset + 8]);
    f64::from_le_bytes(buf)
}
