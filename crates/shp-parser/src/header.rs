//! Shapefile main file header parsing.

use map_common::{BoundingBox, ShapeType};

use crate::error::{ShpError, ShpResult};

/// Length of the main file header in bytes.
pub const HEADER_LEN: usize = 100;

/// Expected magic number at the start of every .shp file.
const FILE_CODE: i32 = 9994;

/// The only shapefile version ever published.
const VERSION: i32 = 1000;

/// Parsed main file header.
#[derive(Debug, Clone)]
pub struct FileHeader {
    /// Declared geometry type for the whole file. Individual records may
    /// still be Null.
    pub shape_type: ShapeType,
    /// XY bounding box over all records, straight from the header.
    pub bbox: BoundingBox,
    /// Declared total file length in 16-bit words, header included.
    pub file_length_words: i32,
}

/// Parse the 100-byte main file header.
///
/// The header mixes endianness per the ESRI spec:
/// - Bytes 0-3: file code 9994 (big-endian)
/// - Bytes 4-23: unused
/// - Bytes 24-27: file length in 16-bit words (big-endian)
/// - Bytes 28-31: version 1000 (little-endian)
/// - Bytes 32-35: shape type (little-endian)
/// - Bytes 36-67: Xmin, Ymin, Xmax, Ymax (little-endian f64)
/// - Bytes 68-99: Z and M ranges (unused here)
pub fn parse_header(data: &[u8]) -> ShpResult<FileHeader> {
    if data.len() < HEADER_LEN {
        return Err(ShpError::Truncated(format!(
            "file header needs {} bytes, got {}",
            HEADER_LEN,
            data.len()
        )));
    }

    let file_code = i32::from_be_bytes([data[0], data[1], data[2], data[3]]);
    if file_code != FILE_CODE {
        return Err(ShpError::InvalidFormat(format!(
            "bad file code {} (expected {})",
            file_code, FILE_CODE
        )));
    }

    let file_length_words = i32::from_be_bytes([data[24], data[25], data[26], data[27]]);

    let version = i32::from_le_bytes([data[28], data[29], data[30], data[31]]);
    if version != VERSION {
        return Err(ShpError::InvalidFormat(format!(
            "unsupported shapefile version {} (expected {})",
            version, VERSION
        )));
    }

    let type_code = i32::from_le_bytes([data[32], data[33], data[34], data[35]]);
    let shape_type = ShapeType::from_code(type_code).ok_or(ShpError::UnknownShapeType {
        number: 0,
        code: type_code,
    })?;

    let min_x = f64::from_le_bytes([
        data[36], data[37], data[38], data[39], data[40], data[41], data[42], data[43],
    ]);
    let min_y = f64::from_le_bytes([
        data[44], data[45], data[46], data[47], data[48], data[49], data[50], data[51],
    ]);
    let max_x = f64::from_le_bytes([
        data[52], data[53], data[54], data[55], data[56], data[57], data[58], data[59],
    ]);
    let max_y = f64::from_le_bytes([
        data[60], data[61], data[62], data[63], data[64], data[65], data[66], data[67],
    ]);

    Ok(FileHeader {
        shape_type,
        bbox: BoundingBox::new(min_x, min_y, max_x, max_y),
        file_length_words,
    })
}
