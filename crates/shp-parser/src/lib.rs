//! ESRI Shapefile (.shp) reader.
//!
//! Parses the main file header and the sequential record stream into
//! [`map_common::Shape`] values. Parsing is eager: construction reads and
//! validates the whole file, so the [`GeometrySource`] accessors are
//! infallible. The companion .shx index and .dbf attribute files are not
//! read; records are walked sequentially.

pub mod error;
pub mod header;
pub mod record;

use std::path::{Path, PathBuf};

use bytes::Bytes;
use map_common::{BoundingBox, GeometrySource, Shape};
use tracing::{debug, info, trace, warn};

pub use error::{ShpError, ShpResult};
pub use header::{parse_header, FileHeader, HEADER_LEN};
pub use record::{parse_record_header, parse_shape, RecordHeader, RECORD_HEADER_LEN};

/// An eagerly parsed .shp file.
#[derive(Debug)]
pub struct ShpReader {
    header: FileHeader,
    shapes: Vec<Shape>,
}

impl ShpReader {
    /// Read and parse a shapefile from disk.
    ///
    /// A path without an extension gets `.shp` appended, so callers can
    /// name the dataset rather than the file.
    pub fn open(path: impl AsRef<Path>) -> ShpResult<Self> {
        let path = resolve_path(path.as_ref());
        let data = std::fs::read(&path).map_err(|source| ShpError::Io {
            path: path.clone(),
            source,
        })?;

        let reader = Self::from_bytes(Bytes::from(data))?;
        info!(
            path = %path.display(),
            shapes = reader.shapes.len(),
            shape_type = ?reader.header.shape_type,
            "Parsed shapefile"
        );
        Ok(reader)
    }

    /// Parse a shapefile from an in-memory buffer.
    pub fn from_bytes(data: Bytes) -> ShpResult<Self> {
        let header = header::parse_header(&data)?;

        let declared_len = header.file_length_words as usize * 2;
        if declared_len != data.len() {
            warn!(
                declared = declared_len,
                actual = data.len(),
                "File length in header does not match buffer size"
            );
        }

        let mut shapes = Vec::new();
        let mut offset = HEADER_LEN;
        while offset < data.len() {
            let rec = record::parse_record_header(&data[offset..])?;
            let content_len = rec.content_words as usize * 2;
            let content_start = offset + RECORD_HEADER_LEN;
            let content_end = content_start + content_len;
            if content_end > data.len() {
                return Err(ShpError::Truncated(format!(
                    "record {} declares {} content bytes but only {} remain",
                    rec.number,
                    content_len,
                    data.len() - content_start
                )));
            }

            let shape = record::parse_shape(rec.number, &data[content_start..content_end])?;
            trace!(
                record = rec.number,
                shape_type = ?shape.shape_type,
                points = shape.points.len(),
                "Parsed record"
            );
            shapes.push(shape);
            offset = content_end;
        }

        debug!(shapes = shapes.len(), "Record walk complete");
        Ok(Self { header, shapes })
    }

    /// The parsed main file header.
    pub fn header(&self) -> &FileHeader {
        &self.header
    }
}

impl GeometrySource for ShpReader {
    fn bounding_box(&self) -> BoundingBox {
        self.header.bbox
    }

    fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

// Append .shp when the caller passed an extensionless dataset path.
fn resolve_path(path: &Path) -> PathBuf {
    if path.extension().is_none() {
        path.with_extension("shp")
    } else {
        path.to_path_buf()
    }
}
