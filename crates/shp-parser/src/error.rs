//! Error types for shapefile parsing.

use std::path::PathBuf;

use map_common::MapError;
use thiserror::Error;

/// Result type alias using ShpError.
pub type ShpResult<T> = Result<T, ShpError>;

/// Errors raised while reading a .shp file.
#[derive(Debug, Error)]
pub enum ShpError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid shapefile: {0}")]
    InvalidFormat(String),

    #[error("Truncated shapefile: {0}")]
    Truncated(String),

    #[error("Record {number}: unknown shape type code {code}")]
    UnknownShapeType { number: u32, code: i32 },

    #[error("Record {number}: {reason}")]
    InvalidRecord { number: u32, reason: String },
}

impl From<ShpError> for MapError {
    fn from(err: ShpError) -> Self {
        match err {
            ShpError::InvalidRecord { .. } => MapError::InvalidGeometry(err.to_string()),
            _ => MapError::Shapefile(err.to_string()),
        }
    }
}
