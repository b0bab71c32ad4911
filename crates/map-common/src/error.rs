//! Error types for the shapemap crates.

use thiserror::Error;

/// Result type alias using MapError.
pub type MapResult<T> = Result<T, MapError>;

/// Primary error type for map rendering operations.
#[derive(Debug, Error)]
pub enum MapError {
    // === Geometry source errors ===
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Shapefile error: {0}")]
    Shapefile(String),

    // === Scale fitting errors ===
    #[error("Degenerate map extent: {0}")]
    DegenerateExtent(String),

    // === Rendering errors ===
    #[error("Rendering failed: {0}")]
    Render(String),

    #[error("PNG encoding failed: {0}")]
    PngEncode(String),

    // === Infrastructure errors ===
    #[error("I/O error: {0}")]
    Io(String),
}

// Conversion from common error types
impl From<std::io::Error> for MapError {
    fn from(err: std::io::Error) -> Self {
        MapError::Io(err.to_string())
    }
}
