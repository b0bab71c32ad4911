//! Map rendering for shapefile geometry.
//!
//! Implements the raster side of the workspace:
//! - Aspect-preserving scale fitting
//! - The render pipeline (project, fit, map to pixels, dispatch)
//! - A tiny-skia canvas sink with hand-rolled PNG output
//! - JSON-loadable render styles

pub mod canvas;
pub mod fit;
pub mod pipeline;
pub mod png;
pub mod style;

pub use canvas::PngCanvas;
pub use fit::{fit_scale, FitResult};
pub use pipeline::{render, RenderOptions};
pub use style::{RenderStyle, StyleError};
