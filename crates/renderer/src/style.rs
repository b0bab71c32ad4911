//! Render style configuration.
//!
//! Styles control the colors and stroke width used by the render pipeline.
//! They can be built in code or loaded from a JSON file, with every field
//! optional and falling back to the default map look (white background,
//! grey frame, black outlines).

use map_common::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading or validating a style.
#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Failed to read style file: {0}")]
    Io(String),

    #[error("Failed to parse style JSON: {0}")]
    Parse(String),

    #[error("Invalid style: {0}")]
    Invalid(String),
}

/// Colors and stroke settings for a render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Canvas background color.
    pub background: Color,
    /// Color of the frame drawn around the fitted map area.
    pub frame: Color,
    /// Color used for polygon and polyline outlines.
    pub outline: Color,
    /// Stroke width in pixels for all outlines.
    pub stroke_width: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: Color::white(),
            frame: Color::grey(),
            outline: Color::black(),
            stroke_width: 1.0,
        }
    }
}

impl RenderStyle {
    /// Load a style from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| StyleError::Io(e.to_string()))?;
        Self::from_json(&content)
    }

    /// Parse a style from a JSON string.
    ///
    /// Missing fields take their default values; unknown color names
    /// resolve to black rather than failing.
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        let style: RenderStyle =
            serde_json::from_str(json).map_err(|e| StyleError::Parse(e.to_string()))?;
        style.validate()?;
        Ok(style)
    }

    /// Check that the style is drawable.
    pub fn validate(&self) -> Result<(), StyleError> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(StyleError::Invalid(format!(
                "stroke_width must be positive, got {}",
                self.stroke_width
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = RenderStyle::default();
        assert_eq!(style.background.to_rgba(), [255, 255, 255, 255]);
        assert_eq!(style.frame.to_rgba(), [128, 128, 128, 255]);
        assert_eq!(style.outline.to_rgba(), [0, 0, 0, 255]);
        assert_eq!(style.stroke_width, 1.0);
    }

    #[test]
    fn test_from_json_full() {
        let json = r##"{
            "background": "#102030",
            "frame": [200, 200, 200],
            "outline": "red",
            "stroke_width": 2.5
        }"##;
        let style = RenderStyle::from_json(json).unwrap();
        assert_eq!(style.background.to_rgba(), [16, 32, 48, 255]);
        assert_eq!(style.frame.to_rgba(), [200, 200, 200, 255]);
        assert_eq!(style.outline.to_rgba(), [255, 0, 0, 255]);
        assert_eq!(style.stroke_width, 2.5);
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let style = RenderStyle::from_json(r#"{"outline": "navy"}"#).unwrap();
        assert_eq!(style.outline.to_rgba(), [0, 0, 128, 255]);
        assert_eq!(style.background, RenderStyle::default().background);
        assert_eq!(style.stroke_width, 1.0);
    }

    #[test]
    fn test_from_json_empty_object() {
        let style = RenderStyle::from_json("{}").unwrap();
        assert_eq!(style, RenderStyle::default());
    }

    #[test]
    fn test_invalid_stroke_width_rejected() {
        let err = RenderStyle::from_json(r#"{"stroke_width": 0.0}"#).unwrap_err();
        assert!(matches!(err, StyleError::Invalid(_)));

        let err = RenderStyle::from_json(r#"{"stroke_width": -1.5}"#).unwrap_err();
        assert!(matches!(err, StyleError::Invalid(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = RenderStyle::from_json("{not json").unwrap_err();
        assert!(matches!(err, StyleError::Parse(_)));
    }

    #[test]
    fn test_roundtrip_serialization() {
        let style = RenderStyle {
            background: Color::Rgba {
                r: 10,
                g: 20,
                b: 30,
                a: 255,
            },
            frame: Color::Array(vec![1, 2, 3, 4]),
            outline: Color::Hex("#ff0000".to_string()),
            stroke_width: 3.0,
        };
        let json = serde_json::to_string(&style).unwrap();
        let back = RenderStyle::from_json(&json).unwrap();
        assert_eq!(back.background.to_rgba(), style.background.to_rgba());
        assert_eq!(back.frame.to_rgba(), style.frame.to_rgba());
        assert_eq!(back.outline.to_rgba(), style.outline.to_rgba());
        assert_eq!(back.stroke_width, style.stroke_width);
    }
}
