//! Color representation for render styles.

use serde::{Deserialize, Serialize};

/// Color supporting the formats a style file may use.
///
/// Deserialization is untagged, so every JSON string lands in the `Hex`
/// variant; `to_rgba` resolves a string as hex when it starts with `#`
/// and as a color name otherwise. Unresolvable colors fall back to
/// opaque black.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    /// Color string: "#RRGGBB", "#RRGGBBAA", or a name like "black"
    Hex(String),

    /// RGB array: [r, g, b] or [r, g, b, a]
    Array(Vec<u8>),

    /// Named color
    Named(String),

    /// Explicit RGBA
    Rgba { r: u8, g: u8, b: u8, a: u8 },
}

impl Color {
    pub fn white() -> Self {
        Color::Named("white".to_string())
    }

    pub fn black() -> Self {
        Color::Named("black".to_string())
    }

    pub fn grey() -> Self {
        Color::Named("grey".to_string())
    }

    /// Convert to an RGBA byte array.
    pub fn to_rgba(&self) -> [u8; 4] {
        match self {
            Color::Hex(s) | Color::Named(s) => resolve_text(s),
            Color::Array(arr) => {
                let r = arr.first().copied().unwrap_or(0);
                let g = arr.get(1).copied().unwrap_or(0);
                let b = arr.get(2).copied().unwrap_or(0);
                let a = arr.get(3).copied().unwrap_or(255);
                [r, g, b, a]
            }
            Color::Rgba { r, g, b, a } => [*r, *g, *b, *a],
        }
    }
}

fn resolve_text(s: &str) -> [u8; 4] {
    match s.strip_prefix('#') {
        Some(hex) => parse_hex_color(hex),
        None => named_color(s),
    }
}

fn parse_hex_color(s: &str) -> [u8; 4] {
    if s.len() == 6 {
        let r = u8::from_str_radix(&s[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&s[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&s[4..6], 16).unwrap_or(0);
        [r, g, b, 255]
    } else if s.len() == 8 {
        let r = u8::from_str_radix(&s[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&s[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&s[4..6], 16).unwrap_or(0);
        let a = u8::from_str_radix(&s[6..8], 16).unwrap_or(255);
        [r, g, b, a]
    } else {
        [0, 0, 0, 255]
    }
}

fn named_color(name: &str) -> [u8; 4] {
    match name.to_lowercase().as_str() {
        "transparent" => [0, 0, 0, 0],
        "black" => [0, 0, 0, 255],
        "white" => [255, 255, 255, 255],
        "grey" | "gray" => [128, 128, 128, 255],
        "lightgrey" | "lightgray" => [211, 211, 211, 255],
        "silver" => [192, 192, 192, 255],
        "red" => [255, 0, 0, 255],
        "green" => [0, 128, 0, 255],
        "blue" => [0, 0, 255, 255],
        "navy" => [0, 0, 128, 255],
        "yellow" => [255, 255, 0, 255],
        "cyan" => [0, 255, 255, 255],
        "magenta" => [255, 0, 255, 255],
        "orange" => [255, 165, 0, 255],
        "purple" => [128, 0, 128, 255],
        _ => [0, 0, 0, 255],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        assert_eq!(Color::white().to_rgba(), [255, 255, 255, 255]);
        assert_eq!(Color::black().to_rgba(), [0, 0, 0, 255]);
        assert_eq!(Color::grey().to_rgba(), [128, 128, 128, 255]);
        assert_eq!(
            Color::Named("GRAY".to_string()).to_rgba(),
            [128, 128, 128, 255]
        );
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(
            Color::Hex("#ff8000".to_string()).to_rgba(),
            [255, 128, 0, 255]
        );
        assert_eq!(
            Color::Hex("#ff800080".to_string()).to_rgba(),
            [255, 128, 0, 128]
        );
    }

    #[test]
    fn test_array_color() {
        assert_eq!(Color::Array(vec![1, 2, 3]).to_rgba(), [1, 2, 3, 255]);
        assert_eq!(Color::Array(vec![1, 2, 3, 4]).to_rgba(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_unknown_name_falls_back_to_black() {
        assert_eq!(
            Color::Named("heliotrope".to_string()).to_rgba(),
            [0, 0, 0, 255]
        );
        assert_eq!(Color::Hex("#zz".to_string()).to_rgba(), [0, 0, 0, 255]);
    }

    #[test]
    fn test_untagged_string_resolves_names() {
        // JSON strings always deserialize into the Hex variant; name
        // resolution still has to work for them.
        let c: Color = serde_json::from_str(r#""red""#).unwrap();
        assert_eq!(c.to_rgba(), [255, 0, 0, 255]);

        let c: Color = serde_json::from_str(r##""#102030""##).unwrap();
        assert_eq!(c.to_rgba(), [16, 32, 48, 255]);

        let c: Color = serde_json::from_str("[9, 8, 7]").unwrap();
        assert_eq!(c.to_rgba(), [9, 8, 7, 255]);
    }
}
