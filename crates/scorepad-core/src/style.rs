//! Colour and stroke style shared by every drawable.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// Pen color of the dashed selection overlay.
    pub const fn selection() -> Self {
        Self::new(0, 0, 100, 255)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::black()
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Style properties stamped onto new drawables and pushed into selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Pen and brush color.
    pub color: Rgba,
    /// Stroke width in canvas units.
    pub width: u32,
    /// Whether closed shapes are filled with the brush.
    pub filled: bool,
}

impl ShapeStyle {
    pub const DEFAULT_WIDTH: u32 = 2;

    pub fn new(color: Rgba, width: u32, filled: bool) -> Self {
        Self {
            color,
            width,
            filled,
        }
    }

    /// Pen used by notation elements: opaque black, one unit wide.
    pub fn notation() -> Self {
        Self::new(Rgba::black(), 1, true)
    }

    /// Get the color as a peniko Color.
    pub fn pen(&self) -> Color {
        self.color.into()
    }

    /// Stroke width as a floating-point pen width.
    pub fn pen_width(&self) -> f64 {
        self.width as f64
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self::new(Rgba::black(), Self::DEFAULT_WIDTH, false)
    }
}

/// A single property-panel edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleChange {
    Color(Rgba),
    Width(u32),
    Fill(bool),
}

impl StyleChange {
    /// Apply this edit to a style snapshot.
    pub fn apply_to(self, style: &mut ShapeStyle) {
        match self {
            StyleChange::Color(color) => style.color = color,
            StyleChange::Width(width) => style.width = width,
            StyleChange::Fill(filled) => style.filled = filled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = ShapeStyle::default();
        assert_eq!(style.color, Rgba::black());
        assert_eq!(style.width, 2);
        assert!(!style.filled);
    }

    #[test]
    fn test_color_conversion() {
        let rgba = Rgba::new(10, 20, 30, 40);
        let color: Color = rgba.into();
        assert_eq!(Rgba::from(color), rgba);
    }

    #[test]
    fn test_style_change() {
        let mut style = ShapeStyle::default();
        StyleChange::Width(7).apply_to(&mut style);
        StyleChange::Fill(true).apply_to(&mut style);
        StyleChange::Color(Rgba::white()).apply_to(&mut style);
        assert_eq!(style, ShapeStyle::new(Rgba::white(), 7, true));
    }
}
