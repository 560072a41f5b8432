//! Text label placed on the score.

use super::Geometry;
use super::symbol::glyph_origin;
use crate::geometry::contains_strict;
use crate::style::ShapeStyle;
use crate::surface::Surface;
use kurbo::{Point, Rect, Vec2};

/// A single string drawn at a point. No wrapping or shaping.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Top-left corner of the selectable cell.
    pub corner: Point,
    /// Cell edge length; also the font size.
    pub size: f64,
    /// Text content.
    pub content: String,
    /// Font family name handed to the surface.
    pub font_family: String,
}

impl Text {
    pub const DEFAULT_FONT: &'static str = "Arial";

    pub fn new(corner: Point, size: f64, content: impl Into<String>) -> Self {
        Self {
            corner,
            size,
            content: content.into(),
            font_family: Self::DEFAULT_FONT.to_string(),
        }
    }

    pub fn with_font(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    pub fn resize(&mut self, size: u32) {
        self.size = size as f64;
    }

    fn as_rect(&self) -> Rect {
        Rect::new(
            self.corner.x,
            self.corner.y,
            self.corner.x + self.size,
            self.corner.y + self.size,
        )
    }
}

impl Geometry for Text {
    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn contains(&self, point: Point) -> bool {
        contains_strict(self.as_rect(), point)
    }

    fn translate(&mut self, delta: Vec2) {
        self.corner += delta;
    }

    fn paint(&self, style: &ShapeStyle, surface: &mut dyn Surface) {
        if self.content.is_empty() {
            return;
        }
        surface.text(
            glyph_origin(self.corner, self.size),
            &self.content,
            &self.font_family,
            self.size,
            style.pen(),
        );
    }
}
