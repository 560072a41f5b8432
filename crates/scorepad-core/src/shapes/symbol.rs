//! Music symbol rendered from a notation font glyph.

use super::Geometry;
use crate::geometry::contains_strict;
use crate::style::ShapeStyle;
use crate::surface::Surface;
use kurbo::{Point, Rect, Vec2};

/// Font family the glyph palette is drawn from.
pub const NOTATION_FONT: &str = "Leland";

/// Where a glyph of `size` must be drawn so its ink lands on `corner`.
pub(crate) fn glyph_origin(corner: Point, size: f64) -> Point {
    let diagonal = size * std::f64::consts::SQRT_2;
    Point::new(corner.x - diagonal / 10.0, corner.y - diagonal / 1.5)
}

/// A single glyph placed in a square cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    /// Top-left corner of the cell.
    pub corner: Point,
    /// Cell edge length; also the font size.
    pub size: f64,
    /// The glyph, usually one private-use code point.
    pub glyph: String,
}

impl Symbol {
    pub fn new(corner: Point, size: f64, glyph: impl Into<String>) -> Self {
        Self {
            corner,
            size,
            glyph: glyph.into(),
        }
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

impl Geometry for Symbol {
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
        surface.text(
            glyph_origin(self.corner, self.size),
            &self.glyph,
            NOTATION_FONT,
            self.size,
            style.pen(),
        );
    }
}
