//! Rectangle shape.

use super::Geometry;
use crate::geometry::{PATH_TOLERANCE, contains_inclusive};
use crate::style::ShapeStyle;
use crate::surface::Surface;
use kurbo::{BezPath, Point, Rect, Shape as KurboShape, Stroke, Vec2};

/// An axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    /// Top-left corner position.
    pub position: Point,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            position,
            width,
            height,
        }
    }

    /// Create a rectangle from two corner points.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        let min_x = p1.x.min(p2.x);
        let min_y = p1.y.min(p2.y);
        let width = (p2.x - p1.x).abs();
        let height = (p2.y - p1.y).abs();

        Self::new(Point::new(min_x, min_y), width, height)
    }

    /// Get the rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    fn to_path(&self) -> BezPath {
        self.as_rect().to_path(PATH_TOLERANCE)
    }
}

impl Geometry for Rectangle {
    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn contains(&self, point: Point) -> bool {
        contains_inclusive(self.as_rect(), point)
    }

    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    fn paint(&self, style: &ShapeStyle, surface: &mut dyn Surface) {
        let path = self.to_path();
        if style.filled {
            surface.fill(&path, style.pen());
        }
        surface.stroke(&path, &Stroke::new(style.pen_width()), style.pen());
    }
}
