//! Ellipse shape.

use super::Geometry;
use crate::geometry::{PATH_TOLERANCE, contains_inclusive};
use crate::style::ShapeStyle;
use crate::surface::Surface;
use kurbo::{Ellipse as KurboEllipse, Point, Rect, Shape as KurboShape, Stroke, Vec2};

/// An ellipse inscribed in an axis-aligned box.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    /// Top-left corner of the enclosing box.
    pub position: Point,
    /// Width of the enclosing box.
    pub width: f64,
    /// Height of the enclosing box.
    pub height: f64,
}

impl Ellipse {
    /// Create a new ellipse.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            position,
            width,
            height,
        }
    }

    /// Create an ellipse from two corners of its enclosing box.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        let rect = Rect::from_points(p1, p2);
        Self::new(Point::new(rect.x0, rect.y0), rect.width(), rect.height())
    }

    /// The enclosing box.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    /// Get as a kurbo Ellipse.
    pub fn as_kurbo(&self) -> KurboEllipse {
        KurboEllipse::from_rect(self.as_rect())
    }
}

impl Geometry for Ellipse {
    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    // Box containment stands in for the true ellipse equation.
    fn contains(&self, point: Point) -> bool {
        contains_inclusive(self.as_rect(), point)
    }

    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    fn paint(&self, style: &ShapeStyle, surface: &mut dyn Surface) {
        let path = self.as_kurbo().to_path(PATH_TOLERANCE);
        if style.filled {
            surface.fill(&path, style.pen());
        }
        surface.stroke(&path, &Stroke::new(style.pen_width()), style.pen());
    }
}
