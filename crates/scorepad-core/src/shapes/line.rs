//! Line shape.

use super::Geometry;
use crate::geometry::{bounding_box, contains_inclusive, polyline_path};
use crate::style::ShapeStyle;
use crate::surface::Surface;
use kurbo::{Point, Rect, Stroke, Vec2};

/// A straight line segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

impl Geometry for Line {
    fn bounds(&self) -> Rect {
        bounding_box(&[self.start, self.end])
    }

    // Bounding-box hit: cheap and generous for diagonals.
    fn contains(&self, point: Point) -> bool {
        contains_inclusive(self.bounds(), point)
    }

    fn translate(&mut self, delta: Vec2) {
        self.start += delta;
        self.end += delta;
    }

    fn paint(&self, style: &ShapeStyle, surface: &mut dyn Surface) {
        let path = polyline_path(&[self.start, self.end]);
        surface.stroke(&path, &Stroke::new(style.pen_width()), style.pen());
    }
}
