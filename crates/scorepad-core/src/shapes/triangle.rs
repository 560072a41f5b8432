//! Triangle shape.

use super::Geometry;
use crate::geometry::{TRIANGLE_HIT_TOLERANCE, bounding_box, polygon_path, triangle_area};
use crate::style::ShapeStyle;
use crate::surface::Surface;
use kurbo::{Point, Rect, Stroke, Vec2};

/// A triangle defined by three vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub vertices: [Point; 3],
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Right triangle dragged from `origin` to `current`.
    ///
    /// The right angle sits at `(current.x, origin.y)`.
    pub fn from_drag(origin: Point, current: Point) -> Self {
        Self::new(current, origin, Point::new(current.x, origin.y))
    }

    pub fn area(&self) -> f64 {
        let [a, b, c] = self.vertices;
        triangle_area(a, b, c)
    }
}

impl Geometry for Triangle {
    fn bounds(&self) -> Rect {
        bounding_box(&self.vertices)
    }

    /// Area method: the three sub-triangles formed with `point` add up to the
    /// whole area (within tolerance) only when `point` is inside.
    fn contains(&self, point: Point) -> bool {
        let [a, b, c] = self.vertices;
        let parts = triangle_area(point, b, c) + triangle_area(a, point, c) + triangle_area(a, b, point);
        parts <= self.area() + TRIANGLE_HIT_TOLERANCE
    }

    fn translate(&mut self, delta: Vec2) {
        for vertex in &mut self.vertices {
            *vertex += delta;
        }
    }

    fn paint(&self, style: &ShapeStyle, surface: &mut dyn Surface) {
        let path = polygon_path(&self.vertices);
        if style.filled {
            surface.fill(&path, style.pen());
        }
        surface.stroke(&path, &Stroke::new(style.pen_width()), style.pen());
    }
}
