//! Freehand drawing shape.

use super::Geometry;
use crate::geometry::{bounding_box, contains_inclusive, smooth_curve_path};
use crate::style::ShapeStyle;
use crate::surface::Surface;
use kurbo::{Point, Rect, Stroke, Vec2};

/// A freehand stroke (series of points).
#[derive(Debug, Clone, PartialEq)]
pub struct Freehand {
    /// Points in the stroke, in drawing order.
    pub points: Vec<Point>,
}

impl Freehand {
    /// Create from captured points.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl Geometry for Freehand {
    fn bounds(&self) -> Rect {
        bounding_box(&self.points)
    }

    fn contains(&self, point: Point) -> bool {
        !self.points.is_empty() && contains_inclusive(self.bounds(), point)
    }

    fn translate(&mut self, delta: Vec2) {
        for point in &mut self.points {
            *point += delta;
        }
    }

    fn paint(&self, style: &ShapeStyle, surface: &mut dyn Surface) {
        if self.points.len() < 2 {
            return;
        }
        let path = smooth_curve_path(&self.points);
        surface.stroke(&path, &Stroke::new(style.pen_width()), style.pen());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stroke_is_never_hit() {
        let freehand = Freehand::from_points(Vec::new());
        assert!(!freehand.contains(Point::ZERO));
    }

    #[test]
    fn test_bounds() {
        // Extremes arrive out of order
        let freehand = Freehand::from_points(vec![
            Point::new(50.0, 50.0),
            Point::new(0.0, 100.0),
            Point::new(100.0, 0.0),
        ]);

        let bounds = freehand.bounds();
        assert!((bounds.x0).abs() < f64::EPSILON);
        assert!((bounds.y0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 100.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_translate_moves_bounds() {
        let mut freehand = Freehand::from_points(vec![Point::new(0.0, 0.0), Point::new(10.0, 5.0)]);
        freehand.translate(Vec2::new(3.0, 4.0));
        assert_eq!(freehand.bounds(), Rect::new(3.0, 4.0, 13.0, 9.0));
    }

    #[test]
    fn test_single_point_paints_nothing() {
        use crate::surface::DisplayList;

        let freehand = Freehand::from_points(vec![Point::new(1.0, 1.0)]);
        let mut list = DisplayList::new();
        freehand.paint(&ShapeStyle::default(), &mut list);
        assert!(list.is_empty());
    }
}
