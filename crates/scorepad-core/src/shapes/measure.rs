//! Measure (one bar of a five-line staff).

use super::Geometry;
use crate::geometry::{contains_strict, polyline_path};
use crate::style::ShapeStyle;
use crate::surface::Surface;
use kurbo::{Point, Rect, Stroke, Vec2};

/// A staff measure: five evenly spaced lines closed by bar lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Measure {
    /// Top-left corner (top staff line, left bar line).
    pub corner: Point,
    /// Horizontal length of the measure.
    pub length: f64,
    /// Distance from the top to the bottom staff line.
    pub height: f64,
}

impl Measure {
    pub const DEFAULT_HEIGHT: f64 = 28.0;

    /// Staff height per unit of the size control.
    pub const HEIGHT_PER_SIZE: f64 = 4.0;

    pub fn new(corner: Point, length: f64) -> Self {
        Self {
            corner,
            length,
            height: Self::DEFAULT_HEIGHT,
        }
    }

    pub fn resize(&mut self, size: u32) {
        self.height = size as f64 * Self::HEIGHT_PER_SIZE;
    }

    fn as_rect(&self) -> Rect {
        Rect::new(
            self.corner.x,
            self.corner.y,
            self.corner.x + self.length,
            self.corner.y + self.height,
        )
    }

    /// Y coordinates of the five staff lines, top to bottom.
    pub fn staff_lines(&self) -> [f64; 5] {
        let y = self.corner.y;
        let h = self.height;
        [y, y + h / 4.0, y + h / 2.0, y + h * 3.0 / 4.0, y + h]
    }
}

impl Geometry for Measure {
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
        let stroke = Stroke::new(style.pen_width());
        let pen = style.pen();
        let left = self.corner.x;
        let right = self.corner.x + self.length;
        let top = self.corner.y;
        let bottom = self.corner.y + self.height;

        surface.stroke(
            &polyline_path(&[Point::new(left, top), Point::new(left, bottom)]),
            &stroke,
            pen,
        );
        for y in self.staff_lines() {
            surface.stroke(
                &polyline_path(&[Point::new(left, y), Point::new(right, y)]),
                &stroke,
                pen,
            );
        }
        surface.stroke(
            &polyline_path(&[Point::new(right, top), Point::new(right, bottom)]),
            &stroke,
            pen,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::DisplayList;

    #[test]
    fn test_default_height() {
        let measure = Measure::new(Point::new(10.0, 10.0), 200.0);
        assert_eq!(measure.bounds(), Rect::new(10.0, 10.0, 210.0, 38.0));
    }

    #[test]
    fn test_resize_scales_by_four() {
        let mut measure = Measure::new(Point::new(0.0, 0.0), 100.0);
        measure.resize(5);
        assert!((measure.height - 20.0).abs() < f64::EPSILON);
        assert_eq!(measure.staff_lines(), [0.0, 5.0, 10.0, 15.0, 20.0]);
    }

    #[test]
    fn test_contains_is_strict() {
        let measure = Measure::new(Point::new(0.0, 0.0), 100.0);
        assert!(measure.contains(Point::new(50.0, 10.0)));
        assert!(!measure.contains(Point::new(0.0, 10.0)));
        assert!(!measure.contains(Point::new(50.0, 28.0)));
    }

    #[test]
    fn test_paints_staff_and_bar_lines() {
        let measure = Measure::new(Point::new(0.0, 0.0), 100.0);
        let mut list = DisplayList::new();
        measure.paint(&ShapeStyle::notation(), &mut list);
        assert_eq!(list.len(), 7);
    }
}
