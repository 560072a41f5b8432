//! Drawable definitions for the canvas.
//!
//! Every authorable primitive is a [`Drawable`]: a concrete [`Shape`] plus the
//! attributes all primitives share (style, lock flag, selection anchor).

mod ellipse;
mod freehand;
mod line;
mod measure;
mod rectangle;
mod symbol;
mod text;
mod triangle;

pub use ellipse::Ellipse;
pub use freehand::Freehand;
pub use line::Line;
pub use measure::Measure;
pub use rectangle::Rectangle;
pub use symbol::Symbol;
pub use text::Text;
pub use triangle::Triangle;

use crate::geometry::encloses_strictly;
use crate::style::{Rgba, ShapeStyle};
use crate::surface::Surface;
use kurbo::{Point, Rect, Vec2};

/// Geometry operations every variant provides.
pub trait Geometry {
    /// Axis-aligned enclosing box, consistent with [`Geometry::contains`].
    fn bounds(&self) -> Rect;

    /// Point-in-shape test used for click selection.
    fn contains(&self, point: Point) -> bool;

    /// Shift the geometry by a delta.
    fn translate(&mut self, delta: Vec2);

    /// Paint the shape with the given style.
    fn paint(&self, style: &ShapeStyle, surface: &mut dyn Surface);
}

/// Closed set of concrete shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Line),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Triangle(Triangle),
    Freehand(Freehand),
    Measure(Measure),
    Symbol(Symbol),
    Text(Text),
}

impl Shape {
    /// Short lowercase name, used in logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Line(_) => "line",
            Shape::Rectangle(_) => "rectangle",
            Shape::Ellipse(_) => "ellipse",
            Shape::Triangle(_) => "triangle",
            Shape::Freehand(_) => "freehand",
            Shape::Measure(_) => "measure",
            Shape::Symbol(_) => "symbol",
            Shape::Text(_) => "text",
        }
    }

    fn geometry(&self) -> &dyn Geometry {
        match self {
            Shape::Line(s) => s,
            Shape::Rectangle(s) => s,
            Shape::Ellipse(s) => s,
            Shape::Triangle(s) => s,
            Shape::Freehand(s) => s,
            Shape::Measure(s) => s,
            Shape::Symbol(s) => s,
            Shape::Text(s) => s,
        }
    }

    fn geometry_mut(&mut self) -> &mut dyn Geometry {
        match self {
            Shape::Line(s) => s,
            Shape::Rectangle(s) => s,
            Shape::Ellipse(s) => s,
            Shape::Triangle(s) => s,
            Shape::Freehand(s) => s,
            Shape::Measure(s) => s,
            Shape::Symbol(s) => s,
            Shape::Text(s) => s,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.geometry().bounds()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.geometry().contains(point)
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.geometry_mut().translate(delta);
    }

    pub fn paint(&self, style: &ShapeStyle, surface: &mut dyn Surface) {
        self.geometry().paint(style, surface);
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Shape {
                fn from(shape: $variant) -> Self {
                    Shape::$variant(shape)
                }
            }
        )*
    };
}

impl_from_variant!(Line, Rectangle, Ellipse, Triangle, Freehand, Measure, Symbol, Text);

/// Enclosing box expressed the way property panels show it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Top-left corner.
    pub corner: Point,
    /// Horizontal extent ("width" is reserved for stroke thickness).
    pub length: f64,
    /// Vertical extent.
    pub height: f64,
}

impl From<Rect> for Frame {
    fn from(rect: Rect) -> Self {
        Self {
            corner: Point::new(rect.x0, rect.y0),
            length: rect.width(),
            height: rect.height(),
        }
    }
}

/// An authorable primitive owned by a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    shape: Shape,
    style: ShapeStyle,
    locked: bool,
    /// Last interaction coordinate; drag deltas are measured from here.
    anchor: Point,
}

impl Drawable {
    /// Create a drawable with a style snapshot.
    pub fn new(shape: impl Into<Shape>, style: ShapeStyle) -> Self {
        let shape = shape.into();
        let anchor = {
            let bounds = shape.bounds();
            Point::new(bounds.x0, bounds.y0)
        };
        Self {
            shape,
            style,
            locked: false,
            anchor,
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn bounds(&self) -> Rect {
        self.shape.bounds()
    }

    /// Enclosing box as `(corner, length, height)`.
    pub fn frame(&self) -> Frame {
        self.bounds().into()
    }

    /// Point-in-shape test. A hit records the point as the new anchor.
    pub fn hit_test(&mut self, point: Point) -> bool {
        if self.shape.contains(point) {
            self.anchor = point;
            true
        } else {
            false
        }
    }

    /// True iff the whole bounding box lies strictly inside the rectangle
    /// spanned by `top_left` and `bottom_right`. A match anchors the drawable
    /// at its own top-left corner.
    pub fn region_test(&mut self, top_left: Point, bottom_right: Point) -> bool {
        let region = Rect::new(top_left.x, top_left.y, bottom_right.x, bottom_right.y);
        let bounds = self.bounds();
        if encloses_strictly(region, bounds) {
            self.anchor = Point::new(bounds.x0, bounds.y0);
            true
        } else {
            false
        }
    }

    /// Move by the distance between the anchor and `to`, then re-anchor at `to`.
    ///
    /// Callers pass the pointer's absolute position on every move event; only
    /// the increment since the previous call is applied.
    pub fn translate_to(&mut self, to: Point) {
        let delta = to - self.anchor;
        if delta != Vec2::ZERO {
            self.shape.translate(delta);
        }
        self.anchor = to;
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.style.color = color;
    }

    pub fn set_fill(&mut self, filled: bool) {
        self.style.filled = filled;
    }

    /// Vector shapes take `width` as their stroke width; notation elements
    /// resize instead.
    pub fn set_width(&mut self, width: u32) {
        match &mut self.shape {
            Shape::Measure(measure) => measure.resize(width),
            Shape::Symbol(symbol) => symbol.resize(width),
            Shape::Text(text) => text.resize(width),
            Shape::Line(_)
            | Shape::Rectangle(_)
            | Shape::Ellipse(_)
            | Shape::Triangle(_)
            | Shape::Freehand(_) => self.style.width = width,
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        self.shape.paint(&self.style, surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DisplayList, DrawCommand};

    fn rect_drawable() -> Drawable {
        Drawable::new(
            Rectangle::new(Point::new(10.0, 10.0), 50.0, 30.0),
            ShapeStyle::default(),
        )
    }

    #[test]
    fn test_rectangle_hit_scenario() {
        let mut d = rect_drawable();
        assert!(d.hit_test(Point::new(30.0, 20.0)));
        assert!(!d.hit_test(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_hit_records_anchor() {
        let mut d = rect_drawable();
        assert!(d.hit_test(Point::new(30.0, 20.0)));
        assert_eq!(d.anchor(), Point::new(30.0, 20.0));

        // A miss leaves the anchor alone
        assert!(!d.hit_test(Point::new(500.0, 500.0)));
        assert_eq!(d.anchor(), Point::new(30.0, 20.0));
    }

    #[test]
    fn test_translate_is_incremental() {
        let mut d = rect_drawable();
        d.hit_test(Point::new(30.0, 20.0));
        d.translate_to(Point::new(35.0, 22.0));
        assert_eq!(d.frame().corner, Point::new(15.0, 12.0));

        d.translate_to(Point::new(40.0, 22.0));
        assert_eq!(d.frame().corner, Point::new(20.0, 12.0));

        // Same position again: zero delta
        d.translate_to(Point::new(40.0, 22.0));
        assert_eq!(d.frame().corner, Point::new(20.0, 12.0));
    }

    #[test]
    fn test_region_test_is_strict() {
        let mut d = rect_drawable();
        assert!(d.region_test(Point::new(0.0, 0.0), Point::new(100.0, 100.0)));
        assert_eq!(d.anchor(), Point::new(10.0, 10.0));

        // Touching the left edge is not containment
        assert!(!d.region_test(Point::new(10.0, 0.0), Point::new(100.0, 100.0)));
        // Partial overlap is not containment
        assert!(!d.region_test(Point::new(0.0, 0.0), Point::new(40.0, 100.0)));
        // Corners are taken as given, not normalized
        assert!(!d.region_test(Point::new(100.0, 100.0), Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_frame() {
        let d = rect_drawable();
        let frame = d.frame();
        assert_eq!(frame.corner, Point::new(10.0, 10.0));
        assert!((frame.length - 50.0).abs() < f64::EPSILON);
        assert!((frame.height - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_width_vector_vs_notation() {
        let mut rect = rect_drawable();
        rect.set_width(9);
        assert_eq!(rect.style().width, 9);
        assert!((rect.frame().length - 50.0).abs() < f64::EPSILON);

        let mut measure = Drawable::new(
            Measure::new(Point::new(0.0, 0.0), 100.0),
            ShapeStyle::notation(),
        );
        measure.set_width(10);
        assert_eq!(measure.style().width, 1);
        assert!((measure.frame().height - 40.0).abs() < f64::EPSILON);

        let mut symbol = Drawable::new(
            Symbol::new(Point::new(0.0, 0.0), 20.0, "\u{E050}"),
            ShapeStyle::notation(),
        );
        symbol.set_width(48);
        assert!((symbol.frame().length - 48.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fill_flag_controls_fill() {
        let mut d = rect_drawable();
        let mut list = DisplayList::new();
        d.render(&mut list);
        assert!(!list.commands().iter().any(|c| matches!(c, DrawCommand::Fill { .. })));

        d.set_fill(true);
        let mut list = DisplayList::new();
        d.render(&mut list);
        assert!(matches!(list.commands()[0], DrawCommand::Fill { .. }));
        assert!(matches!(list.commands()[1], DrawCommand::Stroke { .. }));
    }
}
