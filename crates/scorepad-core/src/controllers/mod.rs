//! The two collection controllers: free-form shapes and music notation.
//!
//! Both wrap a [`Canvas`](crate::canvas::Canvas) and differ only in their
//! tool sets and in what a finished drawing gesture creates.

mod drawing;
mod notation;

pub use drawing::ShapeController;
pub use notation::NotationController;

use kurbo::Point;

/// Convert integer canvas coordinates (origin top-left) to a point.
pub(crate) fn canvas_point(x: i32, y: i32) -> Point {
    Point::new(f64::from(x), f64::from(y))
}
