//! Geometry helpers shared by the drawable variants.

use kurbo::{BezPath, Point, Rect};

/// Slack allowed on the triangle area comparison so thin triangles stay selectable.
pub const TRIANGLE_HIT_TOLERANCE: f64 = 100.0;

/// Flattening tolerance used when converting kurbo shapes to paths.
pub const PATH_TOLERANCE: f64 = 0.1;

/// Area of the triangle spanned by three points.
pub fn triangle_area(a: Point, b: Point, c: Point) -> f64 {
    ((a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)) / 2.0).abs()
}

/// Axis-aligned bounding box of a point set (`Rect::ZERO` when empty).
pub fn bounding_box(points: &[Point]) -> Rect {
    let Some(first) = points.first() else {
        return Rect::ZERO;
    };
    points
        .iter()
        .skip(1)
        .fold(Rect::from_points(*first, *first), |rect, p| {
            Rect::new(
                rect.x0.min(p.x),
                rect.y0.min(p.y),
                rect.x1.max(p.x),
                rect.y1.max(p.y),
            )
        })
}

/// Closed containment: edges count as inside.
pub fn contains_inclusive(rect: Rect, point: Point) -> bool {
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

/// Open containment: edges count as outside.
pub fn contains_strict(rect: Rect, point: Point) -> bool {
    point.x > rect.x0 && point.x < rect.x1 && point.y > rect.y0 && point.y < rect.y1
}

/// True iff `inner` lies strictly inside `outer` on all four sides.
pub fn encloses_strictly(outer: Rect, inner: Rect) -> bool {
    outer.x0 < inner.x0 && outer.y0 < inner.y0 && inner.x1 < outer.x1 && inner.y1 < outer.y1
}

/// Normalize a signed span starting at `start` into `(min, non-negative length)`.
pub fn normalize_span(start: f64, length: f64) -> (f64, f64) {
    if length < 0.0 {
        (start + length, -length)
    } else {
        (start, length)
    }
}

/// Build an open polyline path.
pub fn polyline_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((first, rest)) = points.split_first() else {
        return path;
    };
    path.move_to(*first);
    for p in rest {
        path.line_to(*p);
    }
    path
}

/// Build a closed polygon path.
pub fn polygon_path(points: &[Point]) -> BezPath {
    let mut path = polyline_path(points);
    if points.len() > 2 {
        path.close_path();
    }
    path
}

/// Smooth curve through every point (Catmull-Rom converted to cubic bezier).
pub fn smooth_curve_path(points: &[Point]) -> BezPath {
    if points.len() < 3 {
        return polyline_path(points);
    }

    let mut path = BezPath::new();
    path.move_to(points[0]);

    let tension = 0.5;
    let last = points.len() - 1;
    for i in 0..last {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(last)];

        let t1x = (p2.x - p0.x) * tension;
        let t1y = (p2.y - p0.y) * tension;
        let t2x = (p3.x - p1.x) * tension;
        let t2y = (p3.y - p1.y) * tension;

        let cp1 = Point::new(p1.x + t1x / 3.0, p1.y + t1y / 3.0);
        let cp2 = Point::new(p2.x - t2x / 3.0, p2.y - t2y / 3.0);

        path.curve_to(cp1, cp2, p2);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_area() {
        let area = triangle_area(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        );
        assert!((area - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_triangle_area_orientation_independent() {
        let a = Point::new(3.0, 4.0);
        let b = Point::new(20.0, 7.0);
        let c = Point::new(9.0, 30.0);
        assert!((triangle_area(a, b, c) - triangle_area(c, b, a)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounding_box() {
        let rect = bounding_box(&[
            Point::new(5.0, 50.0),
            Point::new(-10.0, 20.0),
            Point::new(30.0, 0.0),
        ]);
        assert_eq!(rect, Rect::new(-10.0, 0.0, 30.0, 50.0));
        assert_eq!(bounding_box(&[]), Rect::ZERO);
    }

    #[test]
    fn test_containment_edges() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(contains_inclusive(rect, Point::new(10.0, 0.0)));
        assert!(!contains_strict(rect, Point::new(10.0, 5.0)));
        assert!(contains_strict(rect, Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_encloses_strictly() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(encloses_strictly(outer, Rect::new(10.0, 10.0, 90.0, 90.0)));
        assert!(!encloses_strictly(outer, Rect::new(0.0, 10.0, 90.0, 90.0)));
        assert!(!encloses_strictly(outer, Rect::new(50.0, 50.0, 150.0, 90.0)));
    }

    #[test]
    fn test_normalize_span() {
        assert_eq!(normalize_span(10.0, -4.0), (6.0, 4.0));
        assert_eq!(normalize_span(10.0, 4.0), (10.0, 4.0));
    }

    #[test]
    fn test_smooth_curve_has_segment_per_gap() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(20.0, 0.0),
            Point::new(30.0, 5.0),
        ];
        let path = smooth_curve_path(&points);
        // move_to + one curve per gap
        assert_eq!(path.elements().len(), 4);
    }
}
