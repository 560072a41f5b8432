//! Drawing surface abstraction.
//!
//! The core never talks to a windowing or GPU API. It emits paths, fills and
//! text runs into a caller-provided [`Surface`]; the platform layer decides how
//! to rasterize them.

use kurbo::{BezPath, Point, Stroke};
use peniko::Color;

/// A target that drawables paint into.
pub trait Surface {
    /// Stroke the outline of a path.
    fn stroke(&mut self, path: &BezPath, stroke: &Stroke, color: Color);

    /// Fill the interior of a closed path.
    fn fill(&mut self, path: &BezPath, color: Color);

    /// Draw a single run of text with its top-left near `origin`.
    fn text(&mut self, origin: Point, text: &str, font_family: &str, size: f64, color: Color);
}

/// One recorded drawing operation.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Stroke {
        path: BezPath,
        width: f64,
        dashed: bool,
        color: Color,
    },
    Fill {
        path: BezPath,
        color: Color,
    },
    Text {
        origin: Point,
        text: String,
        font_family: String,
        size: f64,
        color: Color,
    },
}

/// A surface that records commands instead of rasterizing them.
///
/// Makes paint order observable in tests.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Dash pattern of the selection overlay pen.
pub const DASH_PATTERN: [f64; 2] = [6.0, 4.0];

impl Surface for DisplayList {
    fn stroke(&mut self, path: &BezPath, stroke: &Stroke, color: Color) {
        self.commands.push(DrawCommand::Stroke {
            path: path.clone(),
            width: stroke.width,
            dashed: !stroke.dash_pattern.is_empty(),
            color,
        });
    }

    fn fill(&mut self, path: &BezPath, color: Color) {
        self.commands.push(DrawCommand::Fill {
            path: path.clone(),
            color,
        });
    }

    fn text(&mut self, origin: Point, text: &str, font_family: &str, size: f64, color: Color) {
        self.commands.push(DrawCommand::Text {
            origin,
            text: text.to_string(),
            font_family: font_family.to_string(),
            size,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Rect, Shape as KurboShape};

    #[test]
    fn test_records_in_order() {
        let mut list = DisplayList::new();
        let path = Rect::new(0.0, 0.0, 10.0, 10.0).to_path(0.1);
        list.fill(&path, Color::from_rgba8(0, 0, 0, 255));
        list.stroke(&path, &Stroke::new(2.0), Color::from_rgba8(0, 0, 0, 255));
        list.text(Point::ZERO, "a", "Arial", 12.0, Color::from_rgba8(0, 0, 0, 255));

        assert_eq!(list.len(), 3);
        assert!(matches!(list.commands()[0], DrawCommand::Fill { .. }));
        assert!(matches!(list.commands()[1], DrawCommand::Stroke { .. }));
        assert!(matches!(list.commands()[2], DrawCommand::Text { .. }));
    }

    #[test]
    fn test_dashed_stroke_recorded() {
        let mut list = DisplayList::new();
        let path = Rect::new(0.0, 0.0, 10.0, 10.0).to_path(0.1);
        list.stroke(
            &path,
            &Stroke::new(2.0).with_dashes(0.0, DASH_PATTERN),
            Color::from_rgba8(0, 0, 0, 255),
        );
        assert!(matches!(list.commands()[0], DrawCommand::Stroke { dashed: true, .. }));
    }
}
