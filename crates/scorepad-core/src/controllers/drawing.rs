//! Controller for free-form vector shapes.

use super::canvas_point;
use crate::canvas::Canvas;
use crate::shapes::{Drawable, Ellipse, Freehand, Line, Rectangle, Shape, Triangle};
use crate::style::{ShapeStyle, StyleChange};
use crate::surface::Surface;
use crate::tools::{Direction, GesturePhase, ShapeTool};
use kurbo::Point;

/// Owns the shape list, the active shape tool and the palette's style
/// snapshot.
#[derive(Debug, Clone, Default)]
pub struct ShapeController {
    canvas: Canvas,
    tool: ShapeTool,
    style: ShapeStyle,
    /// Points of the freehand stroke being drawn.
    stroke_points: Vec<Point>,
}

impl ShapeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shape list with its selection and gesture state.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The active shape tool.
    pub fn tool(&self) -> ShapeTool {
        self.tool
    }

    /// Switch tools. The current selection is dropped.
    pub fn set_tool(&mut self, tool: ShapeTool) {
        if self.tool != tool {
            log::debug!("shape tool: {} -> {}", self.tool, tool);
        }
        self.tool = tool;
        self.canvas.deselect();
        self.stroke_points.clear();
    }

    /// Style stamped onto the next shape drawn.
    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    /// Replace the snapshot stamped onto new shapes. Existing shapes keep
    /// their style.
    pub fn set_style(&mut self, style: ShapeStyle) {
        self.style = style;
    }

    /// A property-panel edit: update the snapshot and push the value into
    /// the selection.
    pub fn apply_style_change(&mut self, change: StyleChange) -> usize {
        change.apply_to(&mut self.style);
        self.canvas.restyle(change)
    }

    /// Pointer press: start a shape, or pick/marquee with the select tool.
    pub fn press(&mut self, x: i32, y: i32) {
        let point = canvas_point(x, y);
        if self.tool.is_drawing_tool() {
            self.canvas.begin_drawing(point);
            self.stroke_points.clear();
            if self.tool == ShapeTool::Freehand {
                self.stroke_points.push(point);
            }
        } else if self.tool == ShapeTool::Select {
            if let Some(picked) = self.canvas.select_at(point).and_then(|index| self.canvas.get(index)) {
                // Palette shows the picked shape's style
                self.style = *picked.style();
            }
        }
    }

    /// Pointer move: grows the preview, extends a freehand stroke or drags.
    pub fn pointer_moved(&mut self, x: i32, y: i32) {
        let point = canvas_point(x, y);
        self.canvas.pointer_moved(point);
        if self.tool == ShapeTool::Freehand && self.canvas.gesture().is(GesturePhase::Drawing) {
            self.stroke_points.push(point);
        }
    }

    /// Pointer release: commits the drawn shape or finishes the marquee.
    pub fn release(&mut self, x: i32, y: i32) {
        let point = canvas_point(x, y);
        let drawing = self.canvas.gesture().is(GesturePhase::Drawing);
        if drawing && self.tool == ShapeTool::Freehand && self.stroke_points.last() != Some(&point) {
            self.stroke_points.push(point);
        }

        if self.canvas.pointer_released(point) != GesturePhase::Drawing {
            return;
        }
        let points = std::mem::take(&mut self.stroke_points);
        let gesture = *self.canvas.gesture();
        if let Some(shape) = self.shape_for(gesture.origin, gesture.current, points) {
            self.canvas.push(Drawable::new(shape, self.style));
        }
    }

    /// Arrow-key nudge; only the select tool reacts.
    pub fn arrow(&mut self, direction: Direction) -> bool {
        self.tool == ShapeTool::Select && self.canvas.nudge(direction)
    }

    /// Set or clear the lock flag on every selected shape.
    pub fn lock_selection(&mut self, locked: bool) {
        self.canvas.set_locked(locked);
    }

    /// Remove the unlocked selected shapes; returns how many went.
    pub fn delete_selection(&mut self) -> usize {
        self.canvas.delete_selected()
    }

    /// Move the single selection one step toward the top.
    pub fn raise_selection(&mut self) -> bool {
        self.canvas.bring_forward()
    }

    /// Move the single selection one step toward the bottom.
    pub fn lower_selection(&mut self) -> bool {
        self.canvas.send_backward()
    }

    /// Drop every shape and any stroke in progress.
    pub fn clear(&mut self) {
        self.canvas.clear();
        self.stroke_points.clear();
    }

    fn shape_for(&self, origin: Point, current: Point, points: Vec<Point>) -> Option<Shape> {
        let shape = match self.tool {
            ShapeTool::Line => Line::new(origin, current).into(),
            ShapeTool::Rect => Rectangle::from_corners(origin, current).into(),
            ShapeTool::Ellipse => Ellipse::from_corners(origin, current).into(),
            ShapeTool::Triangle => Triangle::from_drag(origin, current).into(),
            ShapeTool::Freehand => Freehand::from_points(points).into(),
            ShapeTool::None | ShapeTool::Select => return None,
        };
        Some(shape)
    }

    /// The shape the current drawing gesture would create.
    pub fn preview(&self) -> Option<Drawable> {
        let gesture = self.canvas.gesture();
        if !gesture.is(GesturePhase::Drawing) {
            return None;
        }
        self.shape_for(gesture.origin, gesture.current, self.stroke_points.clone())
            .map(|shape| Drawable::new(shape, self.style))
    }

    /// Stored shapes, then the in-progress preview.
    pub fn render(&self, surface: &mut dyn Surface) {
        self.canvas.render_content(surface);
        if let Some(preview) = self.preview() {
            preview.render(surface);
        }
    }

    /// Selection outline, drawn only while the select tool is active.
    pub fn render_overlay(&self, surface: &mut dyn Surface) {
        if self.tool == ShapeTool::Select {
            self.canvas.render_overlay(surface);
        }
    }
}
