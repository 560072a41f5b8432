//! Controller for music-notation elements.

use super::canvas_point;
use crate::canvas::Canvas;
use crate::geometry::normalize_span;
use crate::shapes::{Drawable, Measure, Shape, Symbol, Text};
use crate::style::{ShapeStyle, StyleChange};
use crate::surface::Surface;
use crate::tools::{Direction, GesturePhase, NotationTool};
use kurbo::Point;

/// Owns the score's element list, the notation tool, the glyph palette and
/// the text-entry state.
#[derive(Debug, Clone)]
pub struct NotationController {
    canvas: Canvas,
    tool: NotationTool,
    /// Single-character glyphs offered by the notation font.
    glyphs: Vec<String>,
    /// Index into `glyphs`; not validated until a symbol is placed.
    active_glyph: usize,
    /// Content for the next text element.
    pending_text: String,
    text_font: String,
}

impl Default for NotationController {
    fn default() -> Self {
        Self::new()
    }
}

impl NotationController {
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(),
            tool: NotationTool::None,
            glyphs: Vec::new(),
            active_glyph: 0,
            pending_text: String::new(),
            text_font: Text::DEFAULT_FONT.to_string(),
        }
    }

    /// The notation list with its selection and gesture state.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn tool(&self) -> NotationTool {
        self.tool
    }

    /// Switch tools. The current selection is dropped.
    pub fn set_tool(&mut self, tool: NotationTool) {
        if self.tool != tool {
            log::debug!("notation tool: {} -> {}", self.tool, tool);
        }
        self.tool = tool;
        self.canvas.deselect();
    }

    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    /// Install the glyphs offered by the symbol tool, in palette order.
    pub fn set_glyph_palette(&mut self, glyphs: Vec<String>) {
        log::debug!("glyph palette holds {} glyph(s)", glyphs.len());
        self.glyphs = glyphs;
    }

    /// Stored unchecked; see [`Self::active_glyph`].
    pub fn set_active_glyph(&mut self, index: usize) {
        self.active_glyph = index;
    }

    /// The glyph new symbols use, if the active index is in range.
    pub fn active_glyph(&self) -> Option<&str> {
        self.glyphs.get(self.active_glyph).map(String::as_str)
    }

    pub fn pending_text(&self) -> &str {
        &self.pending_text
    }

    /// Content of the next text element placed.
    pub fn set_pending_text(&mut self, text: impl Into<String>) {
        self.pending_text = text.into();
    }

    pub fn text_font(&self) -> &str {
        &self.text_font
    }

    pub fn set_text_font(&mut self, font_family: impl Into<String>) {
        self.text_font = font_family.into();
    }

    /// Resize the unlocked members of the selection.
    pub fn set_size(&mut self, size: u32) -> usize {
        self.canvas.restyle(StyleChange::Width(size))
    }

    /// Pointer press: start an element, or pick/marquee with the select tool.
    pub fn press(&mut self, x: i32, y: i32) {
        let point = canvas_point(x, y);
        if self.tool.is_drawing_tool() {
            self.canvas.begin_drawing(point);
        } else if self.tool == NotationTool::Select {
            self.canvas.select_at(point);
        }
    }

    /// Pointer move: grows the preview or drags the selection.
    pub fn pointer_moved(&mut self, x: i32, y: i32) {
        self.canvas.pointer_moved(canvas_point(x, y));
    }

    /// Pointer release: places the element or finishes the marquee.
    pub fn release(&mut self, x: i32, y: i32) {
        if self.canvas.pointer_released(canvas_point(x, y)) != GesturePhase::Drawing {
            return;
        }
        let gesture = *self.canvas.gesture();
        match self.element_for(gesture.origin, gesture.current) {
            Some(shape) => {
                self.canvas.push(Drawable::new(shape, ShapeStyle::notation()));
            }
            None => log::warn!("nothing to place for the {} tool", self.tool),
        }
    }

    /// Arrow-key nudge; only the select tool reacts.
    pub fn arrow(&mut self, direction: Direction) -> bool {
        self.tool == NotationTool::Select && self.canvas.nudge(direction)
    }

    pub fn lock_selection(&mut self, locked: bool) {
        self.canvas.set_locked(locked);
    }

    /// Remove the unlocked selected elements; returns how many went.
    pub fn delete_selection(&mut self) -> usize {
        self.canvas.delete_selected()
    }

    pub fn raise_selection(&mut self) -> bool {
        self.canvas.bring_forward()
    }

    pub fn lower_selection(&mut self) -> bool {
        self.canvas.send_backward()
    }

    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    fn element_for(&self, origin: Point, current: Point) -> Option<Shape> {
        match self.tool {
            NotationTool::Measure => {
                let (x, length) = normalize_span(origin.x, current.x - origin.x);
                Some(Measure::new(Point::new(x, origin.y), length).into())
            }
            NotationTool::Symbol => {
                let (corner, size) = Self::square_cell(origin, current);
                let glyph = match self.active_glyph() {
                    Some(glyph) => glyph.to_string(),
                    None => {
                        log::warn!(
                            "glyph index {} outside palette of {}",
                            self.active_glyph,
                            self.glyphs.len()
                        );
                        String::new()
                    }
                };
                Some(Symbol::new(corner, size, glyph).into())
            }
            NotationTool::Text => {
                if self.pending_text.is_empty() {
                    return None;
                }
                let (corner, size) = Self::square_cell(origin, current);
                Some(
                    Text::new(corner, size, self.pending_text.clone())
                        .with_font(self.text_font.clone())
                        .into(),
                )
            }
            NotationTool::None | NotationTool::Select => None,
        }
    }

    /// Glyph cells are sized by the vertical drag distance.
    fn square_cell(origin: Point, current: Point) -> (Point, f64) {
        let (y, size) = normalize_span(origin.y, current.y - origin.y);
        (Point::new(origin.x, y), size)
    }

    /// The element the current drawing gesture would place.
    pub fn preview(&self) -> Option<Drawable> {
        let gesture = self.canvas.gesture();
        if !gesture.is(GesturePhase::Drawing) {
            return None;
        }
        self.element_for(gesture.origin, gesture.current)
            .map(|shape| Drawable::new(shape, ShapeStyle::notation()))
    }

    /// Stored elements, then the in-progress preview.
    pub fn render(&self, surface: &mut dyn Surface) {
        self.canvas.render_content(surface);
        if let Some(preview) = self.preview() {
            preview.render(surface);
        }
    }

    /// Selection outline, drawn only while the select tool is active.
    pub fn render_overlay(&self, surface: &mut dyn Surface) {
        if self.tool == NotationTool::Select {
            self.canvas.render_overlay(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Frame;
    use crate::surface::{DisplayList, DrawCommand};
    use kurbo::Rect;

    const CLEF: &str = "\u{E050}";
    const NOTEHEAD: &str = "\u{E0A4}";

    fn controller(tool: NotationTool) -> NotationController {
        let mut controller = NotationController::new();
        controller.set_glyph_palette(vec![CLEF.to_string(), NOTEHEAD.to_string()]);
        controller.set_tool(tool);
        controller
    }

    fn drag(controller: &mut NotationController, from: (i32, i32), to: (i32, i32)) {
        controller.press(from.0, from.1);
        controller.pointer_moved(to.0, to.1);
        controller.release(to.0, to.1);
    }

    fn frame(controller: &NotationController, index: usize) -> Frame {
        controller.canvas().drawables()[index].frame()
    }

    #[test]
    fn test_measure_from_drag() {
        let mut score = controller(NotationTool::Measure);
        drag(&mut score, (20, 40), (220, 90));

        let frame = frame(&score, 0);
        assert_eq!(frame.corner, Point::new(20.0, 40.0));
        assert!((frame.length - 200.0).abs() < f64::EPSILON);
        assert!((frame.height - Measure::DEFAULT_HEIGHT).abs() < f64::EPSILON);
    }

    #[test]
    fn test_measure_dragged_left() {
        let mut score = controller(NotationTool::Measure);
        drag(&mut score, (220, 40), (20, 40));
        assert_eq!(frame(&score, 0).corner, Point::new(20.0, 40.0));
    }

    #[test]
    fn test_symbol_uses_active_glyph() {
        let mut score = controller(NotationTool::Symbol);
        score.set_active_glyph(1);
        drag(&mut score, (10, 10), (10, 40));

        let Shape::Symbol(symbol) = score.canvas().drawables()[0].shape() else {
            panic!("expected a symbol");
        };
        assert_eq!(symbol.glyph, NOTEHEAD);
        assert!((symbol.size - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_symbol_with_out_of_range_glyph() {
        let mut score = controller(NotationTool::Symbol);
        score.set_active_glyph(9);
        assert!(score.active_glyph().is_none());
        drag(&mut score, (10, 10), (10, 40));

        let Shape::Symbol(symbol) = score.canvas().drawables()[0].shape() else {
            panic!("expected a symbol");
        };
        assert!(symbol.glyph.is_empty());
    }

    #[test]
    fn test_text_uses_pending_text_and_font() {
        let mut score = controller(NotationTool::Text);
        score.set_pending_text("Andante");
        score.set_text_font("Georgia");
        drag(&mut score, (50, 50), (50, 74));

        let Shape::Text(text) = score.canvas().drawables()[0].shape() else {
            panic!("expected a text element");
        };
        assert_eq!(text.content, "Andante");
        assert_eq!(text.font_family, "Georgia");
        assert!((text.size - 24.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_text_without_content_places_nothing() {
        let mut score = controller(NotationTool::Text);
        drag(&mut score, (50, 50), (50, 74));
        assert!(score.canvas().is_empty());
    }

    #[test]
    fn test_set_size_resizes_selection() {
        let mut score = controller(NotationTool::Measure);
        drag(&mut score, (0, 0), (100, 0));
        assert_eq!(score.set_size(10), 1);
        assert!((frame(&score, 0).height - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_is_strict_on_edges() {
        let mut score = controller(NotationTool::Measure);
        drag(&mut score, (10, 10), (110, 10));
        score.set_tool(NotationTool::Select);

        score.press(10, 20);
        score.release(10, 20);
        assert!(score.canvas().selection().is_empty());

        score.press(50, 20);
        score.release(50, 20);
        assert_eq!(score.canvas().selection().single(), Some(0));
    }

    #[test]
    fn test_marquee_and_nudge() {
        let mut score = controller(NotationTool::Symbol);
        drag(&mut score, (10, 10), (10, 30));
        drag(&mut score, (40, 10), (40, 30));
        score.set_tool(NotationTool::Select);
        drag(&mut score, (0, 0), (100, 100));
        assert_eq!(score.canvas().selection().len(), 2);

        assert!(score.arrow(Direction::Left));
        assert_eq!(frame(&score, 0).corner, Point::new(9.0, 10.0));
        assert_eq!(frame(&score, 1).corner, Point::new(39.0, 10.0));
    }

    #[test]
    fn test_lock_protects_from_delete() {
        let mut score = controller(NotationTool::Measure);
        drag(&mut score, (0, 0), (100, 0));
        score.lock_selection(true);
        assert_eq!(score.delete_selection(), 0);
        score.lock_selection(false);
        assert_eq!(score.delete_selection(), 1);
        assert!(score.canvas().is_empty());
    }

    #[test]
    fn test_preview_while_drawing() {
        let mut score = controller(NotationTool::Measure);
        score.press(0, 0);
        score.pointer_moved(80, 0);
        assert_eq!(
            score.preview().map(|d| d.bounds()),
            Some(Rect::new(0.0, 0.0, 80.0, Measure::DEFAULT_HEIGHT))
        );

        let mut list = DisplayList::new();
        score.render(&mut list);
        assert_eq!(list.len(), 7);
        assert!(score.canvas().is_empty());
    }

    #[test]
    fn test_elements_paint_black() {
        let mut score = controller(NotationTool::Symbol);
        drag(&mut score, (10, 10), (10, 30));

        let mut list = DisplayList::new();
        score.render(&mut list);
        let DrawCommand::Text { color, .. } = &list.commands()[0] else {
            panic!("expected a text command");
        };
        let rgba = color.to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (0, 0, 0, 255));
    }
}
