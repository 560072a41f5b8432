//! Application state: one shape controller and one notation controller.

use crate::controllers::{NotationController, ShapeController};
use crate::input::InputEvent;
use crate::style::StyleChange;
use crate::surface::Surface;
use crate::tools::{Direction, NotationTool, ShapeTool};

/// Which controller receives pointer and selection input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Armed {
    Shapes,
    Notation,
    /// Both tools are `None`; input is ignored.
    Neither,
}

/// Holds both controllers and routes input to whichever one the active tool
/// arms. Choosing a tool in one family disarms the other.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    shapes: ShapeController,
    notation: NotationController,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// The vector-shape controller.
    pub fn shapes(&self) -> &ShapeController {
        &self.shapes
    }

    pub fn shapes_mut(&mut self) -> &mut ShapeController {
        &mut self.shapes
    }

    /// The notation controller.
    pub fn notation(&self) -> &NotationController {
        &self.notation
    }

    pub fn notation_mut(&mut self) -> &mut NotationController {
        &mut self.notation
    }

    /// The shape controller wins while its tool is set, then notation.
    pub fn armed(&self) -> Armed {
        if self.shapes.tool() != ShapeTool::None {
            Armed::Shapes
        } else if self.notation.tool() != NotationTool::None {
            Armed::Notation
        } else {
            Armed::Neither
        }
    }

    /// Arm the shape controller with `tool` and disarm notation.
    pub fn set_shape_tool(&mut self, tool: ShapeTool) {
        self.shapes.set_tool(tool);
        self.notation.set_tool(NotationTool::None);
    }

    /// Arm the notation controller with `tool` and disarm shapes.
    pub fn set_notation_tool(&mut self, tool: NotationTool) {
        self.notation.set_tool(tool);
        self.shapes.set_tool(ShapeTool::None);
    }

    /// Pointer press, routed to the armed controller.
    pub fn press(&mut self, x: i32, y: i32) {
        match self.armed() {
            Armed::Shapes => self.shapes.press(x, y),
            Armed::Notation => self.notation.press(x, y),
            Armed::Neither => {}
        }
    }

    /// Pointer move, routed to the armed controller.
    pub fn pointer_moved(&mut self, x: i32, y: i32) {
        match self.armed() {
            Armed::Shapes => self.shapes.pointer_moved(x, y),
            Armed::Notation => self.notation.pointer_moved(x, y),
            Armed::Neither => {}
        }
    }

    /// Pointer release, routed to the armed controller.
    pub fn release(&mut self, x: i32, y: i32) {
        match self.armed() {
            Armed::Shapes => self.shapes.release(x, y),
            Armed::Notation => self.notation.release(x, y),
            Armed::Neither => {}
        }
    }

    /// Arrow-key nudge for the armed controller's selection.
    pub fn arrow(&mut self, direction: Direction) -> bool {
        match self.armed() {
            Armed::Shapes => self.shapes.arrow(direction),
            Armed::Notation => self.notation.arrow(direction),
            Armed::Neither => false,
        }
    }

    /// Palette edits belong to the shape family: they update its style
    /// snapshot and its selection.
    pub fn apply_style_change(&mut self, change: StyleChange) -> usize {
        self.shapes.apply_style_change(change)
    }

    /// Lock or unlock the armed controller's selection.
    pub fn lock_selection(&mut self, locked: bool) {
        match self.armed() {
            Armed::Shapes => self.shapes.lock_selection(locked),
            Armed::Notation => self.notation.lock_selection(locked),
            Armed::Neither => {}
        }
    }

    /// Delete from the armed controller's selection.
    pub fn delete_selection(&mut self) -> usize {
        match self.armed() {
            Armed::Shapes => self.shapes.delete_selection(),
            Armed::Notation => self.notation.delete_selection(),
            Armed::Neither => 0,
        }
    }

    /// Raise the armed controller's single selection.
    pub fn raise_selection(&mut self) -> bool {
        match self.armed() {
            Armed::Shapes => self.shapes.raise_selection(),
            Armed::Notation => self.notation.raise_selection(),
            Armed::Neither => false,
        }
    }

    /// Lower the armed controller's single selection.
    pub fn lower_selection(&mut self) -> bool {
        match self.armed() {
            Armed::Shapes => self.shapes.lower_selection(),
            Armed::Notation => self.notation.lower_selection(),
            Armed::Neither => false,
        }
    }

    /// Empty both collections.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.notation.clear();
        log::debug!("workspace cleared");
    }

    /// Apply one collaborator event.
    pub fn handle(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Press { x, y } => self.press(*x, *y),
            InputEvent::Move { x, y } => self.pointer_moved(*x, *y),
            InputEvent::Release { x, y } => self.release(*x, *y),
            InputEvent::Arrow { direction } => {
                self.arrow(*direction);
            }
            InputEvent::SetShapeTool { tool } => self.set_shape_tool(*tool),
            InputEvent::SetScoreTool { tool } => self.set_notation_tool(*tool),
            InputEvent::Color(color) => {
                self.apply_style_change(StyleChange::Color(*color));
            }
            InputEvent::Width { width } => {
                self.apply_style_change(StyleChange::Width(*width));
            }
            InputEvent::Fill { filled } => {
                self.apply_style_change(StyleChange::Fill(*filled));
            }
            InputEvent::Lock => self.lock_selection(true),
            InputEvent::Unlock => self.lock_selection(false),
            InputEvent::Delete => {
                self.delete_selection();
            }
            InputEvent::Raise => {
                self.raise_selection();
            }
            InputEvent::Lower => {
                self.lower_selection();
            }
            InputEvent::Glyph { index } => self.notation.set_active_glyph(*index),
            InputEvent::Text { text } => self.notation.set_pending_text(text.clone()),
            InputEvent::Font { family } => self.notation.set_text_font(family.clone()),
            InputEvent::Size { size } => {
                self.notation.set_size(*size);
            }
            InputEvent::Clear => self.clear(),
        }
    }

    /// Paint one frame: shape content and preview, notation content and
    /// preview, then the selection overlay of the controller holding the
    /// select tool.
    pub fn render(&self, surface: &mut dyn Surface) {
        self.shapes.render(surface);
        self.notation.render(surface);
        if self.shapes.tool() == ShapeTool::Select {
            self.shapes.render_overlay(surface);
        } else {
            self.notation.render_overlay(surface);
        }
    }
}
