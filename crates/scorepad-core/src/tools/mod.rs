//! Authoring tools and gesture state.

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a tool or direction name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseToolError {
    #[error("unknown shape tool: {0}")]
    ShapeTool(String),
    #[error("unknown notation tool: {0}")]
    NotationTool(String),
    #[error("unknown direction: {0}")]
    Direction(String),
}

/// Tools of the free-form drawing controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShapeTool {
    #[default]
    None,
    Line,
    Rect,
    Ellipse,
    Triangle,
    Freehand,
    Select,
}

impl ShapeTool {
    /// Whether a press with this tool starts drawing a new shape.
    pub fn is_drawing_tool(self) -> bool {
        !matches!(self, ShapeTool::None | ShapeTool::Select)
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeTool::None => "none",
            ShapeTool::Line => "line",
            ShapeTool::Rect => "rect",
            ShapeTool::Ellipse => "ellipse",
            ShapeTool::Triangle => "triangle",
            ShapeTool::Freehand => "freehand",
            ShapeTool::Select => "select",
        }
    }
}

impl fmt::Display for ShapeTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeTool {
    type Err = ParseToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(ShapeTool::None),
            "line" => Ok(ShapeTool::Line),
            "rect" | "rectangle" => Ok(ShapeTool::Rect),
            "ellipse" => Ok(ShapeTool::Ellipse),
            "triangle" => Ok(ShapeTool::Triangle),
            "freehand" | "sketch" => Ok(ShapeTool::Freehand),
            "select" => Ok(ShapeTool::Select),
            _ => Err(ParseToolError::ShapeTool(s.to_string())),
        }
    }
}

/// Tools of the notation controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NotationTool {
    #[default]
    None,
    Measure,
    Symbol,
    Text,
    Select,
}

impl NotationTool {
    /// Whether a press with this tool starts placing a new element.
    pub fn is_drawing_tool(self) -> bool {
        !matches!(self, NotationTool::None | NotationTool::Select)
    }

    pub fn name(self) -> &'static str {
        match self {
            NotationTool::None => "none",
            NotationTool::Measure => "measure",
            NotationTool::Symbol => "symbol",
            NotationTool::Text => "text",
            NotationTool::Select => "select",
        }
    }
}

impl fmt::Display for NotationTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NotationTool {
    type Err = ParseToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(NotationTool::None),
            "measure" => Ok(NotationTool::Measure),
            "symbol" => Ok(NotationTool::Symbol),
            "text" => Ok(NotationTool::Text),
            "select" => Ok(NotationTool::Select),
            _ => Err(ParseToolError::NotationTool(s.to_string())),
        }
    }
}

/// Arrow-key nudge direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Down,
    Right,
    Up,
}

impl Direction {
    /// One-unit step in canvas coordinates (y grows downward).
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Up => Vec2::new(0.0, -1.0),
        }
    }
}

impl FromStr for Direction {
    type Err = ParseToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "down" => Ok(Direction::Down),
            "right" => Ok(Direction::Right),
            "up" => Ok(Direction::Up),
            _ => Err(ParseToolError::Direction(s.to_string())),
        }
    }
}

/// What the pointer is currently doing. At most one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    /// Creating a new drawable.
    Drawing,
    /// Moving the single selected drawable.
    Dragging,
    /// Sizing a marquee rectangle.
    Marquee,
}

/// Pointer gesture state shared by both controllers.
///
/// `origin` and `current` outlive the gesture itself: after a marquee they
/// still describe the selection rectangle that arrow-key nudges shift.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Gesture {
    pub phase: GesturePhase,
    pub origin: Point,
    pub current: Point,
}

impl Gesture {
    /// Start a gesture at `point`.
    pub fn begin(&mut self, phase: GesturePhase, point: Point) {
        self.phase = phase;
        self.origin = point;
        self.current = point;
    }

    /// Update the moving corner.
    pub fn update(&mut self, point: Point) {
        self.current = point;
    }

    /// Return to idle, keeping the last rectangle.
    pub fn end(&mut self) {
        self.phase = GesturePhase::Idle;
    }

    pub fn is(&self, phase: GesturePhase) -> bool {
        self.phase == phase
    }

    /// Shift the remembered rectangle.
    pub fn shift(&mut self, delta: Vec2) {
        self.origin += delta;
        self.current += delta;
    }

    /// The origin/current rectangle with normalized corners.
    pub fn rect(&self) -> Rect {
        Rect::from_points(self.origin, self.current)
    }
}
