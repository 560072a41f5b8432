//! Input events delivered by the platform collaborator.
//!
//! Every call the collaborator can make against a
//! [`Workspace`](crate::workspace::Workspace) has an event form, so input can
//! be recorded, scripted and replayed.

use crate::style::Rgba;
use crate::tools::{Direction, NotationTool, ShapeTool};
use serde::{Deserialize, Serialize};

/// One collaborator call. Coordinates are integer canvas units, origin
/// top-left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum InputEvent {
    Press { x: i32, y: i32 },
    Move { x: i32, y: i32 },
    Release { x: i32, y: i32 },
    Arrow { direction: Direction },
    SetShapeTool { tool: ShapeTool },
    SetScoreTool { tool: NotationTool },
    /// Palette colour edit.
    Color(Rgba),
    /// Palette stroke-width edit.
    Width { width: u32 },
    /// Palette fill checkbox.
    Fill { filled: bool },
    Lock,
    Unlock,
    Delete,
    Raise,
    Lower,
    /// Pick a glyph from the notation palette.
    Glyph { index: usize },
    Text { text: String },
    Font { family: String },
    /// Notation size slider.
    Size { size: u32 },
    Clear,
}
