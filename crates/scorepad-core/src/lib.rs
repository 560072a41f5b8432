//! ScorePad Core Library
//!
//! Drawable model and selection engine for the ScorePad canvas: vector shapes
//! and music-notation elements, hit and region tests, the click/drag/marquee
//! state machine, z-order, lock and restyle operations, and a platform-free
//! render pass.

pub mod canvas;
pub mod controllers;
pub mod geometry;
pub mod input;
pub mod selection;
pub mod shapes;
pub mod style;
pub mod surface;
pub mod tools;
pub mod workspace;

pub use canvas::Canvas;
pub use controllers::{NotationController, ShapeController};
pub use input::InputEvent;
pub use selection::Selection;
pub use shapes::{Drawable, Frame, Shape};
pub use style::{Rgba, ShapeStyle, StyleChange};
pub use surface::{DisplayList, DrawCommand, Surface};
pub use tools::{Direction, Gesture, GesturePhase, NotationTool, ParseToolError, ShapeTool};
pub use workspace::{Armed, Workspace};
