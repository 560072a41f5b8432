//! ScorePad Render Library
//!
//! Frame composition for a ScorePad workspace and an SVG implementation of
//! the core drawing surface.

mod renderer;
mod svg;

pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};
pub use svg::{SvgRenderer, SvgSurface};
