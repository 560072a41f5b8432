//! Renderer trait abstraction.

use kurbo::Size;
use peniko::Color;
use scorepad_core::style::Rgba;
use scorepad_core::workspace::Workspace;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The workspace to render.
    pub workspace: &'a Workspace,
    /// Canvas size in canvas units.
    pub viewport_size: Size,
    /// Background color.
    pub background_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context with a white background.
    pub fn new(workspace: &'a Workspace, viewport_size: Size) -> Self {
        Self {
            workspace,
            viewport_size,
            background_color: Rgba::white().into(),
        }
    }
}

/// Trait for rendering backends.
pub trait Renderer: Send + Sync {
    /// Build the drawing commands for a frame.
    ///
    /// Called once per frame; replaces whatever the previous frame produced.
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()>;

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}
