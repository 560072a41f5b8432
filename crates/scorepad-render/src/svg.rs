//! SVG backend.

use crate::renderer::{RenderContext, RenderResult, Renderer, RendererError};
use kurbo::{BezPath, Point, Stroke};
use peniko::Color;
use scorepad_core::surface::Surface;
use std::path::Path;

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// `rgb(...)` plus the alpha channel as an opacity fraction.
fn svg_color(color: Color) -> (String, f64) {
    let rgba = color.to_rgba8();
    (
        format!("rgb({},{},{})", rgba.r, rgba.g, rgba.b),
        f64::from(rgba.a) / 255.0,
    )
}

/// A [`Surface`] that accumulates SVG elements.
#[derive(Debug, Default)]
pub struct SvgSurface {
    body: String,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The elements written so far, without the document wrapper.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn clear(&mut self) {
        self.body.clear();
    }

    fn push_element(&mut self, element: String) {
        self.body.push_str(&element);
        self.body.push('\n');
    }

    fn background(&mut self, width: f64, height: f64, color: Color) {
        let (fill, opacity) = svg_color(color);
        self.push_element(format!(
            r#"<rect x="0" y="0" width="{width}" height="{height}" fill="{fill}" fill-opacity="{opacity}"/>"#
        ));
    }
}

impl Surface for SvgSurface {
    fn stroke(&mut self, path: &BezPath, stroke: &Stroke, color: Color) {
        let (paint, opacity) = svg_color(color);
        let mut attributes = format!(
            r#"fill="none" stroke="{paint}" stroke-opacity="{opacity}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round""#,
            stroke.width
        );
        if !stroke.dash_pattern.is_empty() {
            let pattern: Vec<String> = stroke.dash_pattern.iter().map(|d| d.to_string()).collect();
            attributes.push_str(&format!(r#" stroke-dasharray="{}""#, pattern.join(",")));
        }
        self.push_element(format!(r#"<path d="{}" {attributes}/>"#, path.to_svg()));
    }

    fn fill(&mut self, path: &BezPath, color: Color) {
        let (paint, opacity) = svg_color(color);
        self.push_element(format!(
            r#"<path d="{}" fill="{paint}" fill-opacity="{opacity}"/>"#,
            path.to_svg()
        ));
    }

    fn text(&mut self, origin: Point, text: &str, font_family: &str, size: f64, color: Color) {
        let (paint, opacity) = svg_color(color);
        self.push_element(format!(
            r#"<text x="{}" y="{}" font-family="{}" font-size="{size}" fill="{paint}" fill-opacity="{opacity}" dominant-baseline="text-before-edge">{}</text>"#,
            origin.x,
            origin.y,
            escape_xml(font_family),
            escape_xml(text)
        ));
    }
}

/// Renders a workspace into a standalone SVG document.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    surface: SvgSurface,
    width: f64,
    height: f64,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last built frame as a complete SVG document.
    pub fn document(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.surface.body()
        )
    }

    /// Write the last built frame to `path`.
    pub fn save(&self, path: &Path) -> RenderResult<()> {
        std::fs::write(path, self.document())?;
        log::info!("wrote {}", path.display());
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        let size = ctx.viewport_size;
        if !(size.width > 0.0 && size.height > 0.0) {
            return Err(RendererError::RenderFailed(format!(
                "invalid canvas size {}x{}",
                size.width, size.height
            )));
        }
        self.width = size.width;
        self.height = size.height;
        self.surface.clear();
        self.surface
            .background(size.width, size.height, self.background_color(ctx));
        ctx.workspace.render(&mut self.surface);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;
    use scorepad_core::tools::{NotationTool, ShapeTool};
    use scorepad_core::workspace::Workspace;

    fn drag(workspace: &mut Workspace, from: (i32, i32), to: (i32, i32)) {
        workspace.press(from.0, from.1);
        workspace.pointer_moved(to.0, to.1);
        workspace.release(to.0, to.1);
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_svg_color() {
        let (paint, opacity) = svg_color(Color::from_rgba8(10, 20, 30, 255));
        assert_eq!(paint, "rgb(10,20,30)");
        assert!((opacity - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_dashed_stroke() {
        let mut surface = SvgSurface::new();
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        surface.stroke(&path, &Stroke::new(2.0).with_dashes(0.0, [6.0, 4.0]), Color::BLACK);
        assert!(surface.body().contains(r#"stroke-dasharray="6,4""#));
        assert!(surface.body().contains(r#"stroke-width="2""#));
    }

    #[test]
    fn test_build_scene() {
        let mut workspace = Workspace::new();
        workspace.set_shape_tool(ShapeTool::Rect);
        drag(&mut workspace, (10, 10), (60, 40));
        workspace.notation_mut().set_pending_text("Fine & dandy");
        workspace.set_notation_tool(NotationTool::Text);
        drag(&mut workspace, (100, 100), (100, 124));

        let mut renderer = SvgRenderer::new();
        renderer
            .build_scene(&RenderContext::new(&workspace, Size::new(400.0, 300.0)))
            .unwrap();

        let document = renderer.document();
        assert!(document.starts_with("<svg"));
        assert!(document.contains(r#"viewBox="0 0 400 300""#));
        assert!(document.contains(r#"fill="rgb(255,255,255)""#));
        assert!(document.contains("<path"));
        assert!(document.contains("Fine &amp; dandy"));
        assert!(document.contains(r#"font-family="Arial""#));
    }

    #[test]
    fn test_rebuild_replaces_previous_frame() {
        let workspace = Workspace::new();
        let mut renderer = SvgRenderer::new();
        let ctx = RenderContext::new(&workspace, Size::new(100.0, 100.0));
        renderer.build_scene(&ctx).unwrap();
        renderer.build_scene(&ctx).unwrap();
        assert_eq!(renderer.document().matches("<rect").count(), 1);
    }

    #[test]
    fn test_empty_size_is_rejected() {
        let workspace = Workspace::new();
        let mut renderer = SvgRenderer::new();
        let result = renderer.build_scene(&RenderContext::new(&workspace, Size::new(0.0, 100.0)));
        assert!(matches!(result, Err(RendererError::RenderFailed(_))));
    }

    #[test]
    fn test_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.svg");

        let workspace = Workspace::new();
        let mut renderer = SvgRenderer::new();
        renderer
            .build_scene(&RenderContext::new(&workspace, Size::new(50.0, 50.0)))
            .unwrap();
        renderer.save(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, renderer.document());
    }
}
