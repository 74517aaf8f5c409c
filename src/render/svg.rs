use std::fmt::Write as _;

use crate::{
    field::color::Color,
    foundation::error::{LinefieldError, LinefieldResult},
    render::backend::{LineCap, LineRenderer, RenderSettings, Segment},
};

/// Renderer that writes each frame as a standalone SVG document.
///
/// Stroke colors use the CSS `rgba(r,g,b,a)` form from [`Color::to_css`].
#[derive(Clone, Debug, Default)]
pub struct SvgRenderer {
    settings: RenderSettings,
    size: Option<(u32, u32)>,
    body: String,
}

impl SvgRenderer {
    /// Build a renderer; no document exists until the first clear.
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            size: None,
            body: String::new(),
        }
    }

    /// The current frame as a complete SVG document.
    pub fn finish(&self) -> LinefieldResult<String> {
        let (width, height) = self
            .size
            .ok_or_else(|| LinefieldError::render("finish called before clear"))?;
        let mut out = String::with_capacity(self.body.len() + 160);
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )
        .map_err(fmt_err)?;
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        Ok(out)
    }
}

impl LineRenderer for SvgRenderer {
    fn clear(&mut self, width: u32, height: u32) -> LinefieldResult<()> {
        self.size = Some((width, height));
        self.body.clear();
        if let Some([r, g, b, a]) = self.settings.clear_rgba {
            let mut fill = Color::new(r, g, b);
            fill.set_alpha(f64::from(a) / 255.0);
            writeln!(
                self.body,
                r#"  <rect width="{width}" height="{height}" fill="{fill}"/>"#
            )
            .map_err(fmt_err)?;
        }
        Ok(())
    }

    fn stroke_segment(&mut self, segment: &Segment) -> LinefieldResult<()> {
        if self.size.is_none() {
            return Err(LinefieldError::render("stroke before clear"));
        }
        writeln!(
            self.body,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="{}"/>"#,
            segment.from.x,
            segment.from.y,
            segment.to.x,
            segment.to.y,
            segment.color.to_css(),
            segment.width,
            cap_name(segment.cap),
        )
        .map_err(fmt_err)
    }
}

fn cap_name(cap: LineCap) -> &'static str {
    match cap {
        LineCap::Round => "round",
        LineCap::Butt => "butt",
        LineCap::Square => "square",
    }
}

fn fmt_err(e: std::fmt::Error) -> LinefieldError {
    LinefieldError::render(format!("svg write failed: {e}"))
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
