use crate::{
    foundation::{
        core::Point,
        error::{LinefieldError, LinefieldResult},
    },
    render::backend::{FrameRGBA, LineCap, LineRenderer, RenderSettings, Segment},
};

/// Raster renderer powered by `vello_cpu`.
///
/// Strokes are recorded into a render context on each [`LineRenderer::clear`]; pixels are only
/// produced by [`CpuRenderer::finish`], so stepping without reading frames back stays cheap.
pub struct CpuRenderer {
    settings: RenderSettings,
    frame: Option<CpuFrame>,
}

struct CpuFrame {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl CpuRenderer {
    /// Build a renderer; no surface exists until the first clear.
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            frame: None,
        }
    }

    /// Rasterize the current frame into premultiplied RGBA8 and end it.
    pub fn finish(&mut self) -> LinefieldResult<FrameRGBA> {
        let mut frame = self
            .frame
            .take()
            .ok_or_else(|| LinefieldError::render("finish called before clear"))?;
        frame.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(frame.width, frame.height);
        frame.ctx.render_to_pixmap(&mut pixmap);
        Ok(FrameRGBA {
            width: u32::from(frame.width),
            height: u32::from(frame.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

impl LineRenderer for CpuRenderer {
    fn clear(&mut self, width: u32, height: u32) -> LinefieldResult<()> {
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| LinefieldError::render("surface width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| LinefieldError::render("surface height exceeds u16"))?;
        if width_u16 == 0 || height_u16 == 0 {
            return Err(LinefieldError::render(format!(
                "surface must be non-empty, got {width}x{height}"
            )));
        }

        let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
        if let Some([r, g, b, a]) = self.settings.clear_rgba {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(width_u16),
                f64::from(height_u16),
            ));
        }
        self.frame = Some(CpuFrame {
            width: width_u16,
            height: height_u16,
            ctx,
        });
        Ok(())
    }

    fn stroke_segment(&mut self, segment: &Segment) -> LinefieldResult<()> {
        let frame = self
            .frame
            .as_mut()
            .ok_or_else(|| LinefieldError::render("stroke before clear"))?;

        let [r, g, b, a] = segment.color.to_rgba8();
        frame
            .ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        frame.ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(segment.width).with_caps(cap_to_cpu(segment.cap)),
        );

        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(point_to_cpu(segment.from));
        path.line_to(point_to_cpu(segment.to));
        frame.ctx.stroke_path(&path);
        Ok(())
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn cap_to_cpu(cap: LineCap) -> vello_cpu::kurbo::Cap {
    match cap {
        LineCap::Round => vello_cpu::kurbo::Cap::Round,
        LineCap::Butt => vello_cpu::kurbo::Cap::Butt,
        LineCap::Square => vello_cpu::kurbo::Cap::Square,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
