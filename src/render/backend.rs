use crate::{
    field::color::Color,
    foundation::{core::Point, error::LinefieldResult},
};

/// How the ends of a stroked segment are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Semicircular caps extending half a stroke width past each end.
    #[default]
    Round,
    /// Flat caps flush with the end points.
    Butt,
    /// Square caps extending half a stroke width past each end.
    Square,
}

/// One stroked straight segment.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// Start point in surface pixels.
    pub from: Point,
    /// End point in surface pixels.
    pub to: Point,
    /// Stroke color (straight alpha).
    pub color: Color,
    /// Stroke width in surface pixels.
    pub width: f64,
    /// End cap style.
    pub cap: LineCap,
}

/// Drawing surface a [`crate::LineSet`] renders into.
///
/// Each frame is one [`LineRenderer::clear`] followed by zero or more
/// [`LineRenderer::stroke_segment`] calls. Dimensions arrive with every clear; implementations
/// must not look them up elsewhere.
pub trait LineRenderer {
    /// Start a new frame of `width` x `height` pixels, discarding previous content.
    fn clear(&mut self, width: u32, height: u32) -> LinefieldResult<()>;

    /// Stroke `segment` on top of the current frame.
    fn stroke_segment(&mut self, segment: &Segment) -> LinefieldResult<()>;
}

impl<T: LineRenderer + ?Sized> LineRenderer for &mut T {
    fn clear(&mut self, width: u32, height: u32) -> LinefieldResult<()> {
        (**self).clear(width, height)
    }

    fn stroke_segment(&mut self, segment: &Segment) -> LinefieldResult<()> {
        (**self).stroke_segment(segment)
    }
}

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// The four bytes of pixel `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Backend-agnostic settings.
#[derive(Clone, Debug, Default)]
pub struct RenderSettings {
    /// If set, renderers fill each cleared frame with this straight RGBA8 color.
    pub clear_rgba: Option<[u8; 4]>,
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
