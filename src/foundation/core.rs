use crate::foundation::error::{LinefieldError, LinefieldResult};

pub use kurbo::{Point, Vec2};

/// Pixel dimensions of a drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Surface {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Surface {
    /// Build a surface of `width` x `height` pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Midpoint of the bottom edge.
    pub fn bottom_center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height))
    }
}

/// Multiplier from logical units into the higher-resolution simulation space.
///
/// Stroke widths, step sizes and length bounds are multiplied by this factor before use, and the
/// surface handed to renderers is the logical surface scaled by the same factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolutionScale(f64);

impl ResolutionScale {
    /// The factor used when none is given explicitly.
    pub const DEFAULT: Self = Self(10.0);

    /// Validate and wrap a scale factor. It must be finite and strictly positive.
    pub fn new(factor: f64) -> LinefieldResult<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(LinefieldError::config(format!(
                "resolution scale must be finite and > 0, got {factor}"
            )));
        }
        Ok(Self(factor))
    }

    /// The raw multiplier.
    pub fn factor(self) -> f64 {
        self.0
    }

    /// Scale a linear quantity.
    pub fn apply(self, v: f64) -> f64 {
        v * self.0
    }

    /// Scale logical surface dimensions into simulation pixels (rounded to nearest).
    pub fn surface(self, logical: Surface) -> LinefieldResult<Surface> {
        let scale_dim = |v: u32, what: &str| -> LinefieldResult<u32> {
            let scaled = (f64::from(v) * self.0).round();
            if scaled > f64::from(u32::MAX) {
                return Err(LinefieldError::config(format!(
                    "scaled surface {what} {scaled} exceeds u32"
                )));
            }
            Ok(scaled as u32)
        };
        Ok(Surface {
            width: scale_dim(logical.width, "width")?,
            height: scale_dim(logical.height, "height")?,
        })
    }
}

impl Default for ResolutionScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
