use std::fmt;

/// Straight-alpha color: 8-bit RGB channels plus an opacity in `[0, 1]`.
///
/// Cloning yields an independent copy; each [`crate::Line`] owns its own.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Opacity, `1.0` when omitted.
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Color {
    /// Fully opaque color.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Set opacity in place and return `self` for chaining.
    pub fn set_alpha(&mut self, a: f64) -> &mut Self {
        self.a = a;
        self
    }

    /// Current opacity.
    pub fn alpha(&self) -> f64 {
        self.a
    }

    /// CSS form, `rgba(r,g,b,a)`, with shortest round-trip number formatting.
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    /// Straight RGBA8, with opacity clamped to `[0, 1]` and rounded.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let a = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        [self.r, self.g, self.b, a]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/color.rs"]
mod tests;
