use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    field::{color::Color, direction::Direction},
    foundation::{
        core::{Point, Surface, Vec2},
        error::{LinefieldError, LinefieldResult},
    },
};

/// Construction-time options for a [`crate::LineSet`].
///
/// Every field is independently defaulted; JSON input may omit any of them. Linear quantities
/// (`stroke_width`, step sizes, `shortest`, `longest`) are in logical units and get multiplied by
/// the set's [`crate::ResolutionScale`]. `origin` is already in surface pixels and is not scaled.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LineSetConfig {
    /// Number of lines.
    pub count: usize,
    /// Stroke width, also the spacing between neighbouring lines.
    pub stroke_width: f64,
    /// Lower bound for a line's per-tick speed.
    pub min_step_size: f64,
    /// Upper bound for a line's per-tick speed.
    pub max_step_size: f64,
    /// Lower bound for lengths.
    pub shortest: f64,
    /// Upper bound for lengths.
    pub longest: f64,
    /// Base color; each line gets a copy with a random opacity. Required.
    pub color: Option<Color>,
    /// Anchor the row of lines is centered on.
    pub origin: Point,
    /// Direction every line extends in; normalized at construction.
    pub direction: Vec2,
}

impl Default for LineSetConfig {
    fn default() -> Self {
        Self {
            count: 10,
            stroke_width: 4.0,
            min_step_size: 1.0,
            max_step_size: 1.0,
            shortest: 10.0,
            longest: 100.0,
            color: None,
            origin: Point::ZERO,
            direction: Vec2::new(1.0, 1.0),
        }
    }
}

impl LineSetConfig {
    /// Largest accepted `count`.
    pub const MAX_COUNT: usize = 1 << 20;

    /// The stock look: 300 thin violet lines rising from the bottom center of `surface`.
    ///
    /// `surface` is the scaled surface the lines are drawn on.
    pub fn demo(surface: Surface) -> Self {
        Self {
            count: 300,
            stroke_width: 1.0,
            min_step_size: 0.05,
            max_step_size: 0.1,
            shortest: 0.0,
            longest: 10.0,
            color: Some(Color::new(150, 5, 150)),
            origin: surface.bottom_center(),
            direction: Vec2::new(0.0, -1.0),
        }
    }

    /// Parse from a JSON string.
    pub fn from_json_str(s: &str) -> LinefieldResult<Self> {
        serde_json::from_str(s).map_err(|e| LinefieldError::serde(e.to_string()))
    }

    /// Read and parse a JSON file.
    pub fn from_path(path: &Path) -> LinefieldResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            LinefieldError::serde(format!("parse config '{}': {e}", path.display()))
        })
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> LinefieldResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| LinefieldError::serde(e.to_string()))
    }

    /// Check everything construction relies on, returning the base color and the normalized
    /// direction.
    pub fn validate(&self) -> LinefieldResult<(Color, Direction)> {
        if self.count > Self::MAX_COUNT {
            return Err(LinefieldError::config(format!(
                "count must be at most {}, got {}",
                Self::MAX_COUNT,
                self.count
            )));
        }
        for (name, v) in [
            ("stroke_width", self.stroke_width),
            ("min_step_size", self.min_step_size),
            ("max_step_size", self.max_step_size),
            ("shortest", self.shortest),
            ("longest", self.longest),
            ("origin.x", self.origin.x),
            ("origin.y", self.origin.y),
        ] {
            if !v.is_finite() {
                return Err(LinefieldError::config(format!(
                    "{name} must be finite, got {v}"
                )));
            }
        }
        let color = self.color.clone().ok_or_else(|| {
            LinefieldError::config("color is required: lines have no default color")
        })?;
        let direction = Direction::new(self.direction)?;
        Ok((color, direction))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/config.rs"]
mod tests;
