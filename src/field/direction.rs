use crate::foundation::{
    core::Vec2,
    error::{LinefieldError, LinefieldResult},
};

/// Unit-length direction shared by every line of a set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Direction(Vec2);

impl Direction {
    /// Normalize `v` to unit length.
    ///
    /// Zero-length or non-finite input is rejected.
    pub fn new(v: Vec2) -> LinefieldResult<Self> {
        let len = v.hypot2().sqrt();
        if !len.is_finite() || len == 0.0 {
            return Err(LinefieldError::config(format!(
                "direction must be a finite non-zero vector, got ({}, {})",
                v.x, v.y
            )));
        }
        Ok(Self(Vec2::new(v.x / len, v.y / len)))
    }

    /// The unit vector.
    pub fn as_vec2(self) -> Vec2 {
        self.0
    }

    /// Direction rotated by 90 degrees: `(y, -x)`.
    pub fn perpendicular(self) -> Vec2 {
        Vec2::new(self.0.y, -self.0.x)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/direction.rs"]
mod tests;
