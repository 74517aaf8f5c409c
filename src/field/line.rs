use crate::{
    field::{color::Color, direction::Direction},
    foundation::core::Point,
};

/// Which way a line's length is currently moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Growing by `stepsize` per tick until it exceeds `max_length`.
    Ascending,
    /// Shrinking by `stepsize` per tick until it drops below `min_length`.
    Descending,
}

/// One animated segment with its own oscillation state.
///
/// Lines are created and mutated only by their owning [`crate::LineSet`].
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub(crate) position: Point,
    pub(crate) length: f64,
    pub(crate) min_length: f64,
    pub(crate) max_length: f64,
    pub(crate) color: Color,
    pub(crate) stepsize: f64,
    pub(crate) phase: Phase,
}

impl Line {
    /// Anchor point the segment is drawn from.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Current length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Lower bound that flips a descending line.
    pub fn min_length(&self) -> f64 {
        self.min_length
    }

    /// Upper bound that flips an ascending line.
    pub fn max_length(&self) -> f64 {
        self.max_length
    }

    /// The line's own color.
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Length change per tick.
    pub fn stepsize(&self) -> f64 {
        self.stepsize
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Shorthand for `phase() == Phase::Ascending`.
    pub fn is_ascending(&self) -> bool {
        self.phase == Phase::Ascending
    }

    /// Far end of the segment along `direction`.
    pub fn end_point(&self, direction: Direction) -> Point {
        let d = direction.as_vec2();
        Point::new(
            self.position.x + self.length * d.x,
            self.position.y + self.length * d.y,
        )
    }

    /// Move one step in the current phase. Returns `true` when a bound was crossed, in which
    /// case the phase has already flipped and the caller must redraw the bounds.
    pub(crate) fn tick(&mut self) -> bool {
        match self.phase {
            Phase::Ascending => {
                self.length += self.stepsize;
                if self.length > self.max_length {
                    self.phase = Phase::Descending;
                    return true;
                }
            }
            Phase::Descending => {
                self.length -= self.stepsize;
                if self.length < self.min_length {
                    self.phase = Phase::Ascending;
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/line.rs"]
mod tests;
