use crate::{
    field::{
        color::Color,
        config::LineSetConfig,
        direction::Direction,
        line::{Line, Phase},
    },
    foundation::{
        core::{Point, ResolutionScale, Surface},
        error::LinefieldResult,
        rng::{Rng64, UniformSource},
    },
    render::backend::{LineCap, LineRenderer, Segment},
};

// Opacity is `ALPHA_SPAN * u + ALPHA_MIN` in exactly this order; `uniform(0.1, 0.4)` rounds
// differently and breaks seeded reproduction.
const ALPHA_MIN: f64 = 0.1;
const ALPHA_SPAN: f64 = 0.3;

/// Scaled sampling ranges shared by every line.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Ranges {
    min_step: f64,
    max_step: f64,
    shortest: f64,
    longest: f64,
}

impl Ranges {
    fn stepsize(&self, rng: &mut impl UniformSource) -> f64 {
        rng.uniform(self.min_step, self.max_step)
    }

    fn length(&self, rng: &mut impl UniformSource) -> f64 {
        rng.uniform(self.shortest, self.longest)
    }

    /// `(min_length, max_length)`. The minimum is drawn below the freshly drawn maximum rather
    /// than from the full range, so the pair is always ordered when `shortest <= longest`.
    fn bounds(&self, rng: &mut impl UniformSource) -> (f64, f64) {
        let max_length = rng.uniform(self.shortest, self.longest);
        let min_length = rng.uniform(self.shortest, max_length);
        (min_length, max_length)
    }
}

/// An ordered row of oscillating lines plus the configuration they share.
///
/// Lines are laid out centered on the origin along the perpendicular of the direction, one
/// stroke width apart. The set never gains or loses lines after construction.
#[derive(Clone, Debug)]
pub struct LineSet<R = Rng64> {
    lines: Vec<Line>,
    color: Color,
    direction: Direction,
    origin: Point,
    stroke_width: f64,
    ranges: Ranges,
    scale: ResolutionScale,
    rng: R,
}

impl<R: UniformSource> LineSet<R> {
    /// Build a set using [`ResolutionScale::DEFAULT`].
    pub fn new(config: &LineSetConfig, rng: R) -> LinefieldResult<Self> {
        Self::with_scale(config, ResolutionScale::DEFAULT, rng)
    }

    /// Build a set, multiplying linear quantities by `scale`.
    ///
    /// Random draws happen in a fixed order per line: opacity, step size, length, maximum
    /// length, minimum length. A seeded source therefore reproduces the set exactly.
    pub fn with_scale(
        config: &LineSetConfig,
        scale: ResolutionScale,
        mut rng: R,
    ) -> LinefieldResult<Self> {
        let (color, direction) = config.validate()?;
        let stroke_width = scale.apply(config.stroke_width);
        let ranges = Ranges {
            min_step: scale.apply(config.min_step_size),
            max_step: scale.apply(config.max_step_size),
            shortest: scale.apply(config.shortest),
            longest: scale.apply(config.longest),
        };

        let perp = direction.perpendicular();
        let half = (config.count / 2) as f64;
        let start = Point::new(
            config.origin.x - half * stroke_width * perp.x,
            config.origin.y - half * stroke_width * perp.y,
        );

        let mut lines = Vec::with_capacity(config.count);
        for i in 0..config.count {
            let offset = i as f64 * stroke_width;
            let mut line_color = color.clone();
            line_color.set_alpha(ALPHA_SPAN * rng.next_unit() + ALPHA_MIN);
            let stepsize = ranges.stepsize(&mut rng);
            let length = ranges.length(&mut rng);
            let (min_length, max_length) = ranges.bounds(&mut rng);
            lines.push(Line {
                position: Point::new(start.x + offset * perp.x, start.y + offset * perp.y),
                length,
                min_length,
                max_length,
                color: line_color,
                stepsize,
                phase: Phase::Descending,
            });
        }

        tracing::debug!(
            count = lines.len(),
            stroke_width,
            scale = scale.factor(),
            "created line set"
        );

        Ok(Self {
            lines,
            color,
            direction,
            origin: config.origin,
            stroke_width,
            ranges,
            scale,
            rng,
        })
    }

    /// Draw the current frame, then advance every line one tick.
    ///
    /// If drawing fails the error is returned and no line is advanced.
    #[tracing::instrument(level = "trace", skip_all, fields(lines = self.lines.len()))]
    pub fn step(
        &mut self,
        surface: Surface,
        renderer: &mut dyn LineRenderer,
    ) -> LinefieldResult<()> {
        self.draw(surface, renderer)?;
        self.advance();
        Ok(())
    }

    /// Clear `surface` and stroke one segment per line, in order.
    pub fn draw(&self, surface: Surface, renderer: &mut dyn LineRenderer) -> LinefieldResult<()> {
        renderer.clear(surface.width, surface.height)?;
        for line in &self.lines {
            renderer.stroke_segment(&self.segment_for(line))?;
        }
        Ok(())
    }

    /// Move every line one tick; lines that cross a bound flip phase and redraw their step size
    /// and bounds.
    pub fn advance(&mut self) {
        let ranges = self.ranges;
        for (index, line) in self.lines.iter_mut().enumerate() {
            if line.tick() {
                line.stepsize = ranges.stepsize(&mut self.rng);
                let (min_length, max_length) = ranges.bounds(&mut self.rng);
                line.min_length = min_length;
                line.max_length = max_length;
                tracing::trace!(
                    index,
                    phase = ?line.phase,
                    length = line.length,
                    min_length,
                    max_length,
                    "line crossed bound"
                );
            }
        }
    }

    /// The segment `line` is drawn as.
    pub fn segment_for(&self, line: &Line) -> Segment {
        Segment {
            from: line.position,
            to: line.end_point(self.direction),
            color: line.color.clone(),
            width: self.stroke_width,
            cap: LineCap::Round,
        }
    }
}

impl<R> LineSet<R> {
    /// Lines in draw order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the set has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Base color every line's color was copied from.
    pub fn base_color(&self) -> &Color {
        &self.color
    }

    /// Normalized direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Anchor the row is centered on.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Scaled stroke width.
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Scaled `(shortest, longest)` length range.
    pub fn length_range(&self) -> (f64, f64) {
        (self.ranges.shortest, self.ranges.longest)
    }

    /// Scaled `(min, max)` step size range.
    pub fn step_range(&self) -> (f64, f64) {
        (self.ranges.min_step, self.ranges.max_step)
    }

    /// Scale applied at construction.
    pub fn scale(&self) -> ResolutionScale {
        self.scale
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/line_set.rs"]
mod tests;
