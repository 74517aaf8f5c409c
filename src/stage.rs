use crate::{
    field::{config::LineSetConfig, line_set::LineSet},
    foundation::{
        core::{Point, ResolutionScale, Surface},
        error::LinefieldResult,
        rng::{Rng64, UniformSource},
    },
    render::backend::LineRenderer,
};

/// Host for a [`LineSet`]: owns the scaled surface and turns pointer events into steps.
///
/// Every trigger, whether the initial [`Stage::start`] or a [`Stage::pointer_moved`], performs
/// exactly one synchronous step. There is no queuing or debouncing.
#[derive(Debug)]
pub struct Stage<R = Rng64> {
    lines: LineSet<R>,
    scale: ResolutionScale,
    surface: Surface,
    steps: u64,
}

impl<R: UniformSource> Stage<R> {
    /// Scale `logical` by `scale` and build the line set from `config`.
    ///
    /// `config.origin` is interpreted in the scaled surface space.
    pub fn new(
        logical: Surface,
        config: &LineSetConfig,
        scale: ResolutionScale,
        rng: R,
    ) -> LinefieldResult<Self> {
        let surface = scale.surface(logical)?;
        let lines = LineSet::with_scale(config, scale, rng)?;
        tracing::debug!(
            width = surface.width,
            height = surface.height,
            "stage ready"
        );
        Ok(Self {
            lines,
            scale,
            surface,
            steps: 0,
        })
    }

    /// A stage showing [`LineSetConfig::demo`] for `logical`.
    pub fn demo(logical: Surface, scale: ResolutionScale, rng: R) -> LinefieldResult<Self> {
        let config = LineSetConfig::demo(scale.surface(logical)?);
        Self::new(logical, &config, scale, rng)
    }

    /// The first frame, drawn before any pointer input.
    pub fn start(&mut self, renderer: &mut dyn LineRenderer) -> LinefieldResult<()> {
        self.step(renderer)
    }

    /// One pointer-move event. `position` is only logged; every event advances the field once.
    pub fn pointer_moved(
        &mut self,
        position: Point,
        renderer: &mut dyn LineRenderer,
    ) -> LinefieldResult<()> {
        tracing::trace!(x = position.x, y = position.y, "pointer moved");
        self.step(renderer)
    }

    /// Change the surface later frames clear to. Line state is untouched.
    pub fn resize(&mut self, logical: Surface) -> LinefieldResult<()> {
        self.surface = self.scale.surface(logical)?;
        tracing::debug!(
            width = self.surface.width,
            height = self.surface.height,
            "stage resized"
        );
        Ok(())
    }

    fn step(&mut self, renderer: &mut dyn LineRenderer) -> LinefieldResult<()> {
        self.lines.step(self.surface, renderer)?;
        self.steps += 1;
        Ok(())
    }
}

impl<R> Stage<R> {
    /// Scaled surface handed to renderers.
    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Steps completed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// The hosted line set.
    pub fn line_set(&self) -> &LineSet<R> {
        &self.lines
    }
}

#[cfg(test)]
#[path = "../tests/unit/stage.rs"]
mod tests;
