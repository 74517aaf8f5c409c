use crate::{
    foundation::error::LinefieldResult,
    render::backend::{LineRenderer, Segment},
};

/// A draw request as received by [`RecordingRenderer`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Frame start.
    Clear {
        /// Surface width in pixels.
        width: u32,
        /// Surface height in pixels.
        height: u32,
    },
    /// One stroked segment.
    Stroke(Segment),
}

/// Renderer that keeps every request in order instead of drawing.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recording.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Commands from the most recent clear onward; empty if nothing was cleared yet.
    pub fn last_frame(&self) -> &[DrawCommand] {
        match self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear { .. }))
        {
            Some(start) => &self.commands[start..],
            None => &[],
        }
    }

    /// Number of frames started.
    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear { .. }))
            .count()
    }

    /// All recorded segments, across frames.
    pub fn strokes(&self) -> impl Iterator<Item = &Segment> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Stroke(s) => Some(s),
            DrawCommand::Clear { .. } => None,
        })
    }
}

impl LineRenderer for RecordingRenderer {
    fn clear(&mut self, width: u32, height: u32) -> LinefieldResult<()> {
        self.commands.push(DrawCommand::Clear { width, height });
        Ok(())
    }

    fn stroke_segment(&mut self, segment: &Segment) -> LinefieldResult<()> {
        self.commands.push(DrawCommand::Stroke(segment.clone()));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/recording.rs"]
mod tests;
