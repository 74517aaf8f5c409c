//! Linefield renders a field of oscillating line segments that advances one tick per pointer
//! movement.
//!
//! # Model
//!
//! A [`LineSet`] owns an ordered row of [`Line`]s laid out perpendicular to a shared
//! [`Direction`]. Each line grows or shrinks by its own step size between randomized bounds; when
//! it crosses a bound it reverses phase and draws fresh bounds and a fresh speed.
//!
//! One call to [`LineSet::step`] does exactly two things, in order:
//!
//! 1. **Draw**: clear the surface and stroke one round-capped segment per line via a
//!    [`LineRenderer`].
//! 2. **Advance**: move every line one tick along its random walk.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Injectable randomness**: every uniform draw goes through a [`UniformSource`], so a seeded
//!   [`Rng64`] reproduces a run exactly.
//! - **Explicit surfaces**: renderers receive surface dimensions on every clear; nothing reads
//!   ambient state.
//! - **Explicit resolution scale**: linear inputs are multiplied by a [`ResolutionScale`] passed at
//!   construction ([`ResolutionScale::DEFAULT`] is 10).
//!
//! # Renderers
//!
//! - [`CpuRenderer`] rasterizes with `vello_cpu` into a premultiplied [`FrameRGBA`].
//! - [`SvgRenderer`] writes an SVG document using CSS `rgba(..)` strokes.
//! - [`RecordingRenderer`] records [`DrawCommand`]s for inspection.
//!
//! [`Stage`] plays the role of the host page: it owns the scaled surface and turns pointer events
//! into steps.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod field;
mod foundation;
mod render;
mod stage;

pub use field::color::Color;
pub use field::config::LineSetConfig;
pub use field::direction::Direction;
pub use field::line::{Line, Phase};
pub use field::line_set::LineSet;
pub use foundation::core::{Point, ResolutionScale, Surface, Vec2};
pub use foundation::error::{LinefieldError, LinefieldResult};
pub use foundation::rng::{Rng64, UniformSource};
pub use render::backend::{FrameRGBA, LineCap, LineRenderer, RenderSettings, Segment};
pub use render::cpu::CpuRenderer;
pub use render::recording::{DrawCommand, RecordingRenderer};
pub use render::svg::SvgRenderer;
pub use stage::Stage;
