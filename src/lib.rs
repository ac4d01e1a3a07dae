//! Inkstep turns a compact, possibly malformed stroke description of an
//! AI-generated line drawing into a progressive, stroke-by-stroke animation
//! on a 2D drawing surface.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: `RawPayload -> Drawing` ([`parse`]; total, never fails)
//! 2. **Fit**: `Canvas -> ViewTransform` (maps the fixed 0–50 grid onto the
//!    surface with a centered 20 % margin)
//! 3. **Animate**: [`Animator`] paces one line segment per tick onto a
//!    [`Surface`], with progress events, cancellation, and a settle delay
//!    before completion
//! 4. **Raster** (optional): [`rasterize`] the finished drawing to a
//!    [`FrameRGBA`] for static display
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Total at the boundaries**: the parser always returns renderable
//!   geometry and the engine always reaches a displayable terminal state;
//!   neither surfaces an error.
//! - **Deterministic stepping**: the engine exposes a single `tick` entry
//!   point and leaves scheduling to the caller, so tests step it without
//!   real delays.
//! - **Single writer**: the surface is written only by the engine's tick
//!   while running; cancellation is synchronous.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animate;
mod foundation;
mod raster;
mod sketch;
mod surface;
mod transform;

pub use animate::engine::{
    AnimationObserver, AnimationState, Animator, NoObserver, StartOutcome, Status, Tick,
};
pub use animate::pace::{Pace, SETTLE_DELAY};
pub use foundation::core::{Affine, BezPath, Canvas, GRID_EXTENT, Point, Rect, Vec2};
pub use foundation::error::{InkstepError, InkstepResult};
pub use raster::{FrameRGBA, rasterize, rasterize_styled};
pub use sketch::model::{Drawing, GridPoint, RawPayload, Stroke, evenly_spaced_t};
pub use sketch::parse::parse;
pub use surface::{Cap, Join, StrokeStyle, Surface, SurfaceOp, SurfaceRecorder};
pub use transform::ViewTransform;
