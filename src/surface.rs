pub use kurbo::{Cap, Join};

use crate::foundation::core::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
/// Stroke rendering style applied to a surface before drawing.
pub struct StrokeStyle {
    /// Straight (non-premultiplied) RGBA stroke color.
    pub color_rgba8: [u8; 4],
    /// Line width in surface pixels.
    pub width: f64,
    /// Line cap; round caps are required for visual fidelity.
    pub cap: Cap,
    /// Line join; round joins are required for visual fidelity.
    pub join: Join,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color_rgba8: [0, 0, 0, 255],
            width: 2.0,
            cap: Cap::Round,
            join: Join::Round,
        }
    }
}

impl StrokeStyle {
    /// The default style at a given line width.
    pub fn with_width(width: f64) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }
}

/// A 2D drawing target consuming path-construction and stroke commands.
///
/// This is the seam to the external rendering surface (an HTML canvas, a
/// pixmap, a window). Implementations own no parsing or timing logic; the
/// animation engine is the only writer while an animation is running.
pub trait Surface {
    /// Erase the whole surface.
    fn clear(&mut self);

    /// Set the stroke style used by subsequent [`Surface::stroke`] calls.
    fn set_style(&mut self, style: &StrokeStyle);

    /// Start a new path, discarding any current path state.
    fn begin_path(&mut self);

    /// Move the pen without drawing.
    fn move_to(&mut self, p: Point);

    /// Extend the current path with a line segment.
    fn line_to(&mut self, p: Point);

    /// Render the current path with the active style. Called after every
    /// segment so partial strokes stay visible if interrupted.
    fn stroke(&mut self);

    /// Whether the target can currently be drawn to.
    ///
    /// Adapters over lossy targets may report loss here; the engine
    /// short-circuits to a completed state instead of animating.
    fn is_available(&self) -> bool {
        true
    }
}

#[derive(Clone, Debug, PartialEq)]
/// One recorded surface command.
pub enum SurfaceOp {
    /// The surface was erased.
    Clear,
    /// A stroke style was applied.
    SetStyle(StrokeStyle),
    /// A new path was started.
    BeginPath,
    /// Pen moved without drawing.
    MoveTo(Point),
    /// A line segment was added.
    LineTo(Point),
    /// The current path was rendered.
    Stroke,
}

#[derive(Debug)]
/// A [`Surface`] that records every command it receives.
///
/// Deterministic test double for the engine's command stream; also handy
/// when diagnosing an adapter by replaying its input.
pub struct SurfaceRecorder {
    /// Commands in receive order.
    pub ops: Vec<SurfaceOp>,
    /// When false, [`Surface::is_available`] reports loss.
    pub available: bool,
}

impl Default for SurfaceRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceRecorder {
    /// A fresh, available recorder with no commands.
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            available: true,
        }
    }

    /// Count of recorded ops matching a predicate.
    pub fn count(&self, pred: impl Fn(&SurfaceOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Surface for SurfaceRecorder {
    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
    }

    fn set_style(&mut self, style: &StrokeStyle) {
        self.ops.push(SurfaceOp::SetStyle(*style));
    }

    fn begin_path(&mut self) {
        self.ops.push(SurfaceOp::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.ops.push(SurfaceOp::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.ops.push(SurfaceOp::LineTo(p));
    }

    fn stroke(&mut self) {
        self.ops.push(SurfaceOp::Stroke);
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

#[cfg(test)]
#[path = "../tests/unit/surface.rs"]
mod tests;
