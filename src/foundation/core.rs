pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Extent of the fixed logical coordinate grid on both axes.
///
/// Stroke points are expressed in this 0–50 space regardless of the
/// physical surface size; [`crate::ViewTransform`] maps it onto a canvas.
pub const GRID_EXTENT: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Physical drawing-surface dimensions in pixels.
pub struct Canvas {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas from pixel dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
