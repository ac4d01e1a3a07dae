use crate::foundation::core::{Affine, Canvas, GRID_EXTENT, Point};
use crate::sketch::model::GridPoint;

/// Fraction of the available space the drawing may occupy; the remainder is
/// a margin so strokes never touch the surface edge.
const FIT_MARGIN: f64 = 0.8;

/// Line width as a fraction of the grid-to-surface scale, so visual
/// thickness stays consistent across surface sizes.
const LINE_WIDTH_FACTOR: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Uniform mapping from the logical grid onto a physical canvas.
///
/// Computed from the canvas dimensions at animation start; it must be
/// recomputed whenever the surface is resized, never reused across resizes.
/// `start` takes the transform by value each time to make that explicit.
pub struct ViewTransform {
    /// Uniform grid-to-pixel scale factor.
    pub scale: f64,
    /// Horizontal centering offset in pixels.
    pub offset_x: f64,
    /// Vertical centering offset in pixels.
    pub offset_y: f64,
}

impl ViewTransform {
    /// Fit the logical grid into a canvas: minimum-axis scale reduced by the
    /// fit margin, with the grid centered on both axes.
    pub fn fit(canvas: Canvas) -> Self {
        let scale_x = f64::from(canvas.width) / GRID_EXTENT;
        let scale_y = f64::from(canvas.height) / GRID_EXTENT;
        let scale = scale_x.min(scale_y) * FIT_MARGIN;

        Self {
            scale,
            offset_x: (f64::from(canvas.width) - GRID_EXTENT * scale) / 2.0,
            offset_y: (f64::from(canvas.height) - GRID_EXTENT * scale) / 2.0,
        }
    }

    /// Map a grid point to surface pixel coordinates.
    pub fn apply(&self, p: GridPoint) -> Point {
        Point::new(
            p.x as f64 * self.scale + self.offset_x,
            p.y as f64 * self.scale + self.offset_y,
        )
    }

    /// The same mapping as an affine matrix.
    pub fn to_affine(&self) -> Affine {
        Affine::translate((self.offset_x, self.offset_y)) * Affine::scale(self.scale)
    }

    /// Stroke rendering width in pixels, proportional to the scale.
    pub fn line_width(&self) -> f64 {
        self.scale * LINE_WIDTH_FACTOR
    }
}

#[cfg(test)]
#[path = "../tests/unit/transform.rs"]
mod tests;
