use kurbo::PathEl;

use crate::foundation::core::{BezPath, Canvas};
use crate::foundation::error::{InkstepError, InkstepResult};
use crate::sketch::model::Drawing;
use crate::surface::StrokeStyle;
use crate::transform::ViewTransform;

/// Tolerance for stroke-outline expansion, in surface pixels.
const STROKE_TOLERANCE: f64 = 0.25;

#[derive(Clone, Debug)]
/// A rendered frame: tightly packed RGBA8 rows.
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Pixel data, `width * height * 4` bytes.
    pub data: Vec<u8>,
    /// Whether color channels are premultiplied by alpha.
    pub premultiplied: bool,
}

/// Render the finished drawing as a static raster with the same fit and
/// stroke style the animation uses, over a white background.
///
/// This is the image a UI swaps in once the animation completes.
#[tracing::instrument(skip_all)]
pub fn rasterize(drawing: &Drawing, canvas: Canvas) -> InkstepResult<FrameRGBA> {
    let transform = ViewTransform::fit(canvas);
    rasterize_styled(
        drawing,
        canvas,
        &StrokeStyle::with_width(transform.line_width()),
    )
}

/// [`rasterize`] with an explicit stroke style.
pub fn rasterize_styled(
    drawing: &Drawing,
    canvas: Canvas,
    style: &StrokeStyle,
) -> InkstepResult<FrameRGBA> {
    let width: u16 = canvas
        .width
        .try_into()
        .map_err(|_| InkstepError::raster("canvas width exceeds u16"))?;
    let height: u16 = canvas
        .height
        .try_into()
        .map_err(|_| InkstepError::raster("canvas height exceeds u16"))?;

    let transform = ViewTransform::fit(canvas);
    let outline_style = kurbo::Stroke::new(style.width)
        .with_caps(style.cap)
        .with_join(style.join);

    let mut ctx = vello_cpu::RenderContext::new(width, height);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(canvas.width),
        f64::from(canvas.height),
    ));

    let [r, g, b, a] = style.color_rgba8;
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));

    for stroke in &drawing.strokes {
        if !stroke.is_drawable() {
            continue;
        }
        let mut path = BezPath::new();
        path.move_to(transform.apply(stroke.points[0]));
        for &p in &stroke.points[1..] {
            path.line_to(transform.apply(p));
        }
        let outline = kurbo::stroke(
            path,
            &outline_style,
            &kurbo::StrokeOpts::default(),
            STROKE_TOLERANCE,
        );
        ctx.fill_path(&bezpath_to_cpu(&outline));
    }

    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);

    Ok(FrameRGBA {
        width: canvas.width,
        height: canvas.height,
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    })
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/unit/raster.rs"]
mod tests;
