use super::*;

#[test]
fn rasterize_produces_a_full_frame() {
    let frame = rasterize(&Drawing::fallback(), Canvas::new(100, 80)).unwrap();
    assert_eq!(frame.width, 100);
    assert_eq!(frame.height, 80);
    assert_eq!(frame.data.len(), 100 * 80 * 4);
    assert!(frame.premultiplied);
}

#[test]
fn strokes_leave_marks_on_the_white_background() {
    let frame = rasterize(&Drawing::fallback(), Canvas::new(200, 200)).unwrap();
    let non_white = frame
        .data
        .chunks_exact(4)
        .filter(|px| px[0] != 255 || px[1] != 255 || px[2] != 255)
        .count();
    assert!(non_white > 0, "expected the square outline to be visible");
}

#[test]
fn empty_drawings_render_a_blank_frame() {
    let empty = Drawing {
        concept: "blank".to_string(),
        strokes: Vec::new(),
    };
    let frame = rasterize(&empty, Canvas::new(64, 64)).unwrap();
    assert!(
        frame
            .data
            .chunks_exact(4)
            .all(|px| px.iter().all(|&b| b == 255))
    );
}

#[test]
fn oversized_canvases_are_rejected() {
    let err = rasterize(&Drawing::fallback(), Canvas::new(70_000, 10)).unwrap_err();
    assert!(err.to_string().contains("raster error:"));
}

#[test]
fn styled_raster_uses_the_requested_color() {
    let style = StrokeStyle {
        color_rgba8: [255, 0, 0, 255],
        ..StrokeStyle::with_width(4.0)
    };
    let frame = rasterize_styled(&Drawing::fallback(), Canvas::new(200, 200), &style).unwrap();
    let reddish = frame
        .data
        .chunks_exact(4)
        .filter(|px| px[0] > 200 && px[1] < 64 && px[2] < 64)
        .count();
    assert!(reddish > 0, "expected red stroke pixels");
}
