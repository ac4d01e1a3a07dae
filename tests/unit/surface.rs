use super::*;

#[test]
fn recorder_preserves_command_order() {
    let mut rec = SurfaceRecorder::new();
    rec.clear();
    rec.set_style(&StrokeStyle::default());
    rec.begin_path();
    rec.move_to(Point::new(1.0, 2.0));
    rec.line_to(Point::new(3.0, 4.0));
    rec.stroke();

    assert_eq!(
        rec.ops,
        vec![
            SurfaceOp::Clear,
            SurfaceOp::SetStyle(StrokeStyle::default()),
            SurfaceOp::BeginPath,
            SurfaceOp::MoveTo(Point::new(1.0, 2.0)),
            SurfaceOp::LineTo(Point::new(3.0, 4.0)),
            SurfaceOp::Stroke,
        ]
    );
}

#[test]
fn recorder_reports_configured_availability() {
    let mut rec = SurfaceRecorder::new();
    assert!(rec.is_available());
    rec.available = false;
    assert!(!rec.is_available());
}

#[test]
fn default_style_is_black_with_round_caps_and_joins() {
    let style = StrokeStyle::default();
    assert_eq!(style.color_rgba8, [0, 0, 0, 255]);
    assert_eq!(style.cap, Cap::Round);
    assert_eq!(style.join, Join::Round);

    let sized = StrokeStyle::with_width(3.5);
    assert_eq!(sized.width, 3.5);
    assert_eq!(sized.cap, Cap::Round);
}
