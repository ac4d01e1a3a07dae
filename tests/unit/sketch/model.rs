use super::*;

#[test]
fn evenly_spaced_t_covers_the_unit_interval_inclusive() {
    assert_eq!(evenly_spaced_t(0), Vec::<f64>::new());
    assert_eq!(evenly_spaced_t(1), vec![0.0]);
    assert_eq!(evenly_spaced_t(2), vec![0.0, 1.0]);
    assert_eq!(evenly_spaced_t(5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn segment_count_ignores_degenerate_strokes() {
    let drawing = Drawing {
        concept: "test".to_string(),
        strokes: vec![
            Stroke::with_even_t("a", vec![GridPoint::new(1, 1), GridPoint::new(2, 2)]),
            Stroke::with_even_t("b", vec![GridPoint::new(3, 3)]),
            Stroke::with_even_t("c", Vec::new()),
            Stroke::with_even_t(
                "d",
                vec![
                    GridPoint::new(4, 4),
                    GridPoint::new(5, 5),
                    GridPoint::new(6, 6),
                ],
            ),
        ],
    };
    assert_eq!(drawing.segment_count(), 3);
    assert!(!drawing.strokes[1].is_drawable());
    assert!(!drawing.strokes[2].is_drawable());
}

#[test]
fn normalized_regenerates_mismatched_t_values_and_is_idempotent() {
    let drawing = Drawing {
        concept: "test".to_string(),
        strokes: vec![Stroke {
            id: "a".to_string(),
            points: vec![
                GridPoint::new(1, 1),
                GridPoint::new(2, 2),
                GridPoint::new(3, 3),
            ],
            t_values: vec![0.5],
        }],
    };
    let once = drawing.normalized();
    assert_eq!(once.strokes[0].t_values, vec![0.0, 0.5, 1.0]);
    let twice = once.clone().normalized();
    assert_eq!(once, twice);
}

#[test]
fn normalized_keeps_matching_t_values_untouched() {
    let drawing = Drawing {
        concept: "test".to_string(),
        strokes: vec![Stroke {
            id: "a".to_string(),
            points: vec![GridPoint::new(1, 1), GridPoint::new(2, 2)],
            t_values: vec![0.1, 0.9],
        }],
    };
    assert_eq!(drawing.clone().normalized(), drawing);
}

#[test]
fn fallback_is_the_fixed_closed_square() {
    let fb = Drawing::fallback();
    assert_eq!(fb.concept, "fallback");
    assert_eq!(fb.strokes.len(), 1);
    let stroke = &fb.strokes[0];
    assert_eq!(stroke.id, "fallback_stroke");
    assert_eq!(stroke.points.len(), 5);
    assert_eq!(stroke.points[0], stroke.points[4]);
    assert_eq!(stroke.t_values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(fb.segment_count(), 4);
}

#[test]
fn json_round_trip_uses_the_wire_field_names() {
    let drawing = Drawing {
        concept: "cat".to_string(),
        strokes: vec![Stroke::with_even_t(
            "s1",
            vec![GridPoint::new(10, 20), GridPoint::new(30, 40)],
        )],
    };
    let json = serde_json::to_string(&drawing).unwrap();
    assert!(json.contains("\"tValues\""));
    assert_eq!(Drawing::from_json(&json).unwrap(), drawing);
}

#[test]
fn from_json_reports_serde_errors() {
    let err = Drawing::from_json("not json").unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn payload_classification_from_json_values() {
    let text = RawPayload::from_value(serde_json::json!("some text"));
    assert!(matches!(text, RawPayload::Text(s) if s == "some text"));

    let structured = RawPayload::from_value(serde_json::json!({
        "concept": "cup",
        "strokes": [{ "id": "s1", "points": [{ "x": 1, "y": 2 }], "tValues": [0.0] }]
    }));
    assert!(matches!(structured, RawPayload::Structured(d) if d.concept == "cup"));

    // Anything else is scanned as the text of its JSON rendering.
    let odd = RawPayload::from_value(serde_json::json!([1, 2, 3]));
    assert!(matches!(odd, RawPayload::Text(s) if s == "[1,2,3]"));
}
