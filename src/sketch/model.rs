use crate::foundation::error::{InkstepError, InkstepResult};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// A point in the fixed logical grid (conventionally 0–50 on both axes).
pub struct GridPoint {
    /// Horizontal grid coordinate.
    pub x: i64,
    /// Vertical grid coordinate.
    pub y: i64,
}

impl GridPoint {
    /// Build a grid point from its coordinates.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One continuous pen path: an ordered sequence of grid points drawn as
/// connected line segments.
pub struct Stroke {
    /// Stable stroke identifier (from the payload, or synthesized).
    pub id: String,
    /// Ordered points; non-empty in any parsed [`Drawing`].
    pub points: Vec<GridPoint>,
    /// Per-point timing metadata in `[0, 1]`, same length as `points`.
    ///
    /// Nothing in the animation engine consumes these; they are carried as
    /// passthrough metadata and normalized so the length invariant holds.
    #[serde(rename = "tValues", default)]
    pub t_values: Vec<f64>,
}

impl Stroke {
    /// Build a stroke with evenly spaced t-values.
    pub fn with_even_t(id: impl Into<String>, points: Vec<GridPoint>) -> Self {
        let t_values = evenly_spaced_t(points.len());
        Self {
            id: id.into(),
            points,
            t_values,
        }
    }

    /// Number of drawable line segments: `max(points.len() - 1, 0)`.
    pub fn segment_count(&self) -> u64 {
        self.points.len().saturating_sub(1) as u64
    }

    /// Whether the stroke has enough points to draw at least one segment.
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A parsed sketch: a concept label and its strokes in draw order.
///
/// Stroke insertion order is the draw order and is preserved exactly; it is
/// the only ordering that matters. A `Drawing` is created once per parse and
/// treated as immutable afterwards.
pub struct Drawing {
    /// Concept label for the sketch (e.g. the thing that was asked for).
    pub concept: String,
    /// Strokes in draw order.
    pub strokes: Vec<Stroke>,
}

impl Drawing {
    /// The fixed placeholder drawing returned when no strokes can be parsed
    /// from a payload: a closed square in the middle of the grid.
    pub fn fallback() -> Self {
        Self {
            concept: "fallback".to_string(),
            strokes: vec![Stroke {
                id: "fallback_stroke".to_string(),
                points: vec![
                    GridPoint::new(10, 10),
                    GridPoint::new(40, 10),
                    GridPoint::new(40, 40),
                    GridPoint::new(10, 40),
                    GridPoint::new(10, 10),
                ],
                t_values: vec![0.0, 0.25, 0.5, 0.75, 1.0],
            }],
        }
    }

    /// Total drawable segments across all strokes.
    ///
    /// Strokes with fewer than two points contribute zero; they are skipped
    /// entirely during animation.
    pub fn segment_count(&self) -> u64 {
        self.strokes.iter().map(Stroke::segment_count).sum()
    }

    /// Whether the drawing contains no strokes at all.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Enforce the t-value invariant: any stroke whose `t_values` length
    /// does not match its point count gets evenly spaced values regenerated.
    ///
    /// Idempotent, so parsing stays idempotent when applied to structured
    /// payloads.
    pub fn normalized(mut self) -> Self {
        for stroke in &mut self.strokes {
            if stroke.t_values.len() != stroke.points.len() {
                stroke.t_values = evenly_spaced_t(stroke.points.len());
            }
        }
        self
    }

    /// Deserialize a drawing from JSON (the structured backend payload).
    pub fn from_json(json: &str) -> InkstepResult<Self> {
        serde_json::from_str(json).map_err(|e| InkstepError::serde(e.to_string()))
    }
}

/// `n` evenly spaced values from 0.0 to 1.0 inclusive.
///
/// A single value is `[0.0]`; zero values is the empty vector. This is the
/// regeneration rule for missing or mismatched stroke t-values.
pub fn evenly_spaced_t(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => (0..n).map(|i| i as f64 / (n - 1) as f64).collect(),
    }
}

#[derive(Clone, Debug)]
/// A raw payload as handed over by the sketch-generation backend: either
/// free text to be scanned, or an already-structured drawing.
pub enum RawPayload {
    /// Unstructured text containing zero or more stroke blocks.
    Text(String),
    /// An already-parsed drawing, passed through (after normalization).
    Structured(Drawing),
}

impl RawPayload {
    /// Classify an arbitrary JSON value as a payload.
    ///
    /// Strings become [`RawPayload::Text`]; drawing-shaped objects become
    /// [`RawPayload::Structured`]; anything else is scanned as the text of
    /// its JSON rendering. Infallible, so the parser stays total.
    pub fn from_value(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Self::Text(s),
            other => match serde_json::from_value::<Drawing>(other.clone()) {
                Ok(drawing) => Self::Structured(drawing),
                Err(_) => Self::Text(other.to_string()),
            },
        }
    }
}

impl From<&str> for RawPayload {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawPayload {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Drawing> for RawPayload {
    fn from(d: Drawing) -> Self {
        Self::Structured(d)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/model.rs"]
mod tests;
