use std::sync::LazyLock;

use regex::Regex;

use crate::sketch::model::{Drawing, GridPoint, RawPayload, Stroke, evenly_spaced_t};

/// Concept assigned to drawings recovered from free text, where the payload
/// carries no concept of its own.
const TEXT_CONCEPT: &str = "sketch";

/// One tagged stroke block: index marker, points section, t-values section,
/// id section, in that relative order, non-greedy across line boundaries.
static STROKE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<s(\d+)>.*?<points>(.*?)</points>.*?<t_values>(.*?)</t_values>.*?<id>(.*?)</id>")
        .expect("stroke block pattern is valid")
});

/// First digit run following an `x` marker inside a point token.
static X_COORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"x(\d+)").expect("x pattern is valid"));

/// First digit run following a `y` marker inside a point token.
static Y_COORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"y(\d+)").expect("y pattern is valid"));

/// Bare `x<digits>y<digits>` coordinate pair, no surrounding markers.
static LOOSE_POINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"x(\d+)y(\d+)").expect("loose point pattern is valid"));

/// Blank-line boundary between candidate blocks in the loose scan.
static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("blank line pattern is valid"));

/// Convert a raw payload into a normalized [`Drawing`].
///
/// Total: never fails and always returns a drawing with at least one stroke.
/// Strategies are attempted in order, first success wins:
///
/// 1. structured pass-through (with t-value normalization),
/// 2. tagged-block extraction (`<sN>`/`<points>`/`<t_values>`/`<id>`),
/// 3. loose coordinate-token scan over blank-line separated blocks,
/// 4. the fixed [`Drawing::fallback`] placeholder.
///
/// The parser performs no I/O and holds no state between calls.
#[tracing::instrument(skip_all)]
pub fn parse(payload: impl Into<RawPayload>) -> Drawing {
    match payload.into() {
        RawPayload::Structured(drawing) if !drawing.is_empty() => drawing.normalized(),
        RawPayload::Structured(_) => Drawing::fallback(),
        RawPayload::Text(text) => scan_tagged_blocks(&text)
            .or_else(|| scan_loose_tokens(&text))
            .unwrap_or_else(Drawing::fallback),
    }
}

/// Tier 2: extract strokes from tagged `<sN>`/`<points>`/`<t_values>`/`<id>`
/// blocks. Returns `None` when no block yields a usable stroke.
fn scan_tagged_blocks(text: &str) -> Option<Drawing> {
    let mut strokes = Vec::new();

    for caps in STROKE_BLOCK.captures_iter(text) {
        let index = caps.get(1).map_or("", |m| m.as_str());
        let points_section = caps.get(2).map_or("", |m| m.as_str());
        let t_section = caps.get(3).map_or("", |m| m.as_str());
        let id_section = caps.get(4).map_or("", |m| m.as_str());

        let points = parse_points_section(points_section);
        if points.is_empty() {
            continue;
        }

        let parsed_t = parse_t_section(t_section);
        let t_values = if parsed_t.len() == points.len() {
            parsed_t
        } else {
            evenly_spaced_t(points.len())
        };

        let id = if id_section.trim().is_empty() {
            format!("stroke_{index}")
        } else {
            id_section.trim().to_string()
        };

        strokes.push(Stroke {
            id,
            points,
            t_values,
        });
    }

    (!strokes.is_empty()).then(|| Drawing {
        concept: TEXT_CONCEPT.to_string(),
        strokes,
    })
}

/// Split a points section on commas and extract one grid point per token.
///
/// A missing `x` or `y` marker reads as 0, which makes a point at exactly
/// (0,0) indistinguishable from a token with no markers at all; such points
/// are treated as sentinels and dropped, including legitimate ones at the
/// grid origin. The generator's wire format relies on this.
fn parse_points_section(section: &str) -> Vec<GridPoint> {
    section
        .split(',')
        .filter_map(|token| {
            let token = token.replace('\'', "");
            let token = token.trim();
            let x = first_digit_run(&X_COORD, token);
            let y = first_digit_run(&Y_COORD, token);
            (x != 0 || y != 0).then_some(GridPoint::new(x, y))
        })
        .collect()
}

fn first_digit_run(pattern: &Regex, token: &str) -> i64 {
    pattern
        .captures(token)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Split a t-values section on commas into the floats that parse.
fn parse_t_section(section: &str) -> Vec<f64> {
    section
        .split(',')
        .filter_map(|token| token.trim().parse().ok())
        .collect()
}

/// Tier 3: split the text on blank-line boundaries and build one stroke per
/// block from every bare `x<digits>y<digits>` occurrence, in scan order.
///
/// No sentinel filtering here: with both digit runs present, (0,0) is an
/// explicit coordinate rather than a parse failure.
fn scan_loose_tokens(text: &str) -> Option<Drawing> {
    let mut strokes = Vec::new();

    for (block_index, block) in BLANK_LINE.split(text).enumerate() {
        let points: Vec<GridPoint> = LOOSE_POINT
            .captures_iter(block)
            .filter_map(|caps| {
                let x = caps.get(1)?.as_str().parse().ok()?;
                let y = caps.get(2)?.as_str().parse().ok()?;
                Some(GridPoint::new(x, y))
            })
            .collect();

        if points.is_empty() {
            continue;
        }
        strokes.push(Stroke::with_even_t(
            format!("stroke_{}", block_index + 1),
            points,
        ));
    }

    (!strokes.is_empty()).then(|| Drawing {
        concept: TEXT_CONCEPT.to_string(),
        strokes,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/parse.rs"]
mod tests;
