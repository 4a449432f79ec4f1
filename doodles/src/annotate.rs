//! Pen marks drawn over the letter text itself.
//!
//! Selected anchor phrases get a loose double circle, a wavy underline under
//! each wrapped line, or both. Anchor geometry comes in as an explicit map
//! from anchor id to the phrase's line boxes (one rect per wrapped line,
//! relative to the letter), so nothing here queries the page.

#[cfg(test)]
#[path = "annotate_test.rs"]
mod annotate_test;

use std::collections::HashMap;

use crate::assign::StrokeClass;
use crate::geom::{Point, Rect};
use crate::path::Stroke;
use crate::rng::hash_str;
use crate::shapes::{rough_ellipse, squiggle_underline};

const CIRCLE_PAD: f64 = 6.0;
const UNDERLINE_DROP: f64 = 6.0;
const UNDERLINE_OVERHANG: f64 = 2.0;

/// Line boxes per anchor id.
pub type AnchorGeometry = HashMap<String, Vec<Rect>>;

/// Which marks an anchor phrase receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorStyle {
    pub circle: bool,
    pub underline: bool,
    pub class: StrokeClass,
}

impl AnchorStyle {
    const fn new(circle: bool, underline: bool, class: StrokeClass) -> Self {
        Self { circle, underline, class }
    }
}

/// The letter's annotated anchors, in drawing order.
pub const DEFAULT_STYLES: [(&str, AnchorStyle); 7] = [
    ("beginner", AnchorStyle::new(true, false, StrokeClass::Ink)),
    ("coordinate", AnchorStyle::new(false, true, StrokeClass::Accent)),
    ("invert", AnchorStyle::new(true, true, StrokeClass::Ink)),
    ("limits", AnchorStyle::new(false, true, StrokeClass::Accent)),
    ("freed", AnchorStyle::new(true, false, StrokeClass::Ink)),
    ("responsibility", AnchorStyle::new(true, false, StrokeClass::Accent)),
    ("living", AnchorStyle::new(false, true, StrokeClass::Ink)),
];

/// Marks for one anchor phrase laid out as `lines`.
///
/// The circle loops twice around the union of all line boxes; underlines
/// follow each line box separately so wrapped phrases stay aligned.
#[must_use]
pub fn annotate(anchor_id: &str, lines: &[Rect], style: AnchorStyle) -> Vec<Stroke> {
    let seed = hash_str(anchor_id);
    let mut strokes = Vec::new();

    if style.circle {
        if let Some(union) = Rect::union(lines) {
            let center = union.center();
            let rx = union.width / 2.0 + CIRCLE_PAD;
            let ry = union.height / 2.0 + CIRCLE_PAD;
            strokes.push(Stroke::new(rough_ellipse(center, rx, ry, seed), style.class));
            strokes.push(Stroke::new(rough_ellipse(center, rx + 2.0, ry - 1.0, seed.wrapping_add(42)), style.class));
        }
    }

    if style.underline {
        for (i, line) in lines.iter().enumerate() {
            let y = line.bottom() + UNDERLINE_DROP;
            #[allow(clippy::cast_possible_truncation)]
            let line_seed = seed.wrapping_add(7).wrapping_add((i * 17) as u32);
            let d = squiggle_underline(
                Point::new(line.x - UNDERLINE_OVERHANG, y),
                Point::new(line.right() + UNDERLINE_OVERHANG, y),
                line_seed,
            );
            strokes.push(Stroke::new(d, style.class));
        }
    }

    strokes
}

/// Marks for every styled anchor present in `anchors`, in `styles` order.
///
/// Anchors missing from the map, or with no line boxes, are skipped.
#[must_use]
pub fn annotate_all(anchors: &AnchorGeometry, styles: &[(&str, AnchorStyle)]) -> Vec<Stroke> {
    styles
        .iter()
        .filter_map(|(id, style)| anchors.get(*id).filter(|lines| !lines.is_empty()).map(|lines| (id, lines, style)))
        .flat_map(|(id, lines, style)| annotate(id, lines, *style))
        .collect()
}
